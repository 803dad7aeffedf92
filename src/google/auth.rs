//! Credentials produced by the external OAuth consent flow.
//!
//! The interactive browser consent flow is outside this program. The run
//! consumes an already-minted access token (environment-sourced) as one
//! [`Credentials`] value, constructed at process start and shared by both
//! API clients. Re-authorization mid-run is not handled.

use thiserror::Error;

/// Environment variable holding the OAuth2 access token.
pub const ACCESS_TOKEN_ENV: &str = "GOOGLE_ACCESS_TOKEN";

/// OAuth scopes the token must carry for a full run: read-only spreadsheet
/// values, file-scoped drive write (for created copies), and read-only
/// drive metadata.
pub const REQUIRED_SCOPES: [&str; 3] = [
    "https://www.googleapis.com/auth/spreadsheets.readonly",
    "https://www.googleapis.com/auth/drive.file",
    "https://www.googleapis.com/auth/drive.readonly",
];

/// Errors raised while loading credentials.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The access-token environment variable is unset or empty
    #[error(
        "missing access token: set {ACCESS_TOKEN_ENV} to an OAuth2 token authorized for the required scopes"
    )]
    MissingToken,
}

/// An OAuth2 access token reused for every remote call in the run.
#[derive(Clone)]
pub struct Credentials {
    access_token: String,
}

impl Credentials {
    /// Wraps an already-minted access token.
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    /// Loads the access token from the [`ACCESS_TOKEN_ENV`] environment
    /// variable.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingToken`] when the variable is unset or
    /// blank.
    pub fn from_env() -> Result<Self, AuthError> {
        match std::env::var(ACCESS_TOKEN_ENV) {
            Ok(token) if !token.trim().is_empty() => Ok(Self::new(token)),
            _ => Err(AuthError::MissingToken),
        }
    }

    /// Returns the bearer token for request authorization headers.
    #[must_use]
    pub fn bearer_token(&self) -> &str {
        &self.access_token
    }
}

// Token never appears in Debug output or logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_expose_bearer_token() {
        let creds = Credentials::new("ya29.token");
        assert_eq!(creds.bearer_token(), "ya29.token");
    }

    #[test]
    fn test_credentials_debug_redacts_token() {
        let creds = Credentials::new("ya29.secret-token");
        let debug = format!("{creds:?}");
        assert!(
            !debug.contains("secret-token"),
            "token must not leak into Debug output: {debug}"
        );
    }

    #[test]
    fn test_missing_token_error_names_env_var() {
        let msg = AuthError::MissingToken.to_string();
        assert!(msg.contains("GOOGLE_ACCESS_TOKEN"), "got: {msg}");
    }
}
