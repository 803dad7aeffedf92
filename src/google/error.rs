//! Error type shared by the Drive and Sheets clients.

use thiserror::Error;

/// Errors raised by remote Drive/Sheets calls.
///
/// Per-link pipeline gates never propagate these past the orchestrator; they
/// are logged and turned into a skip decision. Only the bootstrap read of
/// the links column lets an `ApiError` abort the run.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection, TLS, body decode)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status
    #[error("API returned HTTP {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Service-supplied error message, or the canonical reason phrase
        message: String,
    },
}

impl ApiError {
    /// Creates a `Status` error from a status code and message.
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Returns the HTTP status code when the service answered at all.
    #[must_use]
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_contains_code_and_reason() {
        let err = ApiError::status(404, "File not found: abc");
        let msg = err.to_string();
        assert!(msg.contains("404"), "should contain status code: {msg}");
        assert!(msg.contains("File not found"), "should contain reason: {msg}");
    }

    #[test]
    fn test_http_status_accessor() {
        let err = ApiError::status(403, "forbidden");
        assert_eq!(err.http_status(), Some(403));
    }
}
