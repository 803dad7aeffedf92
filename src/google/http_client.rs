//! Shared HTTP client construction policy for the API clients.
//!
//! Centralizes networking defaults so the Drive and Sheets clients stay
//! consistent on user-agent and compression. No explicit timeouts are set;
//! the transport defaults are inherited for the whole run.

use reqwest::{Client, Response};

use super::ApiError;

/// User-Agent for API requests (identifies the tool).
fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("sheet-harvester/{version}")
}

/// Builds an API HTTP client using shared project policy.
///
/// # Errors
///
/// Returns [`ApiError`] when client construction fails.
pub(super) fn build_api_http_client() -> Result<Client, ApiError> {
    let client = Client::builder()
        .user_agent(default_user_agent())
        .gzip(true)
        .build()?;
    Ok(client)
}

/// Maps a non-success response to [`ApiError::Status`], surfacing the
/// service-supplied error message when the body carries one.
///
/// Google error bodies look like `{"error": {"message": "...", ...}}`; when
/// that shape is absent the canonical reason phrase is used instead.
pub(super) async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let fallback = status
        .canonical_reason()
        .unwrap_or("unrecognized status")
        .to_string();
    let message = match response.json::<serde_json::Value>().await {
        Ok(body) => body
            .pointer("/error/message")
            .and_then(serde_json::Value::as_str)
            .map_or(fallback, ToString::to_string),
        Err(_) => fallback,
    };

    Err(ApiError::status(status.as_u16(), message))
}
