//! Drive v3 client - file metadata reads and copy/convert operations.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::http_client::{build_api_http_client, check_status};
use super::{ApiError, Credentials, FileCopier, MetadataReader};

/// Default Drive API base URL.
const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/drive/v3";

/// MIME type of the service's own structured-table representation, as
/// opposed to an uploaded foreign file merely stored alongside it.
pub const NATIVE_SPREADSHEET_MIME: &str = "application/vnd.google-apps.spreadsheet";

/// File metadata returned by the Drive API.
///
/// Only the fields this tool reads are deserialized; `fields` narrowing on
/// the request keeps responses small anyway.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    /// Opaque identifier the service uses to address the file.
    #[serde(default)]
    pub id: String,
    /// Human-facing file name.
    pub name: Option<String>,
    /// MIME type; [`NATIVE_SPREADSHEET_MIME`] for native spreadsheets.
    pub mime_type: Option<String>,
}

impl DriveFile {
    /// Returns true when the file is a native spreadsheet.
    #[must_use]
    pub fn is_native_spreadsheet(&self) -> bool {
        self.mime_type.as_deref() == Some(NATIVE_SPREADSHEET_MIME)
    }
}

/// Request body for the copy/convert operation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CopyRequest<'a> {
    name: &'a str,
    mime_type: &'a str,
}

/// Drive v3 REST client.
///
/// Implements [`MetadataReader`] (accessibility and format probes) and
/// [`FileCopier`] (native-format conversion via server-side copy).
pub struct DriveClient {
    client: Client,
    base_url: String,
    credentials: Credentials,
}

impl DriveClient {
    /// Creates a client against the public Drive API.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if HTTP client construction fails.
    pub fn new(credentials: &Credentials) -> Result<Self, ApiError> {
        Self::with_base_url(credentials, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if HTTP client construction fails.
    pub fn with_base_url(
        credentials: &Credentials,
        base_url: impl Into<String>,
    ) -> Result<Self, ApiError> {
        Ok(Self {
            client: build_api_http_client()?,
            base_url: base_url.into(),
            credentials: credentials.clone(),
        })
    }
}

impl std::fmt::Debug for DriveClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriveClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl MetadataReader for DriveClient {
    #[tracing::instrument(skip(self), fields(file_id = %file_id))]
    async fn file_metadata(
        &self,
        file_id: &str,
        fields: Option<&str>,
    ) -> Result<DriveFile, ApiError> {
        let mut url = format!("{}/files/{}", self.base_url, urlencoding::encode(file_id));
        if let Some(fields) = fields {
            url.push_str("?fields=");
            url.push_str(&urlencoding::encode(fields));
        }

        debug!(api_url = %url, "Fetching file metadata");
        let response = self
            .client
            .get(&url)
            .bearer_auth(self.credentials.bearer_token())
            .send()
            .await?;
        let file = check_status(response).await?.json::<DriveFile>().await?;
        Ok(file)
    }
}

#[async_trait]
impl FileCopier for DriveClient {
    #[tracing::instrument(skip(self), fields(file_id = %file_id, name = %name))]
    async fn copy_as_spreadsheet(&self, file_id: &str, name: &str) -> Result<DriveFile, ApiError> {
        let url = format!(
            "{}/files/{}/copy",
            self.base_url,
            urlencoding::encode(file_id)
        );
        let body = CopyRequest {
            name,
            mime_type: NATIVE_SPREADSHEET_MIME,
        };

        debug!(api_url = %url, "Copying file as native spreadsheet");
        let response = self
            .client
            .post(&url)
            .bearer_auth(self.credentials.bearer_token())
            .json(&body)
            .send()
            .await?;
        let file = check_status(response).await?.json::<DriveFile>().await?;
        Ok(file)
    }
}
