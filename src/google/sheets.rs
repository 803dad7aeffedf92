//! Sheets v4 client - spreadsheet metadata and value-range reads.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::http_client::{build_api_http_client, check_status};
use super::{ApiError, Credentials, ValueRangeFetcher, ValueReader};

/// Default Sheets API base URL.
const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com/v4";

/// An ordered sequence of text cell values of variable length. The service
/// omits wholly-empty trailing cells, so rows are not padded to a common
/// width.
pub type Row = Vec<String>;

// ==================== Sheets API Response Types ====================

/// Top-level spreadsheet metadata response (narrowed by `fields`).
#[derive(Debug, Deserialize)]
struct Spreadsheet {
    #[serde(default)]
    sheets: Vec<Sheet>,
}

/// One sub-table entry from the spreadsheet's sheet list.
#[derive(Debug, Deserialize)]
struct Sheet {
    properties: Option<SheetProperties>,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: Option<String>,
}

/// A values read response. Cells arrive as JSON scalars; numbers and
/// booleans are stringified so the pipeline treats every cell as opaque
/// text.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

impl ValueRange {
    fn into_rows(self) -> Vec<Row> {
        self.values
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_text).collect())
            .collect()
    }
}

fn cell_to_text(cell: serde_json::Value) -> String {
    match cell {
        serde_json::Value::String(text) => text,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

// ==================== SheetsClient ====================

/// Sheets v4 REST client.
///
/// Implements [`ValueReader`] (sheet-title inventory) and
/// [`ValueRangeFetcher`] (rectangular cell reads).
pub struct SheetsClient {
    client: Client,
    base_url: String,
    credentials: Credentials,
}

impl SheetsClient {
    /// Creates a client against the public Sheets API.
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

impl std::fmt::Debug for SheetsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetsClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ValueReader for SheetsClient {
    #[tracing::instrument(skip(self), fields(spreadsheet_id = %spreadsheet_id))]
    async fn sheet_titles(&self, spreadsheet_id: &str) -> Result<Vec<String>, ApiError> {
        let url = format!(
            "{}/spreadsheets/{}?fields=sheets.properties.title",
            self.base_url,
            urlencoding::encode(spreadsheet_id)
        );

        debug!(api_url = %url, "Fetching spreadsheet metadata");
        let response = self
            .client
            .get(&url)
            .bearer_auth(self.credentials.bearer_token())
            .send()
            .await?;
        let spreadsheet = check_status(response).await?.json::<Spreadsheet>().await?;

        let titles = spreadsheet
            .sheets
            .into_iter()
            .filter_map(|sheet| sheet.properties.and_then(|properties| properties.title))
            .collect();
        Ok(titles)
    }
}

#[async_trait]
impl ValueRangeFetcher for SheetsClient {
    #[tracing::instrument(skip(self), fields(spreadsheet_id = %spreadsheet_id, range = %range))]
    async fn value_range(&self, spreadsheet_id: &str, range: &str) -> Result<Vec<Row>, ApiError> {
        let url = format!(
            "{}/spreadsheets/{}/values/{}",
            self.base_url,
            urlencoding::encode(spreadsheet_id),
            urlencoding::encode(range)
        );

        debug!(api_url = %url, "Fetching value range");
        let response = self
            .client
            .get(&url)
            .bearer_auth(self.credentials.bearer_token())
            .send()
            .await?;
        let values = check_status(response).await?.json::<ValueRange>().await?;
        Ok(values.into_rows())
    }
}
