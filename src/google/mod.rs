//! Google Drive/Sheets REST access and the capability traits the pipeline
//! consumes.
//!
//! # Architecture
//!
//! - [`DriveClient`] - Drive v3 file metadata and copy/convert operations
//! - [`SheetsClient`] - Sheets v4 spreadsheet metadata and value-range reads
//! - [`MetadataReader`] / [`FileCopier`] / [`ValueReader`] / [`ValueRangeFetcher`] -
//!   capability traits the orchestrator depends on, so tests can drive the
//!   pipeline with in-process fakes
//! - [`Credentials`] - OAuth2 access token produced by the external consent
//!   flow, constructed once at process start
//!
//! Both clients bind to the public REST surface via `reqwest` and accept a
//! custom base URL for wiremock-driven tests. No explicit timeout is
//! configured; the transport defaults apply for the whole run.

mod auth;
mod drive;
mod error;
mod http_client;
mod sheets;

pub use auth::{AuthError, Credentials, REQUIRED_SCOPES};
pub use drive::{DriveClient, DriveFile, NATIVE_SPREADSHEET_MIME};
pub use error::ApiError;
pub use sheets::{Row, SheetsClient};

use async_trait::async_trait;

/// Reads file metadata from the storage service.
///
/// Used for both the accessibility probe (any successful fetch means the
/// file is reachable) and the format probe (`mimeType` field comparison).
/// Both reads are idempotent and safe to repeat.
#[async_trait]
pub trait MetadataReader: Send + Sync {
    /// Fetches metadata for a stored file, optionally restricted to the
    /// given comma-separated field list.
    async fn file_metadata(
        &self,
        file_id: &str,
        fields: Option<&str>,
    ) -> Result<DriveFile, ApiError>;
}

/// Copies a stored file, materializing the copy in the native spreadsheet
/// format (service-side conversion of foreign tabular files).
#[async_trait]
pub trait FileCopier: Send + Sync {
    /// Copies `file_id` into a new native spreadsheet named `name` and
    /// returns the new file's metadata. The original is left unmodified.
    async fn copy_as_spreadsheet(&self, file_id: &str, name: &str) -> Result<DriveFile, ApiError>;
}

/// Reads spreadsheet-level metadata: the inventory of sheet (sub-table)
/// titles, in document order.
#[async_trait]
pub trait ValueReader: Send + Sync {
    /// Returns the sheet titles of the spreadsheet, first sheet first. The
    /// list may be empty.
    async fn sheet_titles(&self, spreadsheet_id: &str) -> Result<Vec<String>, ApiError>;
}

/// Fetches a rectangular cell range from a spreadsheet.
#[async_trait]
pub trait ValueRangeFetcher: Send + Sync {
    /// Returns the rows present in `range` (A1 notation). The service omits
    /// wholly-empty trailing rows and cells, so rows vary in width and the
    /// result may be empty.
    async fn value_range(&self, spreadsheet_id: &str, range: &str) -> Result<Vec<Row>, ApiError>;
}
