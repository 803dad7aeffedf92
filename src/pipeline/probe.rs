//! Resource probes: accessibility and native-format checks.
//!
//! Both probes are read-only metadata fetches, idempotent and safe to
//! repeat. Failures never propagate past this module: the reason is logged
//! and the probe answers `false`, which the orchestrator turns into a skip.

use tracing::warn;

use crate::google::MetadataReader;

/// Returns true when the file's metadata can be fetched at all.
///
/// Not-found, permission-denied, and transport faults are treated
/// identically: the file is not usable for this run.
pub async fn is_accessible(metadata: &dyn MetadataReader, file_id: &str) -> bool {
    match metadata.file_metadata(file_id, None).await {
        Ok(_) => true,
        Err(error) => {
            warn!(file_id, error = %error, "file is not accessible");
            false
        }
    }
}

/// Returns true when the file is stored in the native spreadsheet format.
///
/// A failed metadata fetch and a format mismatch both answer `false`; the
/// caller does not distinguish them.
pub async fn is_native_sheet(metadata: &dyn MetadataReader, file_id: &str) -> bool {
    match metadata.file_metadata(file_id, Some("mimeType")).await {
        Ok(file) => file.is_native_spreadsheet(),
        Err(error) => {
            warn!(file_id, error = %error, "could not determine file format");
            false
        }
    }
}
