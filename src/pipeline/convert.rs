//! Format normalization: server-side copy into the native spreadsheet
//! format.

use tracing::{debug, warn};

use crate::google::FileCopier;

/// Name given to every converted copy. The copy is a sibling of the
/// original, not derived from its name.
pub const CONVERTED_COPY_NAME: &str = "ConvertedSheet";

/// Copies an accessible, non-native tabular file into a new native
/// spreadsheet and returns the new file's identifier.
///
/// The original file is left unmodified. Copy failures are logged and
/// answered with `None`; the orchestrator skips the link. Copies created
/// before an interrupted run are not rolled back.
pub async fn to_native_sheet(copier: &dyn FileCopier, file_id: &str) -> Option<String> {
    match copier.copy_as_spreadsheet(file_id, CONVERTED_COPY_NAME).await {
        Ok(copy) => {
            debug!(file_id, copy_id = %copy.id, "converted file to native spreadsheet");
            Some(copy.id)
        }
        Err(error) => {
            warn!(file_id, error = %error, "failed to convert file to native spreadsheet");
            None
        }
    }
}
