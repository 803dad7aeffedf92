//! Sub-table location: resolve the first sheet title of a spreadsheet.

use tracing::warn;

use crate::google::ValueReader;

/// Title used when the sheet inventory cannot be read or is empty.
pub const FALLBACK_SHEET_TITLE: &str = "Sheet1";

/// Returns the title of the spreadsheet's first sheet.
///
/// Never fails outward: a metadata failure or an empty sheet list both
/// answer with [`FALLBACK_SHEET_TITLE`].
pub async fn first_sheet_title(reader: &dyn ValueReader, spreadsheet_id: &str) -> String {
    match reader.sheet_titles(spreadsheet_id).await {
        Ok(titles) => titles
            .into_iter()
            .next()
            .unwrap_or_else(|| FALLBACK_SHEET_TITLE.to_string()),
        Err(error) => {
            warn!(spreadsheet_id, error = %error, "could not read sheet titles; using fallback");
            FALLBACK_SHEET_TITLE.to_string()
        }
    }
}
