//! Data fetch: read the full rectangular range of a sheet.

use crate::google::{ApiError, Row, ValueRangeFetcher};

/// Builds the read range for a sheet: first cell to column Z, unbounded
/// rows. The 26-column bound is a hard limitation, not configurable.
#[must_use]
pub fn data_range(sheet_title: &str) -> String {
    format!("{sheet_title}!A1:Z")
}

/// Fetches every row present in the sheet's data range.
///
/// The service omits wholly-empty trailing rows and cells, so the result
/// may be empty and rows vary in width.
///
/// # Errors
///
/// Returns [`ApiError`] when the read fails; the orchestrator logs it with
/// the originating link and skips the link.
pub async fn sheet_rows(
    fetcher: &dyn ValueRangeFetcher,
    spreadsheet_id: &str,
    sheet_title: &str,
) -> Result<Vec<Row>, ApiError> {
    fetcher
        .value_range(spreadsheet_id, &data_range(sheet_title))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_range_spans_a1_to_column_z() {
        assert_eq!(data_range("Sheet1"), "Sheet1!A1:Z");
    }

    #[test]
    fn test_data_range_keeps_title_verbatim() {
        assert_eq!(data_range("Form responses 1"), "Form responses 1!A1:Z");
    }
}
