//! XLSX export of the aggregated table.

use std::fs;
use std::path::Path;

use rust_xlsxwriter::Workbook;
use thiserror::Error;
use tracing::{debug, info};

use crate::google::Row;

/// Errors raised while writing the export file.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Destination directory could not be created
    #[error("failed to create destination directory: {0}")]
    Io(#[from] std::io::Error),

    /// Workbook construction or save failed
    #[error("failed to write workbook: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}

/// What the exporter did with the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The table was written to the destination file
    Written {
        /// Number of rows written
        rows: usize,
    },
    /// The table was empty; no file was created
    NothingToWrite,
}

/// Writes the aggregate table to an XLSX file at `path`.
///
/// An empty table performs no write and answers
/// [`ExportOutcome::NothingToWrite`]. Otherwise missing destination
/// directories are created first (idempotent), then every present cell is
/// written as text: rows of unequal width stay sparse, no header row is
/// synthesized, and no row index is emitted - the first data row is
/// indistinguishable from a header.
///
/// # Errors
///
/// Returns [`ExportError`] when directory creation or the workbook write
/// fails.
pub fn write_table(table: &[Row], path: &Path) -> Result<ExportOutcome, ExportError> {
    if table.is_empty() {
        info!("No data was extracted; nothing to save");
        return Ok(ExportOutcome::NothingToWrite);
    }

    ensure_parent_dir(path)?;

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (row_index, row) in table.iter().enumerate() {
        for (col_index, cell) in row.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            worksheet.write_string(row_index as u32, col_index as u16, cell)?;
        }
    }

    workbook.save(path)?;
    info!(rows = table.len(), path = %path.display(), "Extracted data saved");
    Ok(ExportOutcome::Written { rows: table.len() })
}

/// Creates the destination's missing parent directories. A bare filename
/// has an empty parent and needs nothing created.
fn ensure_parent_dir(path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
        debug!(dir = %parent.display(), "destination directory ready");
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_write_table_empty_creates_no_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.xlsx");

        let outcome = write_table(&[], &path).unwrap();

        assert_eq!(outcome, ExportOutcome::NothingToWrite);
        assert!(!path.exists(), "no file should be created for empty table");
    }

    #[test]
    fn test_write_table_creates_missing_intermediate_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deeply/nested/dir/out.xlsx");

        let outcome = write_table(&[row(&["a", "b"])], &path).unwrap();

        assert_eq!(outcome, ExportOutcome::Written { rows: 1 });
        assert!(path.exists(), "file should exist at nested path");
    }

    #[test]
    fn test_write_table_existing_directory_does_not_fail() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out/data.xlsx");

        write_table(&[row(&["first"])], &path).unwrap();
        // Second run with the directory already present
        let outcome = write_table(&[row(&["second"])], &path).unwrap();

        assert_eq!(outcome, ExportOutcome::Written { rows: 1 });
    }

    #[test]
    fn test_write_table_accepts_rows_of_unequal_width() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.xlsx");

        let table = vec![row(&["a", "b"]), row(&["c", "d", "e"])];
        let outcome = write_table(&table, &path).unwrap();

        assert_eq!(outcome, ExportOutcome::Written { rows: 2 });
        assert!(path.exists());
    }

    #[test]
    fn test_ensure_parent_dir_bare_filename_creates_nothing() {
        // A relative path with no directory component has an empty parent
        assert!(ensure_parent_dir(Path::new("bare.xlsx")).is_ok());
    }

    #[test]
    fn test_ensure_parent_dir_creates_nested_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a/b/c/out.xlsx");

        ensure_parent_dir(&path).unwrap();

        assert!(path.parent().unwrap().is_dir());
    }
}
