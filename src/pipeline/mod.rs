//! Per-link processing pipeline and run orchestration.
//!
//! Each link walks a fixed gate sequence: extract a file id, check
//! accessibility, check (and if needed normalize) the format, locate the
//! first sheet, fetch its rows. Failing any gate skips the link with a
//! recorded [`SkipReason`]; rows from links that pass every gate accumulate
//! into one aggregate table in source order.
//!
//! Gates communicate through ordinary return values, never through
//! panics or bubbled errors: no link failure can abort the run or disturb
//! rows already accumulated from other links.

pub mod convert;
pub mod fetch;
pub mod locate;
pub mod probe;

use tracing::{info, warn};

use crate::google::{ApiError, FileCopier, MetadataReader, Row, ValueRangeFetcher, ValueReader};
use crate::parser::extract_file_id;

/// Source range the link strings are read from: the form-responses tab,
/// column C, row 2 to the end, one link per row.
pub const LINKS_RANGE: &str = "Form responses 1!C2:C";

/// Why a link contributed no rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Neither id-recognition pattern matched the link
    InvalidLink,
    /// The file's metadata could not be fetched
    Inaccessible,
    /// Not a native spreadsheet, and conversion did not produce one
    NotASpreadsheet,
    /// The data read failed after every other gate passed
    FetchFailed(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLink => write!(f, "no file id recognized in link"),
            Self::Inaccessible => write!(f, "file not accessible or not found"),
            Self::NotASpreadsheet => write!(f, "not a valid spreadsheet link"),
            Self::FetchFailed(reason) => write!(f, "failed to fetch sheet data: {reason}"),
        }
    }
}

/// Terminal state of one link's walk through the gate sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStatus {
    /// Every gate passed; this many rows were appended to the table
    Fetched {
        /// Number of rows the link contributed
        rows: usize,
    },
    /// An early gate failed; the link contributed zero rows
    Skipped(SkipReason),
}

/// Per-link outcome, paired with the originating link for traceability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOutcome {
    /// The link as read from the source range.
    pub link: String,
    /// Terminal state for this link.
    pub status: LinkStatus,
}

/// Result of a full run: the aggregate table plus per-link outcomes.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Rows accumulated across all fetched links, in link order and, within
    /// a link, in the service's returned row order.
    pub table: Vec<Row>,
    /// One outcome per processed link, in source order.
    pub outcomes: Vec<LinkOutcome>,
}

impl RunReport {
    /// Number of links that reached the fetched state.
    #[must_use]
    pub fn fetched_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome.status, LinkStatus::Fetched { .. }))
            .count()
    }

    /// Number of links skipped at any gate.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.outcomes.len() - self.fetched_count()
    }
}

/// Reads the link strings from the source spreadsheet's configured range.
///
/// Each returned row contributes its first cell; a row with no cells yields
/// an empty string, which later fails id extraction like any other
/// unrecognizable link.
///
/// # Errors
///
/// Returns [`ApiError`] when the source range cannot be read. This happens
/// before any per-link work and aborts the run.
pub async fn read_links(
    fetcher: &dyn ValueRangeFetcher,
    spreadsheet_id: &str,
) -> Result<Vec<String>, ApiError> {
    let rows = fetcher.value_range(spreadsheet_id, LINKS_RANGE).await?;
    Ok(rows
        .into_iter()
        .map(|row| row.into_iter().next().unwrap_or_default())
        .collect())
}

/// Drives the per-link gate sequence over the remote capability traits.
///
/// Links are processed strictly one at a time in source order; every remote
/// call completes before the next begins. The aggregate table is the only
/// state crossing link boundaries.
pub struct Pipeline<'a> {
    metadata: &'a dyn MetadataReader,
    copier: &'a dyn FileCopier,
    sheets: &'a dyn ValueReader,
    values: &'a dyn ValueRangeFetcher,
}

impl<'a> Pipeline<'a> {
    /// Wires the pipeline to its remote capabilities.
    #[must_use]
    pub fn new(
        metadata: &'a dyn MetadataReader,
        copier: &'a dyn FileCopier,
        sheets: &'a dyn ValueReader,
        values: &'a dyn ValueRangeFetcher,
    ) -> Self {
        Self {
            metadata,
            copier,
            sheets,
            values,
        }
    }

    /// Processes every link and returns the aggregate table with per-link
    /// outcomes.
    pub async fn run(&self, links: &[String]) -> RunReport {
        let mut report = RunReport::default();

        for link in links {
            let status = self.process_link(link, &mut report.table).await;
            report.outcomes.push(LinkOutcome {
                link: link.clone(),
                status,
            });
        }

        info!(
            links = report.outcomes.len(),
            fetched = report.fetched_count(),
            skipped = report.skipped_count(),
            rows = report.table.len(),
            "Link processing complete"
        );
        report
    }

    /// Walks one link through the gate sequence, appending fetched rows to
    /// `table`. A failure at any gate leaves `table` untouched for this
    /// link.
    async fn process_link(&self, link: &str, table: &mut Vec<Row>) -> LinkStatus {
        let Some(file_id) = extract_file_id(link) else {
            warn!(link, "skipping link: {}", SkipReason::InvalidLink);
            return LinkStatus::Skipped(SkipReason::InvalidLink);
        };

        if !probe::is_accessible(self.metadata, &file_id).await {
            warn!(link, file_id, "skipping link: {}", SkipReason::Inaccessible);
            return LinkStatus::Skipped(SkipReason::Inaccessible);
        }

        // Non-native files get one conversion attempt; the converted copy
        // must itself pass the format check on its new identifier.
        let file_id = if probe::is_native_sheet(self.metadata, &file_id).await {
            file_id
        } else {
            match convert::to_native_sheet(self.copier, &file_id).await {
                Some(copy_id) if probe::is_native_sheet(self.metadata, &copy_id).await => copy_id,
                _ => {
                    warn!(
                        link,
                        file_id,
                        "skipping link: {}",
                        SkipReason::NotASpreadsheet
                    );
                    return LinkStatus::Skipped(SkipReason::NotASpreadsheet);
                }
            }
        };

        let sheet_title = locate::first_sheet_title(self.sheets, &file_id).await;

        match fetch::sheet_rows(self.values, &file_id, &sheet_title).await {
            Ok(rows) => {
                let count = rows.len();
                table.extend(rows);
                info!(link, file_id, sheet = %sheet_title, rows = count, "Extracted sheet data");
                LinkStatus::Fetched { rows: count }
            }
            Err(error) => {
                warn!(link, file_id, error = %error, "skipping link: data fetch failed");
                LinkStatus::Skipped(SkipReason::FetchFailed(error.to_string()))
            }
        }
    }
}
