//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// Extract and aggregate tabular data from spreadsheet links collected in
/// form responses.
///
/// Sheet Harvester reads a column of links from a source spreadsheet, pulls
/// the first sheet of every readable linked spreadsheet (converting foreign
/// tabular files on the fly), and writes all rows to one XLSX file.
#[derive(Parser, Debug)]
#[command(name = "sheet-harvester")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Identifier of the spreadsheet holding the form-response links
    #[arg(short = 's', long, env = "SPREADSHEET_ID")]
    pub spreadsheet_id: Option<String>,

    /// Destination path for the exported XLSX file
    #[arg(short = 'o', long, env = "OUTPUT_PATH")]
    pub output: Option<PathBuf>,

    /// Override the Drive API base URL (testing)
    #[arg(long, env = "DRIVE_API_BASE_URL", hide = true)]
    pub drive_api_base_url: Option<String>,

    /// Override the Sheets API base URL (testing)
    #[arg(long, env = "SHEETS_API_BASE_URL", hide = true)]
    pub sheets_api_base_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_args_parses_successfully() {
        let args = Args::try_parse_from(["sheet-harvester"]).unwrap();
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
    }

    #[test]
    fn test_cli_verbose_flag_increments_count() {
        let args = Args::try_parse_from(["sheet-harvester", "-v"]).unwrap();
        assert_eq!(args.verbose, 1);

        let args = Args::try_parse_from(["sheet-harvester", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_cli_quiet_flag_sets_quiet() {
        let args = Args::try_parse_from(["sheet-harvester", "-q"]).unwrap();
        assert!(args.quiet);
    }

    #[test]
    fn test_cli_spreadsheet_id_long_flag() {
        let args =
            Args::try_parse_from(["sheet-harvester", "--spreadsheet-id", "abc123"]).unwrap();
        assert_eq!(args.spreadsheet_id.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_cli_output_short_flag() {
        let args = Args::try_parse_from(["sheet-harvester", "-o", "out/data.xlsx"]).unwrap();
        assert_eq!(args.output, Some(PathBuf::from("out/data.xlsx")));
    }

    #[test]
    fn test_cli_base_url_overrides_default_to_none() {
        let args = Args::try_parse_from(["sheet-harvester"]).unwrap();
        assert!(args.drive_api_base_url.is_none());
        assert!(args.sheets_api_base_url.is_none());
    }

    #[test]
    fn test_cli_help_flag_shows_usage() {
        // --help causes early exit, so we check it returns an error with Help kind
        let result = Args::try_parse_from(["sheet-harvester", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_cli_invalid_flag_returns_error() {
        let result = Args::try_parse_from(["sheet-harvester", "--invalid-flag"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}
