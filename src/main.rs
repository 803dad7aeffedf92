//! CLI entry point for the sheet harvester.

use anyhow::{Context, Result};
use clap::Parser;
use sheet_harvester::{Config, Credentials, DriveClient, ExportOutcome, Pipeline, SheetsClient};
use tracing::{debug, info};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");
    info!("Sheet harvester starting");

    // Configuration and credentials are resolved before any remote call;
    // either missing is fatal.
    let config = Config::resolve(args.spreadsheet_id, args.output)
        .context("configuration is incomplete")?;
    let credentials = Credentials::from_env().context("credentials are unavailable")?;
    debug!(
        scopes = ?sheet_harvester::google::REQUIRED_SCOPES,
        "Using pre-authorized access token"
    );

    let drive = match args.drive_api_base_url {
        Some(base_url) => DriveClient::with_base_url(&credentials, base_url)?,
        None => DriveClient::new(&credentials)?,
    };
    let sheets = match args.sheets_api_base_url {
        Some(base_url) => SheetsClient::with_base_url(&credentials, base_url)?,
        None => SheetsClient::new(&credentials)?,
    };

    info!(spreadsheet_id = %config.spreadsheet_id, "Reading form-response links");
    let links = sheet_harvester::read_links(&sheets, &config.spreadsheet_id)
        .await
        .context("could not read the links column from the source spreadsheet")?;
    info!(links = links.len(), "Links read from source range");

    let pipeline = Pipeline::new(&drive, &drive, &sheets, &sheets);
    let report = pipeline.run(&links).await;

    match sheet_harvester::write_table(&report.table, &config.output_path)? {
        ExportOutcome::Written { rows } => {
            info!(
                rows,
                path = %config.output_path.display(),
                "Harvest complete"
            );
        }
        ExportOutcome::NothingToWrite => {
            info!("Harvest complete; no data was extracted");
        }
    }

    Ok(())
}
