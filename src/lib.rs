//! Sheet Harvester Core Library
//!
//! This library extracts tabular data referenced by links collected in a
//! form-response spreadsheet. Each link is normalized to a file identifier,
//! probed for accessibility and format, converted to a native spreadsheet
//! when needed, and its first sheet's rows are pulled into one aggregate
//! table that is exported as an XLSX file.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`config`] - Environment-sourced run configuration
//! - [`export`] - XLSX export of the aggregated table
//! - [`google`] - Drive/Sheets REST clients and capability traits
//! - [`parser`] - File-id extraction from link strings
//! - [`pipeline`] - Per-link state machine and run orchestration

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod export;
pub mod google;
pub mod parser;
pub mod pipeline;

// Re-export commonly used types
pub use config::{Config, ConfigError};
pub use export::{ExportError, ExportOutcome, write_table};
pub use google::{
    ApiError, AuthError, Credentials, DriveClient, FileCopier, MetadataReader, Row, SheetsClient,
    ValueRangeFetcher, ValueReader,
};
pub use parser::extract_file_id;
pub use pipeline::{LinkOutcome, LinkStatus, Pipeline, RunReport, SkipReason, read_links};
