//! Input parsing for file links collected in form responses.
//!
//! The only parsing this tool needs is recognizing a Drive/Sheets file id
//! inside a shared link, so this module is a thin wrapper around the
//! pattern-based extractor in [`link`].

mod link;

pub use link::extract_file_id;
