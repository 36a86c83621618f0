//! Line parser and ingest
//!
//! Turns delimited text into a store plus an error log:
//! - blank lines are skipped
//! - `#` comment lines are logged and skipped
//! - a `flight_id,...` header line is skipped
//! - every other line goes through the validator

mod errors;
mod ingest;
mod line;

pub use errors::{IngestError, IngestResult};
pub use ingest::{ingest_dir, ingest_file, parse_text, Ingest, COMMENT_REASON};
pub use line::split_line;
