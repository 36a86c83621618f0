//! CLI module for flightdb
//!
//! One run does, in order:
//! - build the store (load `-j`, or ingest `-i` / `-d`)
//! - save the store and the error log
//! - run queries from `-q`, writing one response file

mod args;
mod commands;
mod errors;

pub use args::{Cli, InputSource};
pub use commands::{execute, run, RunReport};
pub use errors::{CliError, CliErrorCode, CliResult};
