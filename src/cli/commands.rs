//! CLI command implementation
//!
//! `run` is the binary entry point. `execute` carries the whole pipeline and
//! takes its clock and stdout explicitly.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use clap::CommandFactory;

use super::args::{Cli, InputSource};
use super::errors::{CliError, CliResult};
use crate::config::PipelineConfig;
use crate::error_log::ErrorLog;
use crate::observability::{init_logging, Event};
use crate::parser::{ingest_dir, ingest_file};
use crate::query::{QueryDefinition, QueryEngine};
use crate::store::RecordStore;

/// What a completed run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Records in the saved store
    pub records: usize,
    /// Lines written to the error log
    pub error_lines: usize,
    /// Response file, when queries were run
    pub response_path: Option<PathBuf>,
}

/// Parse arguments and run
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    let config = cli.resolve_config()?;

    let Some(source) = cli.input_source() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let mut stdout = io::stdout();
    execute(
        &config,
        &source,
        cli.queries.as_deref(),
        Local::now().naive_local(),
        &mut stdout,
    )?;
    stdout.flush()?;
    Ok(())
}

/// Runs the pipeline for one input.
///
/// 1. Build the store from `source`
/// 2. Save the store to `config.db_path`
/// 3. Write the error log to `config.errors_path`
/// 4. If `queries` is given, run it and write the response file
///
/// Summary lines go to `out` as each step completes. A failure in a later
/// step leaves the files of earlier steps in place.
pub fn execute<W: Write>(
    config: &PipelineConfig,
    source: &InputSource,
    queries: Option<&Path>,
    started_at: NaiveDateTime,
    out: &mut W,
) -> CliResult<RunReport> {
    let (store, errors) = build_store(source)?;

    store
        .save(&config.db_path)
        .map_err(CliError::store_write_failed)?;
    writeln!(
        out,
        "Wrote {} valid records to {}",
        store.len(),
        config.db_path.display()
    )?;

    errors
        .write_to(&config.errors_path)
        .map_err(CliError::error_log_write_failed)?;
    tracing::info!(
        event = %Event::ErrorLogWritten,
        path = %config.errors_path.display(),
        entries = errors.len(),
        "error log written"
    );
    writeln!(
        out,
        "Wrote {} error/info lines to {}",
        errors.len(),
        config.errors_path.display()
    )?;

    let response_path = match queries {
        Some(query_path) => {
            let path = run_queries(config, &store, query_path, started_at)?;
            writeln!(out, "Wrote query response to {}", path.display())?;
            Some(path)
        }
        None => None,
    };

    Ok(RunReport {
        records: store.len(),
        error_lines: errors.len(),
        response_path,
    })
}

fn build_store(source: &InputSource) -> CliResult<(RecordStore, ErrorLog)> {
    match source {
        InputSource::Store(path) => {
            let store = RecordStore::load(path).map_err(CliError::store_load_failed)?;
            Ok((store, ErrorLog::new()))
        }
        InputSource::File(path) => {
            let ingest = ingest_file(path)?;
            Ok((ingest.store, ingest.errors))
        }
        InputSource::Dir(path) => {
            let ingest = ingest_dir(path)?;
            Ok((ingest.store, ingest.errors))
        }
    }
}

fn run_queries(
    config: &PipelineConfig,
    store: &RecordStore,
    query_path: &Path,
    started_at: NaiveDateTime,
) -> CliResult<PathBuf> {
    if !query_path.is_file() {
        return Err(CliError::input_error(format!(
            "Query file not found: {}",
            query_path.display()
        )));
    }

    let definition = QueryDefinition::load(query_path)?;
    let response = QueryEngine::new(store).run(&definition);

    let path = config.response_path(started_at);
    response.write_to(&path).map_err(CliError::query_failed)?;
    Ok(path)
}
