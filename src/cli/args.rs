//! CLI argument definitions using clap
//!
//! flightdb (-i <file> | -d <dir> | -j <db.json>) [-o <db.json>] [-q <queries.json>]
//!          [--studentid <id>] [--name <name>] [--lastname <name>]
//!          [--config <flightdb.json>] [-v]

use clap::Parser;
use std::path::PathBuf;

use super::errors::{CliError, CliResult};
use crate::config::PipelineConfig;

/// flightdb - flight schedule parser and query tool
#[derive(Parser, Debug)]
#[command(name = "flightdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a CSV file to parse
    #[arg(short = 'i', value_name = "FILE", conflicts_with = "dir")]
    pub input: Option<PathBuf>,

    /// Path to a folder containing .csv files to parse
    #[arg(short = 'd', value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Output path for the valid flights JSON (default: db.json)
    #[arg(short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Load an existing JSON database instead of parsing CSVs
    #[arg(short = 'j', value_name = "PATH")]
    pub json_db: Option<PathBuf>,

    /// Execute queries from a JSON file on the loaded database
    #[arg(short = 'q', value_name = "PATH")]
    pub queries: Option<PathBuf>,

    /// Student ID for the response filename
    #[arg(long = "studentid")]
    pub student_id: Option<String>,

    /// Given name for the response filename
    #[arg(long)]
    pub name: Option<String>,

    /// Last name for the response filename
    #[arg(long = "lastname")]
    pub last_name: Option<String>,

    /// Path to a JSON configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Where the store of a run comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Existing JSON store
    Store(PathBuf),
    /// One CSV file
    File(PathBuf),
    /// Every CSV file in a directory
    Dir(PathBuf),
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Returns the selected input; `-j` wins over `-i` / `-d`.
    pub fn input_source(&self) -> Option<InputSource> {
        if let Some(path) = &self.json_db {
            return Some(InputSource::Store(path.clone()));
        }
        if let Some(path) = &self.input {
            return Some(InputSource::File(path.clone()));
        }
        self.dir.clone().map(InputSource::Dir)
    }

    /// Builds the run configuration: config file (or defaults), then flags.
    pub fn resolve_config(&self) -> CliResult<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::load(path)
                .map_err(|e| CliError::config_error(e.to_string()))?,
            None => PipelineConfig::default(),
        };

        if let Some(output) = &self.output {
            config.db_path = output.clone();
        }
        if let Some(student_id) = &self.student_id {
            config.identity.student_id = student_id.clone();
        }
        if let Some(name) = &self.name {
            config.identity.name = name.clone();
        }
        if let Some(last_name) = &self.last_name {
            config.identity.last_name = last_name.clone();
        }

        config
            .validate()
            .map_err(|e| CliError::config_error(e.to_string()))?;
        Ok(config)
    }
}
