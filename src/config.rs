//! Pipeline configuration
//!
//! All run-wide settings travel in one `PipelineConfig` value. It can be read
//! from a JSON file; missing keys take defaults, unknown keys are rejected.
//! Command-line flags are applied on top by the CLI.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::output::{response_file_name, RunIdentity};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Configuration for one flightdb run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Where the store is written (default "db.json")
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,

    /// Where the error log is written (default "errors.txt")
    #[serde(default = "default_errors_path")]
    pub errors_path: PathBuf,

    /// Directory that receives response files (default ".")
    #[serde(default = "default_response_dir")]
    pub response_dir: PathBuf,

    /// Identifiers used in response file names
    #[serde(default)]
    pub identity: RunIdentity,
}

fn default_db_path() -> PathBuf {
    PathBuf::from("db.json")
}
fn default_errors_path() -> PathBuf {
    PathBuf::from("errors.txt")
}
fn default_response_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            errors_path: default_errors_path(),
            response_dir: default_response_dir(),
            identity: RunIdentity::default(),
        }
    }
}

impl PipelineConfig {
    /// Loads and validates a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: PipelineConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Rejects empty paths and identifiers
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, path) in [
            ("db_path", &self.db_path),
            ("errors_path", &self.errors_path),
            ("response_dir", &self.response_dir),
        ] {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid(format!("{} must not be empty", name)));
            }
        }

        for (name, value) in [
            ("identity.student_id", &self.identity.student_id),
            ("identity.name", &self.identity.name),
            ("identity.last_name", &self.identity.last_name),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{} must not be empty", name)));
            }
        }

        Ok(())
    }

    /// Full path of the response file for a run started at `timestamp`
    pub fn response_path(&self, timestamp: NaiveDateTime) -> PathBuf {
        self.response_dir
            .join(response_file_name(&self.identity, timestamp))
    }
}
