//! CLI-specific error types
//!
//! Every CLI error ends the run. Each code maps to a process exit code.

use std::fmt;
use std::io;

use crate::parser::IngestError;
use crate::query::QueryError;
use crate::store::StoreError;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file or flag error
    ConfigError,
    /// Input file, directory or query file missing or unreadable
    InputError,
    /// Existing store could not be loaded
    StoreLoadFailed,
    /// Store could not be written
    StoreWriteFailed,
    /// Error log could not be written
    ErrorLogWriteFailed,
    /// Query definition unusable or response not written
    QueryFailed,
    /// I/O error on stdout
    IoError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "FLIGHTDB_CLI_CONFIG_ERROR",
            Self::InputError => "FLIGHTDB_CLI_INPUT_ERROR",
            Self::StoreLoadFailed => "FLIGHTDB_CLI_STORE_LOAD_FAILED",
            Self::StoreWriteFailed => "FLIGHTDB_CLI_STORE_WRITE_FAILED",
            Self::ErrorLogWriteFailed => "FLIGHTDB_CLI_ERROR_LOG_WRITE_FAILED",
            Self::QueryFailed => "FLIGHTDB_CLI_QUERY_FAILED",
            Self::IoError => "FLIGHTDB_CLI_IO_ERROR",
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigError | Self::IoError => 1,
            Self::InputError | Self::StoreLoadFailed => 2,
            Self::StoreWriteFailed => 3,
            Self::ErrorLogWriteFailed => 4,
            Self::QueryFailed => 5,
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn input_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InputError, msg)
    }

    pub fn store_load_failed(err: StoreError) -> Self {
        Self::new(
            CliErrorCode::StoreLoadFailed,
            format!("Failed to load JSON DB: {}", err),
        )
    }

    pub fn store_write_failed(err: StoreError) -> Self {
        Self::new(
            CliErrorCode::StoreWriteFailed,
            format!("Failed to write DB JSON: {}", err),
        )
    }

    pub fn error_log_write_failed(err: io::Error) -> Self {
        Self::new(
            CliErrorCode::ErrorLogWriteFailed,
            format!("Failed to write error log: {}", err),
        )
    }

    pub fn query_failed(msg: impl fmt::Display) -> Self {
        Self::new(
            CliErrorCode::QueryFailed,
            format!("Failed to run queries: {}", msg),
        )
    }

    /// Get the error code
    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        self.code.exit_code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::new(CliErrorCode::IoError, e.to_string())
    }
}

impl From<IngestError> for CliError {
    fn from(e: IngestError) -> Self {
        Self::input_error(e.to_string())
    }
}

impl From<QueryError> for CliError {
    fn from(e: QueryError) -> Self {
        Self::query_failed(e)
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliErrorCode::InputError.exit_code(), 2);
        assert_eq!(CliErrorCode::StoreLoadFailed.exit_code(), 2);
        assert_eq!(CliErrorCode::StoreWriteFailed.exit_code(), 3);
        assert_eq!(CliErrorCode::ErrorLogWriteFailed.exit_code(), 4);
        assert_eq!(CliErrorCode::QueryFailed.exit_code(), 5);
    }

    #[test]
    fn test_display_has_code() {
        let err = CliError::from(IngestError::FileNotFound(PathBuf::from("x.csv")));
        let display = err.to_string();
        assert!(display.starts_with("FLIGHTDB_CLI_INPUT_ERROR"));
        assert!(display.contains("x.csv"));
    }

    #[test]
    fn test_query_error_maps_to_query_failed() {
        let err = CliError::from(QueryError::MalformedDefinition("bad".into()));
        assert_eq!(err.code(), CliErrorCode::QueryFailed);
    }
}
