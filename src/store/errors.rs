//! Store errors

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The persisted store is not a well-formed record array
    #[error("Malformed store '{origin}': {reason}")]
    Format { origin: String, reason: String },

    #[error("Store I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize store: {0}")]
    Serialize(String),
}

impl StoreError {
    pub(crate) fn format(origin: impl Into<String>, reason: impl Into<String>) -> Self {
        StoreError::Format {
            origin: origin.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true for a malformed persisted store
    pub fn is_format(&self) -> bool {
        matches!(self, StoreError::Format { .. })
    }
}
