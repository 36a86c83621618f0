//! Query errors
//!
//! Criterion and entry errors are fatal for one entry only. Definition and
//! I/O errors are fatal for the whole query run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type QueryResult<T> = Result<T, QueryError>;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Unknown query criterion '{field}'")]
    UnknownCriterion { field: String },

    #[error("Malformed query criterion '{field}': {reason}")]
    MalformedCriterion { field: String, reason: String },

    #[error("Query entry {index} is not an object")]
    MalformedEntry { index: usize },

    #[error("Malformed query definition: {0}")]
    MalformedDefinition(String),

    #[error("Query file I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl QueryError {
    pub(crate) fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        QueryError::MalformedCriterion {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the offending field for criterion errors
    pub fn field(&self) -> Option<&str> {
        match self {
            QueryError::UnknownCriterion { field } | QueryError::MalformedCriterion { field, .. } => {
                Some(field.as_str())
            }
            _ => None,
        }
    }
}
