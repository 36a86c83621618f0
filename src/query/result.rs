//! Query responses
//!
//! Serialized shape, one object per definition entry:
//! `{"name": .., "query": .., "matches": [..]}` or
//! `{"name": .., "query": .., "error": ".."}`

use std::io;
use std::path::Path;

use serde_json::{json, Value};

use crate::observability::Event;
use crate::output::write_atomic;
use crate::record::FlightRecord;

/// Result of one definition entry
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    /// Entry name
    pub name: String,
    /// The entry as written in the definition
    pub query: Value,
    /// Matching records, or the reason the entry could not run
    pub result: Result<Vec<FlightRecord>, String>,
}

impl QueryOutcome {
    fn to_json(&self) -> Value {
        match &self.result {
            Ok(matches) => json!({
                "name": self.name,
                "query": self.query,
                "matches": matches,
            }),
            Err(error) => json!({
                "name": self.name,
                "query": self.query,
                "error": error,
            }),
        }
    }
}

/// Combined outcomes of one query run, in definition order
#[derive(Debug, Clone, Default)]
pub struct QueryResponse {
    outcomes: Vec<QueryOutcome>,
}

impl QueryResponse {
    pub fn new(outcomes: Vec<QueryOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn outcomes(&self) -> &[QueryOutcome] {
        &self.outcomes
    }

    /// Number of entries that could not run
    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    pub fn to_json(&self) -> Value {
        Value::Array(self.outcomes.iter().map(QueryOutcome::to_json).collect())
    }

    /// Writes the response as pretty JSON, replacing any existing file
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        let content = serde_json::to_string_pretty(&self.to_json())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        write_atomic(path, content.as_bytes())?;
        tracing::info!(
            event = %Event::ResponseWritten,
            path = %path.display(),
            entries = self.outcomes.len(),
            failed = self.failed_count(),
            "response written"
        );
        Ok(())
    }
}
