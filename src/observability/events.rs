//! Observable events in flightdb
//!
//! Events are explicit and typed. Their names are stable and appear as the
//! `event` field of every log line.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Ingest
    /// Reading an input file begins
    IngestStart,
    /// Input file fully parsed
    IngestComplete,
    /// A line was rejected by the validator
    RecordRejected,

    // Store
    /// Persisted store loaded
    StoreLoaded,
    /// Store written to disk
    StoreSaved,
    /// Error log written to disk
    ErrorLogWritten,

    // Queries
    /// One query entry evaluated
    QueryEvaluated,
    /// One query entry failed
    QueryFailed,
    /// Response artifact written
    ResponseWritten,
}

impl Event {
    /// Returns the stable event name
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::IngestStart => "INGEST_START",
            Event::IngestComplete => "INGEST_COMPLETE",
            Event::RecordRejected => "RECORD_REJECTED",
            Event::StoreLoaded => "STORE_LOADED",
            Event::StoreSaved => "STORE_SAVED",
            Event::ErrorLogWritten => "ERROR_LOG_WRITTEN",
            Event::QueryEvaluated => "QUERY_EVALUATED",
            Event::QueryFailed => "QUERY_FAILED",
            Event::ResponseWritten => "RESPONSE_WRITTEN",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
