//! Query evaluation over a record store
//!
//! Full scan, AND semantics, results in store order.

use super::ast::{Criterion, QueryDefinition};
use super::result::{QueryOutcome, QueryResponse};
use crate::observability::Event;
use crate::record::FlightRecord;
use crate::store::RecordStore;

/// Evaluates queries against one store.
pub struct QueryEngine<'a> {
    store: &'a RecordStore,
}

impl<'a> QueryEngine<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Returns the records matching every criterion, in store order.
    ///
    /// No criteria matches every record.
    pub fn evaluate(&self, criteria: &[Criterion]) -> Vec<FlightRecord> {
        self.store
            .iter()
            .filter(|record| criteria.iter().all(|c| c.matches(record)))
            .cloned()
            .collect()
    }

    /// Evaluates every entry of a definition independently.
    ///
    /// Entries that failed to parse are reported with their error; they do
    /// not stop the remaining entries.
    pub fn run(&self, definition: &QueryDefinition) -> QueryResponse {
        let mut outcomes = Vec::with_capacity(definition.len());

        for entry in &definition.entries {
            let result = match &entry.criteria {
                Ok(criteria) => {
                    let matches = self.evaluate(criteria);
                    tracing::debug!(
                        event = %Event::QueryEvaluated,
                        query = %entry.name,
                        scanned = self.store.len(),
                        matched = matches.len(),
                        "query evaluated"
                    );
                    Ok(matches)
                }
                Err(err) => {
                    tracing::warn!(
                        event = %Event::QueryFailed,
                        query = %entry.name,
                        field = err.field().unwrap_or("-"),
                        error = %err,
                        "query entry skipped"
                    );
                    Err(err.to_string())
                }
            };
            outcomes.push(QueryOutcome {
                name: entry.name.clone(),
                query: entry.raw.clone(),
                result,
            });
        }

        QueryResponse::new(outcomes)
    }
}
