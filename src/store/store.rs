//! Record store with JSON persistence

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde_json::Value;

use super::errors::{StoreError, StoreResult};
use crate::observability::Event;
use crate::output::write_atomic;
use crate::record::FlightRecord;
use crate::validator::RecordValidator;

/// Store of validated flight records.
///
/// Duplicate flight_ids are kept; order is insertion order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordStore {
    records: Vec<FlightRecord>,
    /// flight_ids present in `records`
    seen_ids: HashSet<String>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a persisted store from disk.
    ///
    /// # Errors
    ///
    /// - `StoreError::Io` if the file cannot be read
    /// - `StoreError::Format` if the content is not a valid record array
    pub fn load(path: &Path) -> StoreResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        let store = Self::load_str(&content, &path.display().to_string())?;
        tracing::info!(
            event = %Event::StoreLoaded,
            path = %path.display(),
            records = store.len(),
            "store loaded"
        );
        Ok(store)
    }

    /// Loads a persisted store from a string.
    ///
    /// Every record is re-validated; `origin` labels errors.
    pub fn load_str(content: &str, origin: &str) -> StoreResult<Self> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| StoreError::format(origin, format!("Invalid JSON: {}", e)))?;

        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(StoreError::format(
                    origin,
                    format!(
                        "expected a JSON array of flight records, found {}",
                        json_type_name(&other)
                    ),
                ))
            }
        };

        let validator = RecordValidator::new();
        let mut records = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            let record: FlightRecord = serde_json::from_value(item)
                .map_err(|e| StoreError::format(origin, format!("record {}: {}", index, e)))?;
            validator.revalidate(&record).map_err(|rejection| {
                StoreError::format(
                    origin,
                    format!("record {} ({}): {}", index, record.flight_id, rejection.message()),
                )
            })?;
            records.push(record);
        }

        let seen_ids = records.iter().map(|r| r.flight_id.clone()).collect();
        Ok(Self { records, seen_ids })
    }

    /// Appends a record that has passed the validator
    pub fn add_valid(&mut self, record: FlightRecord) {
        if !self.seen_ids.insert(record.flight_id.clone()) {
            tracing::debug!(flight_id = %record.flight_id, "duplicate flight_id kept");
        }
        self.records.push(record);
    }

    /// Serializes the store as a pretty-printed JSON array
    pub fn to_json(&self) -> StoreResult<String> {
        serde_json::to_string_pretty(&self.records).map_err(|e| StoreError::Serialize(e.to_string()))
    }

    /// Writes the store to `path`, replacing any existing file
    pub fn save(&self, path: &Path) -> StoreResult<()> {
        let content = self.to_json()?;
        write_atomic(path, content.as_bytes()).map_err(|e| StoreError::io(path, e))?;
        tracing::info!(
            event = %Event::StoreSaved,
            path = %path.display(),
            records = self.len(),
            "store saved"
        );
        Ok(())
    }

    pub fn records(&self) -> &[FlightRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlightRecord> {
        self.records.iter()
    }

    /// Whether any record carries `flight_id`
    pub fn contains_id(&self, flight_id: &str) -> bool {
        self.seen_ids.contains(flight_id)
    }

    pub fn into_records(self) -> Vec<FlightRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
