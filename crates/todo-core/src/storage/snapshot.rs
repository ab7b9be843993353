//! Snapshot Adapter
//!
//! Reads and writes the whole todo list as one JSON array under a single key.
//! Reading never fails: anything that is not a JSON array of todos counts as
//! "no saved todos".

use serde_json::Value;

use super::traits::{KeyValueStore, StorageError, StorageResult};
use crate::domain::Todo;

/// Decode a persisted snapshot, tolerating missing or malformed data
pub fn decode_snapshot(raw: Option<&str>) -> Vec<Todo> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    if raw.trim().is_empty() {
        return Vec::new();
    }

    let entries = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(entries)) => entries,
        Ok(other) => {
            tracing::warn!(kind = value_kind(&other), "snapshot is not an array, ignoring it");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(error = %e, "snapshot is not valid JSON, ignoring it");
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<Todo>(entry) {
            Ok(todo) => Some(todo),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping malformed todo in snapshot");
                None
            }
        })
        .collect()
}

pub fn encode_snapshot(todos: &[Todo]) -> StorageResult<String> {
    serde_json::to_string(todos).map_err(|e| StorageError::Encode(e.to_string()))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A key-value store bound to the key holding the todo snapshot
#[derive(Debug, Clone)]
pub struct SnapshotStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SnapshotStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the saved list; empty on any read or decode problem
    pub fn load(&self) -> Vec<Todo> {
        match self.store.get(&self.key) {
            Ok(raw) => decode_snapshot(raw.as_deref()),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "could not read snapshot");
                Vec::new()
            }
        }
    }

    /// Rewrite the full snapshot
    pub fn save(&mut self, todos: &[Todo]) -> StorageResult<()> {
        let json = encode_snapshot(todos)?;
        self.store.set(&self.key, &json)
    }
}
