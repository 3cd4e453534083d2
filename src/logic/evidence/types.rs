//! Evidence record types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::logic::error::{SentinelError, SentinelResult};

/// Field the sealer stamps onto every record
pub const TIMESTAMP_FIELD: &str = "timestamp";

/// Kind of event recorded in the evidentiary log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    Ingestion,
    Calibration,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Ingestion => "INGESTION",
            EventType::Calibration => "CALIBRATION",
        }
    }
}

/// Unsealed event payload: field name -> JSON value.
///
/// Field order is irrelevant; the canonical encoder sorts keys before hashing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventRecord(Map<String, Value>);

impl EventRecord {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Build a record from any value that serializes to a string-keyed map.
    pub fn from_serialize<T: Serialize>(value: &T) -> SentinelResult<Self> {
        match serde_json::to_value(value) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            Ok(other) => Err(SentinelError::Encoding(format!(
                "record must be a map of fields, got {}",
                value_kind(&other)
            ))),
            Err(e) => Err(SentinelError::Encoding(e.to_string())),
        }
    }

    /// Add a field, serializing `value` first.
    pub fn with<T: Serialize>(mut self, key: &str, value: T) -> SentinelResult<Self> {
        let value = serde_json::to_value(value).map_err(|e| SentinelError::Encoding(e.to_string()))?;
        self.0.insert(key.to_string(), value);
        Ok(self)
    }

    /// Add a float field. Non-finite values have no canonical form.
    pub fn with_number(self, key: &str, value: f64) -> SentinelResult<Self> {
        if !value.is_finite() {
            return Err(SentinelError::Encoding(format!(
                "field '{}' is not a finite number",
                key
            )));
        }
        self.with(key, value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn insert_timestamp(&mut self, timestamp: &str) {
        self.0
            .insert(TIMESTAMP_FIELD.to_string(), Value::String(timestamp.to_string()));
    }

    pub(crate) fn as_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

/// A record after sealing. Read-only: the hash commits to every field,
/// including the timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct SealedRecord {
    record: EventRecord,
    timestamp: String,
    hash: String,
}

impl SealedRecord {
    pub(crate) fn new(record: EventRecord, timestamp: String, hash: String) -> Self {
        Self {
            record,
            timestamp,
            hash,
        }
    }

    pub fn record(&self) -> &EventRecord {
        &self.record
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Lowercase hex SHA-256 of the canonical record
    pub fn hash(&self) -> &str {
        &self.hash
    }
}

/// One entry of the evidentiary log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SealedLogEntry {
    pub content_hash: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub details: EventRecord,
}

impl SealedLogEntry {
    pub fn from_sealed(event_type: EventType, sealed: &SealedRecord) -> Self {
        Self {
            content_hash: sealed.hash().to_string(),
            timestamp: sealed.timestamp().to_string(),
            event_type,
            details: sealed.record().clone(),
        }
    }
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
