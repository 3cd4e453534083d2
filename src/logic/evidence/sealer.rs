//! Event Sealer - timestamps a record and commits to it with SHA-256.

use chrono::{DateTime, SecondsFormat, Utc};
use sha2::{Digest, Sha256};

use super::canonical::canonicalize;
use super::types::{EventRecord, SealedLogEntry, SealedRecord, TIMESTAMP_FIELD};
use crate::logic::error::{SentinelError, SentinelResult};

/// Seal `record` at the current UTC instant.
pub fn seal(record: EventRecord) -> SentinelResult<SealedRecord> {
    seal_at(record, Utc::now())
}

/// Seal `record` at a given instant. Same record and instant always give the
/// same hash.
pub fn seal_at(mut record: EventRecord, at: DateTime<Utc>) -> SentinelResult<SealedRecord> {
    if record.contains_key(TIMESTAMP_FIELD) {
        return Err(SentinelError::Encoding(
            "record already carries a timestamp; it has been sealed before".to_string(),
        ));
    }

    let timestamp = format_timestamp(at);
    record.insert_timestamp(&timestamp);
    let hash = content_hash(&record)?;

    Ok(SealedRecord::new(record, timestamp, hash))
}

/// Lowercase hex SHA-256 of the canonical form of `record`.
pub fn content_hash(record: &EventRecord) -> SentinelResult<String> {
    let canonical = canonicalize(&record.as_value())?;

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

/// ISO-8601 UTC with microseconds and an explicit `+00:00` offset.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Recompute an entry's hash and check it against the stored one.
pub fn verify_entry(entry: &SealedLogEntry) -> bool {
    let timestamp_matches = entry
        .details
        .get(TIMESTAMP_FIELD)
        .and_then(|v| v.as_str())
        .map_or(false, |ts| ts == entry.timestamp);

    match content_hash(&entry.details) {
        Ok(hash) => timestamp_matches && hash == entry.content_hash,
        Err(_) => false,
    }
}
