//! Log Store - append-only, in-memory evidentiary log.
//!
//! Volatile: the log lives as long as the process.

use parking_lot::Mutex;
use serde::Serialize;

use super::sealer;
use super::types::{EventRecord, EventType, SealedLogEntry, SealedRecord};
use crate::logic::error::SentinelResult;

/// Per-entry verification outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryVerification {
    pub index: usize,
    pub content_hash: String,
    pub event_type: EventType,
    pub verified: bool,
}

/// Ordered, append-only sequence of sealed entries.
///
/// Append order is authoritative; timestamps are never used to reorder.
#[derive(Debug, Default)]
pub struct LogStore {
    entries: Mutex<Vec<SealedLogEntry>>,
}

impl LogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an already sealed entry
    pub fn append(&self, entry: SealedLogEntry) {
        self.entries.lock().push(entry);
    }

    /// Seal `record` and append it while holding the lock, so log order is
    /// exactly seal order. Nothing is appended if sealing fails.
    pub fn commit(&self, event_type: EventType, record: EventRecord) -> SentinelResult<SealedRecord> {
        let mut entries = self.entries.lock();
        let sealed = sealer::seal(record)?;
        entries.push(SealedLogEntry::from_sealed(event_type, &sealed));

        tracing::info!(
            event_type = event_type.as_str(),
            hash = %sealed.hash(),
            position = entries.len(),
            "Sealed evidentiary log entry"
        );
        Ok(sealed)
    }

    /// Snapshot of every entry in append order
    pub fn list_all(&self) -> Vec<SealedLogEntry> {
        self.entries.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Re-hash every entry against its stored content hash
    pub fn verify_all(&self) -> Vec<EntryVerification> {
        self.list_all()
            .iter()
            .enumerate()
            .map(|(index, entry)| EntryVerification {
                index,
                content_hash: entry.content_hash.clone(),
                event_type: entry.event_type,
                verified: sealer::verify_entry(entry),
            })
            .collect()
    }
}
