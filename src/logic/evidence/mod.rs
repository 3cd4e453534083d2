//! Evidentiary log: canonical encoding, sealing and the append-only store.

pub mod canonical;
pub mod sealer;
pub mod store;
pub mod types;

pub use sealer::{content_hash, seal, seal_at, verify_entry};
pub use store::{EntryVerification, LogStore};
pub use types::{EventRecord, EventType, SealedLogEntry, SealedRecord};
