//! Legal log export models

use serde::Serialize;

use crate::logic::evidence::EntryVerification;

#[derive(Debug, Serialize)]
pub struct VerificationReport {
    pub total: usize,
    pub verified: usize,
    pub entries: Vec<EntryVerification>,
}

impl From<Vec<EntryVerification>> for VerificationReport {
    fn from(entries: Vec<EntryVerification>) -> Self {
        Self {
            total: entries.len(),
            verified: entries.iter().filter(|e| e.verified).count(),
            entries,
        }
    }
}
