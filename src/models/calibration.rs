//! Calibration response model

use serde::Serialize;

use crate::logic::calibration::ThresholdRecommendation;
use crate::logic::evidence::EventRecord;
use crate::logic::pipeline::CalibrationOutcome;

#[derive(Debug, Serialize)]
pub struct CalibrationResponse {
    pub status: &'static str,
    pub results: ThresholdRecommendation,
    pub record_count: usize,
    pub skipped_rows: usize,
    pub legal_log: EventRecord,
    pub hash: String,
}

impl From<CalibrationOutcome> for CalibrationResponse {
    fn from(outcome: CalibrationOutcome) -> Self {
        Self {
            status: "success",
            results: outcome.results,
            record_count: outcome.record_count,
            skipped_rows: outcome.skipped_rows,
            legal_log: outcome.sealed.record().clone(),
            hash: outcome.sealed.hash().to_string(),
        }
    }
}
