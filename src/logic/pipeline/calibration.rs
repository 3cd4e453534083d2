//! Calibration Pipeline
//!
//! parse -> optimize -> seal -> append

use std::sync::Arc;

use serde::Serialize;

use crate::logic::calibration::{self, ThresholdRecommendation};
use crate::logic::detection::LocationScorer;
use crate::logic::error::SentinelResult;
use crate::logic::evidence::{EventRecord, EventType, LogStore, SealedRecord};

/// Event label stored inside calibration details
const CALIBRATION_EVENT: &str = "CALIBRATION_ATTEMPT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelBalance {
    pub bloom: usize,
    pub no_bloom: usize,
}

/// Result of one successful calibration
#[derive(Debug, Clone)]
pub struct CalibrationOutcome {
    pub results: ThresholdRecommendation,
    pub record_count: usize,
    pub skipped_rows: usize,
    pub sealed: SealedRecord,
}

pub struct CalibrationPipeline {
    scorer: Arc<dyn LocationScorer>,
    store: Arc<LogStore>,
}

impl CalibrationPipeline {
    pub fn new(scorer: Arc<dyn LocationScorer>, store: Arc<LogStore>) -> Self {
        Self { scorer, store }
    }

    /// Calibrate against an uploaded ground-truth file and seal the outcome.
    ///
    /// Nothing is appended unless the upload yields at least one observation.
    pub fn calibrate(
        &self,
        content: &[u8],
        source_filename: &str,
    ) -> SentinelResult<CalibrationOutcome> {
        let parsed = calibration::parse(content)?;
        let results = calibration::optimize(&parsed.observations, self.scorer.as_ref())?;

        let bloom = parsed.observations.iter().filter(|o| o.is_bloom()).count();
        let balance = LabelBalance {
            bloom,
            no_bloom: parsed.len() - bloom,
        };

        let record = EventRecord::new()
            .with("event_type", CALIBRATION_EVENT)?
            .with("input_file_name", source_filename)?
            .with("record_count", parsed.len())?
            .with("skipped_rows", parsed.skipped_rows)?
            .with("label_balance", balance)?
            .with("optimization_results", results)?;

        let sealed = self.store.commit(EventType::Calibration, record)?;

        tracing::info!(
            file = source_filename,
            records = parsed.len(),
            current_f1 = results.current_f1,
            new_f1 = results.new_f1,
            tier1 = results.recommended_tier1_threshold,
            "Calibration sealed"
        );

        Ok(CalibrationOutcome {
            results,
            record_count: parsed.len(),
            skipped_rows: parsed.skipped_rows,
            sealed,
        })
    }
}
