//! Ingestion Pipeline
//!
//! acquire -> score -> classify -> seal -> append

use std::sync::Arc;

use serde::Serialize;

use crate::constants::REQUIRED_BANDS;
use crate::logic::detection::{
    checked_score, DataSource, DetectionResult, DetectionScorer, Location, Status, TierThresholds,
};
use crate::logic::error::{SentinelError, SentinelResult};
use crate::logic::evidence::{EventRecord, EventType, LogStore, SealedRecord};

#[derive(Debug, Serialize)]
struct DataSummary<'a> {
    source: &'a str,
    bands: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Analysis<'a> {
    score: f64,
    status: Status,
    tier1_threshold: f64,
    tier2_threshold: f64,
    model: &'a str,
}

/// Result of one successful ingestion
#[derive(Debug, Clone)]
pub struct IngestionOutcome {
    pub detection: DetectionResult,
    pub sealed: SealedRecord,
}

pub struct IngestionPipeline {
    source: Arc<dyn DataSource>,
    scorer: Arc<dyn DetectionScorer>,
    thresholds: TierThresholds,
    store: Arc<LogStore>,
}

impl IngestionPipeline {
    pub fn new(
        source: Arc<dyn DataSource>,
        scorer: Arc<dyn DetectionScorer>,
        thresholds: TierThresholds,
        store: Arc<LogStore>,
    ) -> Self {
        Self {
            source,
            scorer,
            thresholds,
            store,
        }
    }

    /// Run detection for `location` and seal the result into the log.
    ///
    /// Appends exactly one entry on success and nothing on failure.
    pub fn ingest(&self, location: &Location) -> SentinelResult<IngestionOutcome> {
        let measurement = self.source.acquire(location).map_err(|e| match e {
            SentinelError::Acquisition(_) => e,
            other => SentinelError::Acquisition(other.to_string()),
        })?;

        let missing = measurement.missing_bands(&REQUIRED_BANDS);
        if !missing.is_empty() {
            tracing::warn!(?missing, "Data source returned an incomplete band set");
            return Err(SentinelError::Acquisition(format!(
                "incomplete band set, missing {}",
                missing.join(", ")
            )));
        }

        let score = checked_score(self.scorer.score(&measurement))?;

        let detection = DetectionResult::classify(score, &self.thresholds);

        let record = EventRecord::new()
            .with("request", location)?
            .with(
                "raw_data_summary",
                DataSummary {
                    source: self.source.name(),
                    bands: measurement.band_names(),
                },
            )?
            .with(
                "analysis",
                Analysis {
                    score,
                    status: detection.status,
                    tier1_threshold: self.thresholds.tier1(),
                    tier2_threshold: self.thresholds.tier2(),
                    model: self.scorer.name(),
                },
            )?;

        let sealed = self.store.commit(EventType::Ingestion, record)?;

        tracing::info!(
            lat = location.lat,
            lon = location.lon,
            score,
            status = detection.status.as_str(),
            "Ingestion sealed"
        );
        Ok(IngestionOutcome { detection, sealed })
    }
}
