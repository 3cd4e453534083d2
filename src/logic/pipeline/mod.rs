//! Pipelines - orchestrate detection and calibration into sealed log entries.

pub mod calibration;
pub mod ingestion;


pub use calibration::{CalibrationOutcome, CalibrationPipeline, LabelBalance};
pub use ingestion::{IngestionOutcome, IngestionPipeline};
