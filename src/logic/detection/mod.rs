//! Detection: locations, measurements, scorers and alert tiers.

pub mod scorer;
pub mod source;
pub mod types;

pub use scorer::{
    checked_score, DetectionScorer, HashedBandScorer, HashedCoordinateScorer, LocationScorer,
};
pub use source::{DataSource, SimulatedSentinel2};
pub use types::{DetectionResult, Location, MeasurementVector, Status, TierThresholds};
