//! Calibration Module - ground-truth parsing and threshold search.

pub mod ground_truth;
pub mod optimizer;


pub use ground_truth::{parse, LabeledObservation, ParsedGroundTruth};
pub use optimizer::{optimize, ThresholdRecommendation};
