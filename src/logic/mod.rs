//! Core logic: evidence sealing, detection, calibration and the pipelines
//! that tie them together.

pub mod calibration;
pub mod detection;
pub mod error;
pub mod evidence;
pub mod pipeline;

pub use error::{SentinelError, SentinelResult};
