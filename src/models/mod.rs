//! Request/response models

pub mod calibration;
pub mod ingest;
pub mod legal_log;

pub use calibration::*;
pub use ingest::*;
pub use legal_log::*;
