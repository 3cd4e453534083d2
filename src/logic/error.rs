//! Error types for the detection, sealing and calibration core.

use thiserror::Error;

pub type SentinelResult<T> = Result<T, SentinelError>;

/// Errors raised by the core pipelines.
///
/// None of these are retried; each aborts the running pipeline before
/// anything is appended to the log.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SentinelError {
    /// Data source unreachable or returned an incomplete band set
    #[error("acquisition failed: {0}")]
    Acquisition(String),

    /// Scorer failed or returned a value outside [0, 1]
    #[error("scoring failed: {0}")]
    Scoring(String),

    /// Upload is not valid UTF-8 text
    #[error("upload is not valid UTF-8: {0}")]
    Decode(String),

    /// Upload header lacks required columns
    #[error("CSV must contain columns: {}", missing.join(", "))]
    Schema { missing: Vec<String> },

    /// Nothing usable to calibrate against
    #[error("no valid data points")]
    InsufficientData,

    /// Record has no canonical serialization
    #[error("record cannot be canonically encoded: {0}")]
    Encoding(String),
}

impl SentinelError {
    /// Stable machine-readable code for this error kind
    pub fn code(&self) -> &'static str {
        match self {
            SentinelError::Acquisition(_) => "ACQUISITION_ERROR",
            SentinelError::Scoring(_) => "SCORING_ERROR",
            SentinelError::Decode(_) => "DECODE_ERROR",
            SentinelError::Schema { .. } => "SCHEMA_ERROR",
            SentinelError::InsufficientData => "INSUFFICIENT_DATA",
            SentinelError::Encoding(_) => "ENCODING_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_message_lists_columns() {
        let err = SentinelError::Schema {
            missing: vec!["latitude".to_string(), "longitude".to_string()],
        };
        assert_eq!(err.to_string(), "CSV must contain columns: latitude, longitude");
        assert_eq!(err.code(), "SCHEMA_ERROR");
    }
}
