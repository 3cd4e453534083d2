//! Ingestion request/response models

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::logic::detection::Location;
use crate::logic::evidence::EventRecord;
use crate::logic::pipeline::IngestionOutcome;

#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct IngestionRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: f64,
}

impl IngestionRequest {
    pub fn location(&self) -> Location {
        Location::new(self.lat, self.lon)
    }
}

#[derive(Debug, Serialize)]
pub struct IngestionResponse {
    pub status: &'static str,
    pub log_entry: EventRecord,
    pub hash: String,
}

impl From<IngestionOutcome> for IngestionResponse {
    fn from(outcome: IngestionOutcome) -> Self {
        Self {
            status: "success",
            log_entry: outcome.sealed.record().clone(),
            hash: outcome.sealed.hash().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_ranges() {
        assert!(IngestionRequest { lat: 41.5, lon: -81.7 }.validate().is_ok());
        assert!(IngestionRequest { lat: 90.0, lon: 180.0 }.validate().is_ok());
        assert!(IngestionRequest { lat: 91.0, lon: 0.0 }.validate().is_err());
        assert!(IngestionRequest { lat: 0.0, lon: -180.5 }.validate().is_err());
    }
}
