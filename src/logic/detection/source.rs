//! Measurement sources
//!
//! Real deployments acquire Sentinel-2 imagery from an external provider.
//! `SimulatedSentinel2` fills in for it during development.

use rand::Rng;

use super::types::{Location, MeasurementVector};
use crate::constants::REQUIRED_BANDS;
use crate::logic::error::SentinelResult;

/// Produces a measurement vector for a location
pub trait DataSource: Send + Sync {
    /// Human-readable source description, recorded in the log
    fn name(&self) -> &str;

    fn acquire(&self, location: &Location) -> SentinelResult<MeasurementVector>;
}

/// Random reflectances in [0.1, 0.5) for bands B3-B7
/// (green, red, red edge 1-3)
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedSentinel2;

impl DataSource for SimulatedSentinel2 {
    fn name(&self) -> &str {
        "Sentinel-2 Bands (simulated)"
    }

    fn acquire(&self, location: &Location) -> SentinelResult<MeasurementVector> {
        let mut rng = rand::thread_rng();
        let measurement = REQUIRED_BANDS
            .iter()
            .fold(MeasurementVector::new(*location), |m, band| {
                m.with_band(band, rng.gen_range(0.1..0.5))
            });

        tracing::debug!(
            lat = location.lat,
            lon = location.lon,
            bands = measurement.bands.len(),
            "Acquired simulated measurement"
        );
        Ok(measurement)
    }
}
