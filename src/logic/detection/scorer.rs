//! Detection scorers
//!
//! The real bloom model is an external collaborator. The scorers here are
//! deterministic stand-ins: they hash their input and map the digest onto a
//! fixed interval, so the same input always scores the same. Swap in a real
//! model by implementing the traits.

use sha2::{Digest, Sha256};

use super::types::{Location, MeasurementVector};
use crate::logic::error::{SentinelError, SentinelResult};

/// Scores a multispectral measurement. Contract: result in [0, 1].
pub trait DetectionScorer: Send + Sync {
    fn name(&self) -> &str;
    fn score(&self, measurement: &MeasurementVector) -> SentinelResult<f64>;
}

/// Scores a location directly. Used when calibrating against ground truth.
/// Contract: result in [0, 1].
pub trait LocationScorer: Send + Sync {
    fn score_location(&self, location: &Location) -> SentinelResult<f64>;
}

impl<F> LocationScorer for F
where
    F: Fn(&Location) -> f64 + Send + Sync,
{
    fn score_location(&self, location: &Location) -> SentinelResult<f64> {
        Ok(self(location))
    }
}

/// Hold a scorer to its contract. Failures of any kind surface as
/// `Scoring`, and the value must be finite and within [0, 1].
pub fn checked_score(result: SentinelResult<f64>) -> SentinelResult<f64> {
    let score = result.map_err(|e| match e {
        SentinelError::Scoring(_) => e,
        other => SentinelError::Scoring(other.to_string()),
    })?;

    if score.is_finite() && (0.0..=1.0).contains(&score) {
        Ok(score)
    } else {
        Err(SentinelError::Scoring(format!(
            "score {} is outside [0, 1]",
            score
        )))
    }
}

/// Stand-in for the band model: score in [0.70, 0.99)
#[derive(Debug, Clone, Copy, Default)]
pub struct HashedBandScorer;

const BAND_SCORE_LOW: f64 = 0.70;
const BAND_SCORE_HIGH: f64 = 0.99;

impl DetectionScorer for HashedBandScorer {
    fn name(&self) -> &str {
        "hashed-band-stand-in"
    }

    fn score(&self, measurement: &MeasurementVector) -> SentinelResult<f64> {
        let mut hasher = Sha256::new();
        // BTreeMap iteration is sorted, so the digest ignores insertion order.
        for (band, value) in &measurement.bands {
            hasher.update(band.as_bytes());
            hasher.update(value.to_bits().to_be_bytes());
        }
        let unit = unit_interval(&hasher.finalize());
        Ok(BAND_SCORE_LOW + unit * (BAND_SCORE_HIGH - BAND_SCORE_LOW))
    }
}

/// Stand-in for the location model: score in [0, 1)
#[derive(Debug, Clone, Copy, Default)]
pub struct HashedCoordinateScorer;

impl LocationScorer for HashedCoordinateScorer {
    fn score_location(&self, location: &Location) -> SentinelResult<f64> {
        let mut hasher = Sha256::new();
        hasher.update(normalize_zero(location.lat).to_bits().to_be_bytes());
        hasher.update(normalize_zero(location.lon).to_bits().to_be_bytes());
        Ok(unit_interval(&hasher.finalize()))
    }
}

/// Top 53 bits of the digest as a float in [0, 1)
fn unit_interval(digest: &[u8]) -> f64 {
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    let bits = u64::from_be_bytes(head) >> 11;
    bits as f64 / (1u64 << 53) as f64
}

// -0.0 and 0.0 are the same coordinate
fn normalize_zero(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}
