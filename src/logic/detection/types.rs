//! Detection Types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_TIER1_THRESHOLD, DEFAULT_TIER2_THRESHOLD};

// ============================================================================
// LOCATION & MEASUREMENT
// ============================================================================

/// Geographic query point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Multispectral reflectance sample for one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementVector {
    pub location: Location,

    /// Band id -> normalized reflectance, conventionally in [0, 1]
    pub bands: BTreeMap<String, f64>,
}

impl MeasurementVector {
    pub fn new(location: Location) -> Self {
        Self {
            location,
            bands: BTreeMap::new(),
        }
    }

    pub fn with_band(mut self, band: &str, reflectance: f64) -> Self {
        self.bands.insert(band.to_string(), reflectance);
        self
    }

    pub fn band(&self, band: &str) -> Option<f64> {
        self.bands.get(band).copied()
    }

    /// Required bands that are absent or not finite
    pub fn missing_bands(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|b| !self.band(b).map_or(false, f64::is_finite))
            .map(|b| b.to_string())
            .collect()
    }

    pub fn band_names(&self) -> Vec<String> {
        self.bands.keys().cloned().collect()
    }
}

// ============================================================================
// STATUS & THRESHOLDS
// ============================================================================

/// Alert tier, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Normal")]
    Normal,
    #[serde(rename = "Tier 1 (Probable)")]
    Tier1Probable,
    #[serde(rename = "Tier 2 (Confirmed)")]
    Tier2Confirmed,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Normal => "Normal",
            Status::Tier1Probable => "Tier 1 (Probable)",
            Status::Tier2Confirmed => "Tier 2 (Confirmed)",
        }
    }
}

/// Ordered pair of alert thresholds (`tier1 <= tier2`, both in [0, 1])
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierThresholds {
    tier1: f64,
    tier2: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            tier1: DEFAULT_TIER1_THRESHOLD,
            tier2: DEFAULT_TIER2_THRESHOLD,
        }
    }
}

impl TierThresholds {
    pub fn new(tier1: f64, tier2: f64) -> Result<Self, String> {
        let in_range = |t: f64| t.is_finite() && (0.0..=1.0).contains(&t);
        if !in_range(tier1) || !in_range(tier2) {
            return Err(format!(
                "thresholds must lie in [0, 1], got tier1={} tier2={}",
                tier1, tier2
            ));
        }
        if tier1 > tier2 {
            return Err(format!(
                "tier1 ({}) must not exceed tier2 ({})",
                tier1, tier2
            ));
        }
        Ok(Self { tier1, tier2 })
    }

    pub fn tier1(&self) -> f64 {
        self.tier1
    }

    pub fn tier2(&self) -> f64 {
        self.tier2
    }

    /// Map a score onto an alert tier
    pub fn classify(&self, score: f64) -> Status {
        if score >= self.tier2 {
            Status::Tier2Confirmed
        } else if score >= self.tier1 {
            Status::Tier1Probable
        } else {
            Status::Normal
        }
    }
}

/// Score plus derived tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub score: f64,
    pub status: Status,
}

impl DetectionResult {
    pub fn classify(score: f64, thresholds: &TierThresholds) -> Self {
        Self {
            score,
            status: thresholds.classify(score),
        }
    }
}
