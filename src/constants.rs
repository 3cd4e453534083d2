//! Central Configuration Constants
//!
//! Single source of truth for detection and calibration defaults.
//! Values that operators may tune at runtime live in `config.rs` instead.

/// Default Tier 1 (Probable) threshold
pub const DEFAULT_TIER1_THRESHOLD: f64 = 0.85;

/// Default Tier 2 (Confirmed) threshold
pub const DEFAULT_TIER2_THRESHOLD: f64 = 0.93;

/// Observed density at or above which a ground-truth sample counts as a bloom
pub const DENSITY_CUTOFF: f64 = 10.0;

/// Threshold the "current" F1 is measured at during calibration
pub const BASELINE_THRESHOLD: f64 = 0.85;

/// Grid search bounds, in hundredths (0.10 ..= 0.98)
pub const GRID_START_CENTS: u32 = 10;
pub const GRID_END_CENTS: u32 = 98;

/// Reported when no candidate beats an F1 of zero
pub const FALLBACK_THRESHOLD: f64 = 0.5;

/// Tier 2 sits this far above the recommended Tier 1
pub const TIER2_OFFSET: f64 = 0.08;

/// Ceiling for the recommended Tier 2 threshold
pub const TIER2_CEILING: f64 = 0.99;

/// Bands a measurement must carry before it can be scored
pub const REQUIRED_BANDS: [&str; 5] = ["B3", "B4", "B5", "B6", "B7"];

/// Ground-truth CSV columns
pub const COLUMN_LATITUDE: &str = "latitude";
pub const COLUMN_LONGITUDE: &str = "longitude";
pub const COLUMN_DENSITY: &str = "observed_cyanobacteria_density";

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8000;

/// Default frontend origin allowed by CORS (Vite dev server)
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Aqua-Sentinel";
