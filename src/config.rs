//! Configuration module

use std::env;

use crate::constants::{
    DEFAULT_CORS_ORIGIN, DEFAULT_PORT, DEFAULT_TIER1_THRESHOLD, DEFAULT_TIER2_THRESHOLD,
};
use crate::logic::detection::TierThresholds;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// `LOG_FORMAT=json`, or any production environment, selects JSON output
    pub fn from_env() -> Self {
        let production = env::var("ENVIRONMENT").map_or(false, |e| e == "production");
        match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok(_) => LogFormat::Pretty,
            Err(_) if production => LogFormat::Json,
            Err(_) => LogFormat::Pretty,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Alert tier thresholds used by ingestion
    pub thresholds: TierThresholds,

    /// Frontend origin allowed by CORS
    pub cors_origin: String,

    /// Environment (development, production)
    pub environment: String,

    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            thresholds: TierThresholds::default(),
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            environment: "development".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let tier1 = parse_var("TIER1_THRESHOLD").unwrap_or(DEFAULT_TIER1_THRESHOLD);
        let tier2 = parse_var("TIER2_THRESHOLD").unwrap_or(DEFAULT_TIER2_THRESHOLD);

        let thresholds = TierThresholds::new(tier1, tier2).unwrap_or_else(|e| {
            tracing::warn!("Ignoring configured thresholds ({}), using defaults", e);
            TierThresholds::default()
        });

        Self {
            port: parse_var("PORT").unwrap_or(DEFAULT_PORT),

            thresholds,

            cors_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string()),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),

            log_format: LogFormat::from_env(),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.thresholds.tier1(), 0.85);
        assert_eq!(config.thresholds.tier2(), 0.93);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(!config.is_production());
    }
}
