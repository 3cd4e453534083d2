//! Aqua-Sentinel Backend
//!
//! Evidentiary log and threshold calibration service for cyanobacteria bloom
//! detection.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        AQUA-SENTINEL                         │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌─────────────────┐   ┌──────────────────┐  │
//! │  │  API      │──▶│  Ingestion      │──▶│  Event Sealer    │  │
//! │  │  (Axum)   │   │  Pipeline       │   │  (SHA-256)       │  │
//! │  │           │   └─────────────────┘   └────────┬─────────┘  │
//! │  │           │   ┌─────────────────┐            │            │
//! │  │           │──▶│  Calibration    │────────────┤            │
//! │  └─────┬─────┘   │  Pipeline       │            ▼            │
//! │        │         └─────────────────┘   ┌──────────────────┐  │
//! │        └──────────────────────────────▶│  Log Store       │  │
//! │                                        │  (append-only)   │  │
//! │                                        └──────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod logic;
pub mod models;

use std::sync::Arc;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub use error::{AppError, AppResult};

use config::Config;
use constants::DEFAULT_CORS_ORIGIN;
use logic::detection::{
    DataSource, DetectionScorer, HashedBandScorer, HashedCoordinateScorer, LocationScorer,
    SimulatedSentinel2,
};
use logic::evidence::LogStore;
use logic::pipeline::{CalibrationPipeline, IngestionPipeline};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<LogStore>,
    pub ingestion: Arc<IngestionPipeline>,
    pub calibration: Arc<CalibrationPipeline>,
}

impl AppState {
    /// State wired with the simulated sensor and stand-in scorers
    pub fn new(config: Config) -> Self {
        Self::with_collaborators(
            config,
            Arc::new(SimulatedSentinel2),
            Arc::new(HashedBandScorer),
            Arc::new(HashedCoordinateScorer),
        )
    }

    pub fn with_collaborators(
        config: Config,
        source: Arc<dyn DataSource>,
        scorer: Arc<dyn DetectionScorer>,
        location_scorer: Arc<dyn LocationScorer>,
    ) -> Self {
        let store = Arc::new(LogStore::new());
        let ingestion = IngestionPipeline::new(source, scorer, config.thresholds, store.clone());
        let calibration = CalibrationPipeline::new(location_scorer, store.clone());

        Self {
            config,
            store,
            ingestion: Arc::new(ingestion),
            calibration: Arc::new(calibration),
        }
    }
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin(&state.config.cors_origin))
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::check))
        .route("/ingest", post(handlers::ingest::ingest))
        .route("/sandbox/train", post(handlers::sandbox::train))
        .route("/legal-logs", get(handlers::legal_logs::list))
        .route("/legal-logs/verify", get(handlers::legal_logs::verify))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn allowed_origin(origin: &str) -> AllowOrigin {
    if origin == "*" {
        return AllowOrigin::any();
    }
    match HeaderValue::from_str(origin) {
        Ok(value) => AllowOrigin::exact(value),
        Err(_) => {
            tracing::warn!(
                "Invalid CORS origin {:?}, falling back to {}",
                origin,
                DEFAULT_CORS_ORIGIN
            );
            AllowOrigin::exact(HeaderValue::from_static(DEFAULT_CORS_ORIGIN))
        }
    }
}
