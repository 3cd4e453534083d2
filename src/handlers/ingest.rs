//! Ingestion handler

use axum::{extract::State, Json};

use crate::extract::ValidatedJson;
use crate::models::{IngestionRequest, IngestionResponse};
use crate::{AppResult, AppState};

/// Trigger data ingestion and analysis for a location
pub async fn ingest(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<IngestionRequest>,
) -> AppResult<Json<IngestionResponse>> {
    let location = req.location();

    // Acquisition and scoring may block on external collaborators
    let pipeline = state.ingestion.clone();
    let outcome = tokio::task::spawn_blocking(move || pipeline.ingest(&location)).await??;

    Ok(Json(outcome.into()))
}
