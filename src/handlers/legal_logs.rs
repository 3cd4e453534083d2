//! Legal log handlers

use axum::{extract::State, Json};

use crate::logic::evidence::SealedLogEntry;
use crate::models::VerificationReport;
use crate::AppState;

/// Full evidentiary log in append order
pub async fn list(State(state): State<AppState>) -> Json<Vec<SealedLogEntry>> {
    Json(state.store.list_all())
}

/// Re-hash every entry and report which still match their seal
pub async fn verify(State(state): State<AppState>) -> Json<VerificationReport> {
    let report = VerificationReport::from(state.store.verify_all());
    if report.verified != report.total {
        tracing::warn!(
            total = report.total,
            verified = report.verified,
            "Evidentiary log verification found mismatched entries"
        );
    }
    Json(report)
}
