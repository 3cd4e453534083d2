//! Health check handlers

use axum::Json;
use serde::Serialize;

use crate::constants::{APP_NAME, APP_VERSION};

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    timestamp: i64,
}

#[derive(Serialize)]
pub struct RootResponse {
    message: String,
}

pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: APP_VERSION,
        timestamp: chrono::Utc::now().timestamp(),
    })
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("{} Backend is running", APP_NAME),
    })
}
