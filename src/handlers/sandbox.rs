//! Training sandbox handler

use axum::{body::Bytes, extract::State, Json};

use crate::extract::Upload;
use crate::models::CalibrationResponse;
use crate::{AppError, AppResult, AppState};

const UPLOAD_FIELD: &str = "file";
const DEFAULT_FILENAME: &str = "upload.csv";

/// Accept a ground-truth CSV, recalibrate thresholds and seal the attempt
pub async fn train(
    State(state): State<AppState>,
    Upload(mut multipart): Upload,
) -> AppResult<Json<CalibrationResponse>> {
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let filename = field
            .file_name()
            .unwrap_or(DEFAULT_FILENAME)
            .to_string();
        let data = field.bytes().await?;
        upload = Some((filename, data));
        break;
    }

    let (filename, data) = upload.ok_or_else(|| {
        AppError::ValidationError(format!("multipart field '{}' is required", UPLOAD_FIELD))
    })?;

    tracing::debug!(file = %filename, bytes = data.len(), "Received ground-truth upload");

    let pipeline = state.calibration.clone();
    let outcome =
        tokio::task::spawn_blocking(move || pipeline.calibrate(&data, &filename)).await??;

    Ok(Json(outcome.into()))
}
