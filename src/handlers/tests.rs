//! Router tests

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::config::Config;
use crate::{create_router, AppState};

const BOUNDARY: &str = "sentinel-test-boundary";

fn app() -> (Router, AppState) {
    let state = AppState::new(Config::default());
    (create_router(state.clone()), state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn upload(field: &str, filename: &str, content: &str) -> Request<Body> {
    let body = format!(
        "--{b}\r\n\
         Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
         Content-Type: text/csv\r\n\r\n\
         {content}\r\n\
         --{b}--\r\n",
        b = BOUNDARY,
        field = field,
        filename = filename,
        content = content,
    );

    Request::builder()
        .method("POST")
        .uri("/sandbox/train")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_root_and_health() {
    let (app, _) = app();

    let (status, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Aqua-Sentinel Backend is running"}));

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_ingest_then_list() {
    let (app, state) = app();

    let (status, body) = send(&app, post_json("/ingest", json!({"lat": 41.68, "lon": -83.27}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["hash"].as_str().unwrap().len(), 64);
    assert_eq!(body["log_entry"]["request"], json!({"lat": 41.68, "lon": -83.27}));
    assert!(body["log_entry"]["timestamp"].is_string());

    let (status, logs) = send(&app, get("/legal-logs")).await;
    assert_eq!(status, StatusCode::OK);
    let logs = logs.as_array().unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["event_type"], "INGESTION");
    assert_eq!(logs[0]["content_hash"], body["hash"]);
    assert_eq!(logs[0]["details"], body["log_entry"]);
    assert_eq!(state.store.len(), 1);
}

#[tokio::test]
async fn test_ingest_rejects_out_of_range_location() {
    let (app, state) = app();

    let (status, body) = send(&app, post_json("/ingest", json!({"lat": 123.0, "lon": 0.0}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(state.store.is_empty());
}

#[tokio::test]
async fn test_calibration_upload() {
    let (app, _) = app();
    let csv = "latitude,longitude,observed_cyanobacteria_density\n\
               41.50,-83.10,12.0\n\
               41.60,-83.00,3.5\n\
               bad,-83.00,3.5\n\
               41.70,-82.90,22.0";

    let (status, body) = send(&app, upload("file", "erie.csv", csv)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["record_count"], 3);
    assert_eq!(body["skipped_rows"], 1);
    assert_eq!(body["legal_log"]["input_file_name"], "erie.csv");
    assert_eq!(body["legal_log"]["optimization_results"], body["results"]);

    let tier1 = body["results"]["recommended_tier1_threshold"].as_f64().unwrap();
    let tier2 = body["results"]["recommended_tier2_threshold"].as_f64().unwrap();
    assert_eq!(tier2, (tier1 + 0.08).min(0.99));

    let (_, logs) = send(&app, get("/legal-logs")).await;
    assert_eq!(logs[0]["event_type"], "CALIBRATION");
    assert_eq!(logs[0]["content_hash"], body["hash"]);
}

#[tokio::test]
async fn test_calibration_error_codes() {
    let (app, state) = app();

    let (status, body) = send(&app, upload("file", "a.csv", "lat,lon\n1,2")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "SCHEMA_ERROR");

    let header_only = "latitude,longitude,observed_cyanobacteria_density\nx,y,z";
    let (status, body) = send(&app, upload("file", "b.csv", header_only)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INSUFFICIENT_DATA");

    let (status, body) = send(&app, upload("attachment", "c.csv", header_only)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    assert!(state.store.is_empty());
}

#[tokio::test]
async fn test_verify_endpoint() {
    let (app, _) = app();

    for lat in [10.0, 20.0, 30.0] {
        let (status, _) = send(&app, post_json("/ingest", json!({"lat": lat, "lon": 5.0}))).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, report) = send(&app, get("/legal-logs/verify")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["total"], 3);
    assert_eq!(report["verified"], 3);
    assert_eq!(report["entries"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_malformed_ingest_body_is_validation_error() {
    let (app, state) = app();

    let (status, body) = send(&app, post_json("/ingest", json!({"lat": 41.0}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["status"], 400);
    assert!(body["error"].as_str().unwrap().contains("lon"));

    let garbled = Request::builder()
        .method("POST")
        .uri("/ingest")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"lat\": 41.0,"))
        .unwrap();
    let (status, body) = send(&app, garbled).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    assert!(state.store.is_empty());
}

#[tokio::test]
async fn test_non_multipart_upload_is_validation_error() {
    let (app, state) = app();

    let request = Request::builder()
        .method("POST")
        .uri("/sandbox/train")
        .header(header::CONTENT_TYPE, "text/csv")
        .body(Body::from("latitude,longitude,observed_cyanobacteria_density\n1,2,3"))
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(state.store.is_empty());
}

#[tokio::test]
async fn test_malformed_cors_origin_falls_back_to_default() {
    let config = Config {
        cors_origin: "http://bad\norigin".to_string(),
        ..Config::default()
    };
    let app = create_router(AppState::new(config));

    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "http://elsewhere.example")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:5173"
    );
}
