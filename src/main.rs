//! Aqua-Sentinel server entry point

use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aqua_sentinel::config::{Config, LogFormat};
use aqua_sentinel::constants::APP_NAME;
use aqua_sentinel::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "aqua_sentinel=debug,tower_http=debug".into());
    if LogFormat::from_env() == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    // Load configuration
    let config = Config::from_env();

    tracing::info!("{} server starting ({})...", APP_NAME, config.environment);
    tracing::info!(
        "Alert thresholds: tier1={} tier2={}",
        config.thresholds.tier1(),
        config.thresholds.tier2()
    );
    tracing::warn!("Evidentiary log is held in memory and is cleared on restart");
    if config.is_production() && config.cors_origin == "*" {
        tracing::warn!("CORS allows any origin in production");
    }

    let state = AppState::new(config.clone());
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
