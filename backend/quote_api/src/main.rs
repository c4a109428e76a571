//! Presale quote service — entry point.
//!
//! Validates the presale configuration once at start-up (a misconfigured
//! presale aborts the process) and exposes the quote and contribution guard
//! as a small Axum REST API for the frontend.

mod api;
mod config;
mod errors;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use api::ApiState;
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load optional .env file (ignored if missing) before reading RUST_LOG.
    let _ = dotenvy::dotenv();

    // Initialise structured logging (RUST_LOG controls verbosity).
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    serve(config).await?;

    Ok(())
}

fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/params", get(api::get_params))
        .route("/quote", get(api::get_quote))
        .route("/guard", get(api::get_guard))
        .route("/progress", get(api::get_progress))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn serve(config: Config) -> errors::Result<()> {
    let state = Arc::new(ApiState::from_config(&config)?);
    info!(
        "Presale {}: rate {} per unit, tax {}%, contributions {}..={}",
        state.params.token_label(),
        state.params.rate(),
        state.params.tax_percentage(),
        state.params.min_contribution(),
        state.params.max_contribution(),
    );

    let addr = format!("0.0.0.0:{}", config.api_port);
    info!("API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
