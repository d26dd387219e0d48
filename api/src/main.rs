//! Calculator API server
//!
//! A small web service exposing the four basic arithmetic operations as JSON
//! endpoints, plus a browser UI page that calls them. The arithmetic core is
//! pure and transport-agnostic; the handler layer owns the HTTP contract.

use std::net::SocketAddr;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod handlers;
mod ops;


use config::Config;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the application router.
///
/// Kept separate from `main` so integration tests can drive the exact same
/// routing and middleware in-process.
pub fn router() -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(health))
        .route("/add", post(handlers::perform_addition))
        .route("/subtract", post(handlers::perform_subtraction))
        .route("/multiply", post(handlers::perform_multiplication))
        .route("/divide", post(handlers::perform_division))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env();

    // Initialize tracing; the filter comes from the environment so test and
    // deployment setups can swap sinks without touching handler code.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting calculator API...");

    let app = router();

    let addr = SocketAddr::from((config.bind_addr, config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
