//! NetDiag HTTP Server
//!
//! Exposes the diagnosis engines over a small JSON API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      NETDIAG SERVER                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌──────────────┐   ┌────────────────────┐ │
//! │  │  API      │──▶│ Orchestrator │──▶│ Frequency / Fuzzy  │ │
//! │  │  (Axum)   │   │              │   │ / Rule-based       │ │
//! │  └───────────┘   └──────┬───────┘   └────────────────────┘ │
//! │                         ▼                                   │
//! │                 ┌────────────────┐                          │
//! │                 │ Knowledge base │                          │
//! │                 └────────────────┘                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod handlers;
mod middleware;
mod models;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use std::net::SocketAddr;

use anyhow::Context;
use netdiag_core::logic::knowledge;
use netdiag_core::DiagnosisConfig;

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize logging (JSON lines in production)
    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "netdiag_server=debug,netdiag_core=info,tower_http=debug".into()));
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("NetDiag server starting ({})", config.environment);

    // Refuse to serve from an inconsistent knowledge base
    knowledge::validate().context("knowledge base is inconsistent")?;

    if config.response_delay_ms > 0 {
        tracing::info!("Response delay: {} ms", config.response_delay_ms);
    }

    // Build application state
    let state = AppState {
        diagnosis: config.diagnosis_config(),
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub diagnosis: DiagnosisConfig,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    let diagnosis_routes = Router::new()
        .route("/api/v1/diagnose", post(handlers::diagnose::diagnose))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::delay::response_delay,
        ));

    let knowledge_routes = Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/v1/knowledge", get(handlers::knowledge::list))
        .route("/api/v1/rules", get(handlers::knowledge::rules));

    Router::new()
        .merge(knowledge_routes)
        .merge(diagnosis_routes)
        .fallback(handlers::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
