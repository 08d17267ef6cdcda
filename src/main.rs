//! Skillet - scripted voice-skill host
//!
//! A small HTTP service hosting three scripted voice-assistant skills on a
//! shared request-dispatch and dialog stage-machine core.

mod api;
mod dialog;
mod dispatch;
mod skills;
mod speech;
mod wire;

use api::{create_router, AppState};
use skills::SkillRegistry;
use std::net::SocketAddr;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skillet=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let port: u16 = std::env::var("SKILLET_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    // Optional application-id check; unset means accept any caller.
    let expected_app_id = std::env::var("SKILLET_APP_ID").ok();
    if expected_app_id.is_none() {
        tracing::warn!("SKILLET_APP_ID not set; accepting events from any application id");
    }

    // Create application state
    let registry = SkillRegistry::builtin();
    tracing::info!(skills = ?registry.names(), "Skill registry initialized");
    let state = AppState::new(registry, expected_app_id);

    // Create router
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let compression = CompressionLayer::new()
        .gzip(true)
        .br(true)
        .deflate(true)
        .zstd(true);

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(compression);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Skillet server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
