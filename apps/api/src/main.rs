mod config;
mod errors;
mod interview;
mod llm_client;
mod locale;
mod models;
mod resume;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::interview::store::SessionStore;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on a missing API key)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TalentScout v{}", env!("CARGO_PKG_VERSION"));

    // Initialize model client
    let model = GeminiClient::new(
        config.google_api_key.clone(),
        config.gemini_model.clone(),
        config.model_timeout,
    )?;
    info!(
        "Model client initialized (model: {}, timeout: {}s)",
        model.model(),
        config.model_timeout.as_secs()
    );

    // Build app state
    let sessions = SessionStore::new();
    sessions.spawn_sweeper(config.session_idle_timeout, config.session_sweep_interval);
    info!(
        "Idle sessions evicted after {}s",
        config.session_idle_timeout.as_secs()
    );

    let state = AppState {
        sessions,
        model: Arc::new(model),
        config: config.clone(),
    };

    // Build router
    // TODO: restrict CORS origins once the web front end has a fixed host
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
