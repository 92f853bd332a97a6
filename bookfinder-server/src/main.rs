//! Bookfinder Server - browser UI for the book search backend

use anyhow::{Context, Result};
use bookfinder_core::Config;
use bookfinder_server::{routes, state};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookfinder_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    // Create application state
    let state = state::AppState::new(&config)?;

    // Build router
    let app = routes::create_router(state);

    // Start server
    tracing::info!("Starting server on {} (backend {})", config.bind, config.api_url);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
