//! Bookshelf Server - In-memory book catalog
//!
//! A small Rust REST API serving a seeded collection of books.

use std::net::SocketAddr;

use anyhow::Context;

use bookshelf_server::{api, config::AppConfig, logging, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing; the guard keeps the file writer alive
    let _log_guard = logging::init_tracing(&config.logging)?;

    tracing::info!("Starting Bookshelf Server v{}", env!("CARGO_PKG_VERSION"));

    let addr = SocketAddr::new(
        config
            .server
            .host
            .parse()
            .with_context(|| format!("Invalid host address {}", config.server.host))?,
        config.server.port,
    );

    // Create repository, services and application state
    let state = AppState::new(config);
    tracing::info!(
        books = state.services.catalog.count_books().await,
        id_strategy = ?state.services.catalog.id_strategy(),
        "Book store initialized"
    );
    if state.config.docs.enabled {
        tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);
    }

    // Build router
    let app = api::create_router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
