//! Sneakers web application - JSON API and HTML catalog

use axum::Router;
use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod pages;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    let state = AppState::new(config);
    let sneakers = state.service.count().await?;
    info!(
        sneakers,
        currency = %state.config.catalog.currency,
        "Catalog ready"
    );

    let app = build_app(&state)?;

    info!("Starting {} on port {}", state.config.app.name, state.config.server.port);

    create_app(app, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Sneakers web shutdown complete");
    Ok(())
}

/// Assemble API, pages, documentation and health into one router
fn build_app(state: &AppState) -> eyre::Result<Router> {
    let api_routes = api::routes(state);
    let page_routes = pages::routes(state)?;

    let router = create_router::<openapi::ApiDoc>(api_routes, page_routes, &state.config.server)?;
    Ok(router.merge(health_router(state.config.app)))
}
