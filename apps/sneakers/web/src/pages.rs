//! HTML page routes

use axum::Router;
use domain_sneakers::{PageRenderer, pages};

use crate::state::AppState;

/// Create the page router, registering the page templates up front
pub fn routes(state: &AppState) -> eyre::Result<Router> {
    let renderer = PageRenderer::new(state.config.catalog.display_settings())?;
    Ok(pages::router(state.service.clone(), renderer))
}
