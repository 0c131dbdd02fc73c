//! Sneakers API routes

use axum::Router;
use domain_sneakers::handlers;

use crate::state::AppState;

/// Create sneakers router
pub fn router(state: &AppState) -> Router {
    handlers::router(state.service.clone(), state.config.catalog.display_settings())
}
