//! API routes module

pub mod sneakers;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/sneakers", sneakers::router(state))
}
