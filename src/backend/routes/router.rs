/**
 * Router Configuration
 *
 * This module combines all route configurations into a single Axum router.
 *
 * # Layers
 *
 * From the outside in:
 * 1. `TraceLayer` - one tracing span per request
 * 2. Session middleware - token to `Session`, `x-user-id` header
 * 3. Routes, static files and the JSON 404 fallback
 */

use axum::{middleware::from_fn_with_state, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::middleware::session_middleware;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::content_routes::configure_content_routes;
use crate::backend::server::state::AppState;

/// Directory served under `/static`
pub const STATIC_DIR: &str = "public";

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_content_routes(Router::new());
    let router = configure_api_routes(router);

    router
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .fallback(|| async { BackendError::not_found("Not found") })
        .layer(from_fn_with_state(app_state.clone(), session_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
