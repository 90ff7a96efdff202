/**
 * Server Initialization
 *
 * Builds the application from its configuration:
 * 1. Pick the content repository (Cosmic bucket or in-memory)
 * 2. Build the auth gateway, content gate and cookie settings
 * 3. Assemble the router
 *
 * Startup fails on a missing JWT secret or an unusable HTTP client. It
 * never fails because the content store is unreachable; that surfaces per
 * request.
 */

use std::sync::Arc;

use axum::Router;
use thiserror::Error;

use crate::backend::repository::{ContentRepository, RepositoryError};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::build_repository;
use crate::backend::server::state::AppState;
use crate::shared::config::{AppConfig, ConfigError};

/// Errors that stop the server from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("content repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Create and configure the Axum application
pub async fn create_app(config: AppConfig) -> Result<Router<()>, StartupError> {
    tracing::info!("Initializing Jazz Chronicle backend server");

    let repository = build_repository(&config)?;
    create_app_with(&config, repository)
}

/// Create the application around an existing repository
pub fn create_app_with(
    config: &AppConfig,
    repository: Arc<dyn ContentRepository>,
) -> Result<Router<()>, StartupError> {
    config.validate()?;
    let app_state = AppState::new(config, repository)?;

    tracing::info!(
        preview_length = config.preview_length,
        cookie_secure = config.cookie_secure,
        "Router configured"
    );
    Ok(create_router(app_state))
}
