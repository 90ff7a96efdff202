/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds:
 * - the content repository (Cosmic bucket or in-memory store)
 * - the auth gateway (hasher, token service, repository)
 * - the content gate (preview length)
 * - the session cookie settings
 *
 * Everything inside is either `Arc`-shared or `Copy`, so cloning the state
 * per request is cheap.
 *
 * # Example
 *
 * ```rust,no_run
 * use std::sync::Arc;
 * use axum::extract::State;
 * use jazz_chronicle::backend::auth::AuthGateway;
 *
 * async fn handler(State(gateway): State<Arc<AuthGateway>>) {
 *     let _ = gateway.verify_session("token").await;
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::cookie::SessionCookie;
use crate::backend::auth::gateway::AuthGateway;
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::repository::ContentRepository;
use crate::shared::config::{AppConfig, ConfigError};
use crate::shared::gate::ContentGate;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn ContentRepository>,
    pub gateway: Arc<AuthGateway>,
    pub gate: ContentGate,
    pub cookie: SessionCookie,
}

impl AppState {
    /// Assemble the state from configuration and a repository
    ///
    /// Fails when the JWT secret is missing.
    pub fn new(
        config: &AppConfig,
        repository: Arc<dyn ContentRepository>,
    ) -> Result<Self, ConfigError> {
        let tokens = TokenService::new(&config.jwt_secret)?;
        Ok(Self::with_tokens(config, repository, tokens))
    }

    /// Assemble the state around an existing token service
    pub fn with_tokens(
        config: &AppConfig,
        repository: Arc<dyn ContentRepository>,
        tokens: TokenService,
    ) -> Self {
        let gateway = AuthGateway::new(
            repository.clone(),
            PasswordHasher::with_cost(config.password_cost),
            tokens,
        );

        Self {
            repository,
            gateway: Arc::new(gateway),
            gate: ContentGate::new(config.preview_length),
            cookie: SessionCookie::new(config.cookie_secure),
        }
    }
}

impl FromRef<AppState> for Arc<dyn ContentRepository> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.repository.clone()
    }
}

impl FromRef<AppState> for Arc<AuthGateway> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.gateway.clone()
    }
}

impl FromRef<AppState> for TokenService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.gateway.tokens().clone()
    }
}

impl FromRef<AppState> for ContentGate {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.gate
    }
}

impl FromRef<AppState> for SessionCookie {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.cookie
    }
}
