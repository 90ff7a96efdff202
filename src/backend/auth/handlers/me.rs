/**
 * Get Current User Handler
 *
 * GET /api/auth/me returns the member behind the request's session.
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::backend::auth::gateway::AuthGateway;
use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - No valid session, or the member no longer exists
/// * `500 Internal Server Error` - Content store failure
pub async fn get_me(
    State(gateway): State<Arc<AuthGateway>>,
    AuthUser(id): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    gateway
        .resolve(&id)
        .await?
        .map(|user| Json(UserResponse { user }))
        .ok_or_else(|| {
            tracing::warn!(user_id = %id, "Session for a member that no longer exists");
            BackendError::unauthorized("Unauthorized")
        })
}
