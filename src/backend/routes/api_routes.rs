/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/signup` - Member registration
 * - `POST /api/auth/login` - Member login
 * - `POST /api/auth/verify` - Resolve a token (body or cookie)
 * - `POST /api/auth/logout` - Clear the session cookie
 * - `GET /api/auth/me` - Current member (requires a session)
 *
 * ## Profile
 * - `POST /api/user/update` - Multipart profile update (requires a session)
 */

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::backend::auth::handlers::{get_me, login, logout, signup, update_profile, verify};
use crate::backend::server::state::AppState;

/// Largest accepted profile form, avatar included
pub const PROFILE_BODY_LIMIT: usize = 5 * 1024 * 1024;

/// Add the auth and profile routes to `router`
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/verify", post(verify))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/me", get(get_me))
        .route(
            "/api/user/update",
            post(update_profile).layer(DefaultBodyLimit::max(PROFILE_BODY_LIMIT)),
        )
}
