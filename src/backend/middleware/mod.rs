//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`session`** - Resolves the session token on every request and
//!   provides the `AuthUser` / `MaybeUser` extractors
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn_with_state, Router};
//! use jazz_chronicle::backend::middleware::session_middleware;
//! use jazz_chronicle::backend::server::AppState;
//!
//! fn with_sessions(router: Router<AppState>, state: AppState) -> Router<AppState> {
//!     router.layer(from_fn_with_state(state, session_middleware))
//! }
//! ```

pub mod session;

pub use session::{session_middleware, AuthUser, MaybeUser, Session, USER_ID_HEADER};
