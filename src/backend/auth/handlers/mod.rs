//! Authentication Handlers Module
//!
//! HTTP handlers for the membership endpoints. Each handler is a thin
//! adapter over [`AuthGateway`](crate::backend::auth::AuthGateway).
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/auth/signup
//! - **`login`** - POST /api/auth/login
//! - **`verify`** - POST /api/auth/verify
//! - **`logout`** - POST /api/auth/logout
//! - **`get_me`** - GET /api/auth/me
//! - **`update_profile`** - POST /api/user/update
//!
//! # Example
//!
//! ```rust,no_run
//! use jazz_chronicle::backend::auth::handlers::{signup, login, get_me};
//! use jazz_chronicle::backend::server::AppState;
//! use axum::{routing::post, routing::get, Router};
//!
//! let router: Router<AppState> = Router::new()
//!     .route("/api/auth/signup", post(signup))
//!     .route("/api/auth/login", post(login))
//!     .route("/api/auth/me", get(get_me));
//! ```

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Token verification handler
pub mod verify;

/// Logout handler
pub mod logout;

/// Get current user handler
pub mod me;

/// Profile update handler
pub mod profile;

pub use types::{
    AuthResponse, LoginRequest, MessageResponse, ProfileResponse, SignupRequest, UserResponse,
    VerifyRequest,
};

pub use login::login;
pub use logout::logout;
pub use me::get_me;
pub use profile::update_profile;
pub use signup::signup;
pub use verify::verify;
