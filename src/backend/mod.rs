//! Backend Module
//!
//! All server-side code for Jazz Chronicle: an Axum HTTP server in front of
//! a Cosmic content bucket, with membership and exclusive-content gating.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Route configuration and router assembly
//! - **`middleware`** - Session resolution on every request
//! - **`auth`** - Password hashing, tokens, cookie, membership flows
//! - **`content`** - Posts, categories, authors, home page
//! - **`repository`** - Content store trait, Cosmic client, in-memory store
//! - **`error`** - Backend error type and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── middleware/     - Session middleware and extractors
//! ├── auth/           - Authentication
//! ├── content/        - Content handlers
//! ├── repository/     - Content store access
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the repository as `Arc<dyn ContentRepository>`, built
//! once at startup and shared by every handler. Nothing in the state is
//! mutated after startup.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. `BackendError` maps itself to
//! a status code and a `{"message", "status"}` JSON body, and replaces the
//! message of server-side failures with a generic one.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Request middleware
pub mod middleware;

/// Authentication and membership
pub mod auth;

/// Content endpoints
pub mod content;

/// Content store access
pub mod repository;

/// Backend error types
pub mod error;

pub use error::BackendError;
pub use server::{create_app, AppState};
