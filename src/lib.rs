//! Jazz Chronicle - Main Library
//!
//! Jazz Chronicle is a content site for jazz writing: posts, authors and
//! categories served from a hosted content-object store (Cosmic), plus a small
//! membership layer that unlocks member-exclusive posts.
//!
//! # Overview
//!
//! This library provides:
//! - Signup, login and stateless JWT sessions carried in the `auth-token` cookie
//! - Profile editing with optional avatar upload
//! - A content gate that previews member-exclusive posts for anonymous readers
//! - JSON endpoints for posts, categories and authors
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between the server and any client
//!   - Content entities (posts, authors, categories, media)
//!   - Identity views and roles
//!   - The content gate (`render_view`)
//!   - Configuration and shared error types
//!
//! - **`backend`** - Server-side code (only compiled with the `ssr` feature)
//!   - Axum HTTP server, routes and the session edge filter
//!   - Credential hashing, token service and the auth gateway
//!   - The content repository seam (Cosmic HTTP client, in-memory store)
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - enables the `backend` module and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use jazz_chronicle::backend::server::init::create_app;
//! use jazz_chronicle::shared::AppConfig;
//!
//! # async fn example(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for signup and profile field validation
//! - `backend::error::BackendError` for everything a handler can answer with
//! - `backend::repository::RepositoryError` for failures of the external store

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
