//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the server and its clients. Everything here is plain data plus pure
//! functions, so it compiles without the `ssr` feature.
//!
//! # Overview
//!
//! - `content` - posts, authors, categories and media as served by the store
//! - `identity` - member identity, roles and the hash-free public view
//! - `gate` - the exclusive-content decision
//! - `config` - application configuration
//! - `validation` - signup and profile field checks
//! - `error` - validation errors

/// Content entities (posts, authors, categories)
pub mod content;

/// Member identity types
pub mod identity;

/// Exclusive-content gate
pub mod gate;

/// Member field validation
pub mod validation;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use content::{Author, Category, CosmicObject, Media, Post, PostSummary};
pub use identity::{Identity, IdentityId, IdentityView, Role};
pub use gate::{render_view, ContentView, DEFAULT_PREVIEW_LENGTH};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
