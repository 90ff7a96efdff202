//! Common test utilities and helpers
//!
//! - Test application built on the in-memory store
//! - Content fixtures
//! - Authentication helpers
//! - Custom assertion macros

pub mod app;
pub mod assertions;
pub mod auth_helpers;
pub mod fixtures;

pub use app::*;
pub use auth_helpers::*;
pub use fixtures::*;
