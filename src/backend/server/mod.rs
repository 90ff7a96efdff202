//! Server Module
//!
//! Server setup: configuration loading, application state and router
//! assembly.
//!
//! # Example
//!
//! ```rust,no_run
//! use jazz_chronicle::backend::server::{config::load_config, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! let app = create_app(config).await?;
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use init::{create_app, create_app_with, StartupError};
pub use state::AppState;
