//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! - **`router`** - Router assembly, middleware layers, fallback
//! - **`api_routes`** - Auth and profile endpoints
//! - **`content_routes`** - Posts, categories, authors, home
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs            - Module exports and documentation
//! ├── router.rs         - Main router creation
//! ├── api_routes.rs     - Auth and profile routes
//! └── content_routes.rs - Content routes
//! ```

/// Main router creation
pub mod router;

/// Auth and profile routes
pub mod api_routes;

/// Content routes
pub mod content_routes;

pub use router::create_router;
