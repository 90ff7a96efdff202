//! Content Module
//!
//! Read-only endpoints for the magazine: posts, categories, authors and the
//! home page. All of them are public. Post bodies go through the
//! [`ContentGate`](crate::shared::gate::ContentGate), so exclusive posts
//! are shown in full only to signed-in members.
//!
//! # Endpoints
//!
//! - `GET /` - featured post, recent posts, categories
//! - `GET /api/posts` and `GET /api/posts/{slug}`
//! - `GET /api/categories` and `GET /api/categories/{slug}`
//! - `GET /api/authors` and `GET /api/authors/{slug}`

/// Response types
pub mod types;

/// HTTP handlers
pub mod handlers;

pub use handlers::{
    get_author, get_category, get_post, home, list_authors, list_categories, list_posts,
};
pub use types::{AuthorPage, CategoryPage, HomePage, PostPage};
