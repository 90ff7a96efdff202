//! Content Repository Module
//!
//! Every durable record of the site (members, posts, authors, categories,
//! uploaded images) lives in an external hosted object store. This module
//! is the seam between the server and that store.
//!
//! # Module Structure
//!
//! ```text
//! repository/
//! ├── mod.rs      - ContentRepository trait, input types, RepositoryError
//! ├── cosmic.rs   - HTTP client for the hosted Cosmic bucket
//! └── memory.rs   - In-memory store for development and tests
//! ```
//!
//! # Contract
//!
//! - A missing record is `Ok(None)` or an empty `Vec`, never an error.
//! - Any other failure (timeout, transport, unexpected status, bad payload)
//!   is a [`RepositoryError`]. The repository never retries.
//! - The store offers no compare-and-swap, so uniqueness checks made by
//!   callers are check-then-act and can race.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use crate::shared::content::{Author, Category, Media, Post};
use crate::shared::identity::{Identity, IdentityId, Role};

/// Hosted Cosmic bucket client
pub mod cosmic;

/// In-memory store
pub mod memory;

pub use cosmic::CosmicRepository;
pub use memory::MemoryRepository;

/// Failure talking to the content store
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The call exceeded the configured timeout
    #[error("content store request timed out")]
    Timeout,

    /// Connection or protocol failure
    #[error("content store unreachable: {0}")]
    Transport(String),

    /// The store answered with an unexpected status
    #[error("content store returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The payload did not have the expected shape
    #[error("unexpected content store payload: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// A member to be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub bio: Option<String>,
}

/// A file to store in the media library
#[derive(Debug, Clone)]
pub struct MediaUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
    /// Media library folder, e.g. `avatars`
    pub folder: String,
}

/// Operations the site needs from the content store
#[async_trait]
pub trait ContentRepository: Send + Sync {
    // Members

    /// Look up a member by (already normalized) email
    async fn find_user_by_email(&self, email: &str) -> Result<Option<Identity>>;

    async fn find_user_by_id(&self, id: &IdentityId) -> Result<Option<Identity>>;

    async fn create_user(&self, user: NewUser) -> Result<Identity>;

    /// Overwrite a member record, returning the stored result
    async fn update_user(&self, identity: &Identity) -> Result<Identity>;

    async fn upload_media(&self, upload: MediaUpload) -> Result<Media>;

    // Content

    /// All posts, newest first
    async fn list_posts(&self) -> Result<Vec<Post>>;

    async fn find_post(&self, slug: &str) -> Result<Option<Post>>;

    async fn list_posts_by_category(&self, category_id: &str) -> Result<Vec<Post>>;

    async fn list_posts_by_author(&self, author_id: &str) -> Result<Vec<Post>>;

    async fn list_categories(&self) -> Result<Vec<Category>>;

    async fn find_category(&self, slug: &str) -> Result<Option<Category>>;

    async fn list_authors(&self) -> Result<Vec<Author>>;

    async fn find_author(&self, slug: &str) -> Result<Option<Author>>;
}
