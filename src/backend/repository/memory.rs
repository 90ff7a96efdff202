//! In-memory implementation of the ContentRepository trait.
//!
//! Used when no Cosmic bucket is configured and throughout the tests. It
//! follows the same contract as the hosted store (missing records are
//! `None`, posts come back newest first) but keeps everything in memory.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::backend::repository::{
    ContentRepository, MediaUpload, NewUser, RepositoryError, Result,
};
use crate::shared::content::{Author, Category, Media, Post};
use crate::shared::identity::{Identity, IdentityId};

/// In-memory content store
#[derive(Default)]
pub struct MemoryRepository {
    inner: RwLock<MemoryInner>,
    /// Make every call fail with `Transport`
    unavailable: AtomicBool,
    /// Make `upload_media` fail with `Transport`
    failing_uploads: AtomicBool,
    uploads: AtomicUsize,
}

#[derive(Default)]
struct MemoryInner {
    users: HashMap<IdentityId, Identity>,
    posts: Vec<Post>,
    authors: Vec<Author>,
    categories: Vec<Category>,
}

impl MemoryRepository {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_post(&self, post: Post) {
        if let Ok(mut inner) = self.inner.write() {
            inner.posts.retain(|existing| existing.slug != post.slug);
            inner.posts.push(post);
        }
    }

    pub fn insert_author(&self, author: Author) {
        if let Ok(mut inner) = self.inner.write() {
            inner.authors.push(author);
        }
    }

    pub fn insert_category(&self, category: Category) {
        if let Ok(mut inner) = self.inner.write() {
            inner.categories.push(category);
        }
    }

    /// Number of stored members
    pub fn user_count(&self) -> usize {
        self.inner.read().map(|inner| inner.users.len()).unwrap_or(0)
    }

    /// Number of successful media uploads
    pub fn upload_count(&self) -> usize {
        self.uploads.load(Ordering::SeqCst)
    }

    /// Simulate the store being down
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Simulate the media library rejecting uploads
    pub fn set_failing_uploads(&self, failing: bool) {
        self.failing_uploads.store(failing, Ordering::SeqCst);
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, MemoryInner>> {
        self.check_available()?;
        self.inner
            .read()
            .map_err(|_| RepositoryError::Transport("memory store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, MemoryInner>> {
        self.check_available()?;
        self.inner
            .write()
            .map_err(|_| RepositoryError::Transport("memory store lock poisoned".to_string()))
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(RepositoryError::Transport("memory store marked unavailable".to_string()));
        }
        Ok(())
    }

    fn newest_first(mut posts: Vec<Post>) -> Vec<Post> {
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
    }
}

#[async_trait]
impl ContentRepository for MemoryRepository {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<Identity>> {
        Ok(self
            .read()?
            .users
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn find_user_by_id(&self, id: &IdentityId) -> Result<Option<Identity>> {
        Ok(self.read()?.users.get(id).cloned())
    }

    async fn create_user(&self, user: NewUser) -> Result<Identity> {
        let identity = Identity {
            id: IdentityId::new(uuid::Uuid::new_v4().simple().to_string()),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
            bio: user.bio,
            avatar: None,
        };
        self.write()?
            .users
            .insert(identity.id.clone(), identity.clone());
        Ok(identity)
    }

    async fn update_user(&self, identity: &Identity) -> Result<Identity> {
        let mut inner = self.write()?;
        match inner.users.get_mut(&identity.id) {
            Some(stored) => {
                *stored = identity.clone();
                Ok(identity.clone())
            }
            None => Err(RepositoryError::Status {
                status: 404,
                message: format!("no user {}", identity.id),
            }),
        }
    }

    async fn upload_media(&self, upload: MediaUpload) -> Result<Media> {
        self.check_available()?;
        if self.failing_uploads.load(Ordering::SeqCst) {
            return Err(RepositoryError::Transport("media upload rejected".to_string()));
        }
        let n = self.uploads.fetch_add(1, Ordering::SeqCst);
        let path = format!("{}/{}-{}", upload.folder, n, upload.file_name);
        Ok(Media {
            url: format!("memory://media/{}", path),
            imgix_url: format!("memory://imgix/{}", path),
        })
    }

    async fn list_posts(&self) -> Result<Vec<Post>> {
        Ok(Self::newest_first(self.read()?.posts.clone()))
    }

    async fn find_post(&self, slug: &str) -> Result<Option<Post>> {
        Ok(self.read()?.posts.iter().find(|post| post.slug == slug).cloned())
    }

    async fn list_posts_by_category(&self, category_id: &str) -> Result<Vec<Post>> {
        let posts = self
            .read()?
            .posts
            .iter()
            .filter(|post| {
                post.metadata
                    .category
                    .as_ref()
                    .is_some_and(|category| category.id == category_id)
            })
            .cloned()
            .collect();
        Ok(Self::newest_first(posts))
    }

    async fn list_posts_by_author(&self, author_id: &str) -> Result<Vec<Post>> {
        let posts = self
            .read()?
            .posts
            .iter()
            .filter(|post| {
                post.metadata
                    .author
                    .as_ref()
                    .is_some_and(|author| author.id == author_id)
            })
            .cloned()
            .collect();
        Ok(Self::newest_first(posts))
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(self.read()?.categories.clone())
    }

    async fn find_category(&self, slug: &str) -> Result<Option<Category>> {
        Ok(self
            .read()?
            .categories
            .iter()
            .find(|category| category.slug == slug)
            .cloned())
    }

    async fn list_authors(&self) -> Result<Vec<Author>> {
        Ok(self.read()?.authors.clone())
    }

    async fn find_author(&self, slug: &str) -> Result<Option<Author>> {
        Ok(self
            .read()?
            .authors
            .iter()
            .find(|author| author.slug == slug)
            .cloned())
    }
}
