/**
 * Content Handlers
 *
 * Each handler reads from the content repository and maps records to
 * summaries. A missing slug is a 404. Store failures surface as 500 with
 * the generic message.
 */

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::backend::auth::gateway::AuthGateway;
use crate::backend::content::types::{AuthorPage, CategoryPage, HomePage, PostPage};
use crate::backend::error::BackendError;
use crate::backend::middleware::MaybeUser;
use crate::backend::repository::ContentRepository;
use crate::shared::content::{Author, Category, Post, PostSummary};
use crate::shared::gate::ContentGate;

fn summaries(posts: &[Post]) -> Vec<PostSummary> {
    posts.iter().map(PostSummary::from).collect()
}

/// GET /api/posts
pub async fn list_posts(
    State(repository): State<Arc<dyn ContentRepository>>,
) -> Result<Json<Vec<PostSummary>>, BackendError> {
    let posts = repository.list_posts().await?;
    Ok(Json(summaries(&posts)))
}

/// GET /api/posts/{slug}
///
/// Exclusive posts are previewed unless the session resolves to an
/// existing member. A token for a deleted member reads as anonymous.
pub async fn get_post(
    State(repository): State<Arc<dyn ContentRepository>>,
    State(gateway): State<Arc<AuthGateway>>,
    State(gate): State<ContentGate>,
    MaybeUser(session): MaybeUser,
    Path(slug): Path<String>,
) -> Result<Json<PostPage>, BackendError> {
    let post = repository
        .find_post(&slug)
        .await?
        .ok_or_else(|| BackendError::not_found("Post not found"))?;

    let viewer = match &session {
        Some(id) => gateway.resolve(id).await?,
        None => None,
    };

    let view = gate.render(&post, viewer.as_ref());
    if view.is_preview() {
        tracing::debug!(slug = %post.slug, "Serving exclusive preview");
    }

    Ok(Json(PostPage {
        post: PostSummary::from(&post),
        hero_image_url: post
            .metadata
            .featured_image
            .as_ref()
            .map(|image| image.sized(1200, 600)),
        view,
    }))
}

/// GET /api/categories
pub async fn list_categories(
    State(repository): State<Arc<dyn ContentRepository>>,
) -> Result<Json<Vec<Category>>, BackendError> {
    Ok(Json(repository.list_categories().await?))
}

/// GET /api/categories/{slug}
pub async fn get_category(
    State(repository): State<Arc<dyn ContentRepository>>,
    Path(slug): Path<String>,
) -> Result<Json<CategoryPage>, BackendError> {
    let category = repository
        .find_category(&slug)
        .await?
        .ok_or_else(|| BackendError::not_found("Category not found"))?;
    let posts = repository.list_posts_by_category(&category.id).await?;

    Ok(Json(CategoryPage {
        category,
        posts: summaries(&posts),
    }))
}

/// GET /api/authors
pub async fn list_authors(
    State(repository): State<Arc<dyn ContentRepository>>,
) -> Result<Json<Vec<Author>>, BackendError> {
    Ok(Json(repository.list_authors().await?))
}

/// GET /api/authors/{slug}
pub async fn get_author(
    State(repository): State<Arc<dyn ContentRepository>>,
    Path(slug): Path<String>,
) -> Result<Json<AuthorPage>, BackendError> {
    let author = repository
        .find_author(&slug)
        .await?
        .ok_or_else(|| BackendError::not_found("Author not found"))?;
    let posts = repository.list_posts_by_author(&author.id).await?;

    Ok(Json(AuthorPage {
        author,
        posts: summaries(&posts),
    }))
}

/// GET /
///
/// The newest post is featured; every other post follows as recent.
pub async fn home(
    State(repository): State<Arc<dyn ContentRepository>>,
) -> Result<Json<HomePage>, BackendError> {
    let posts = repository.list_posts().await?;
    let categories = repository.list_categories().await?;

    let mut summaries = posts.iter().map(PostSummary::from);
    let featured = summaries.next();
    let recent = summaries.collect();

    Ok(Json(HomePage {
        featured,
        recent,
        categories,
    }))
}
