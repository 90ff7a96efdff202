/**
 * Content Routes
 *
 * Public, read-only routes for the magazine. Handlers live in
 * `backend::content`.
 */

use axum::{routing::get, Router};

use crate::backend::content::{
    get_author, get_category, get_post, home, list_authors, list_categories, list_posts,
};
use crate::backend::server::state::AppState;

/// Add the content routes to `router`
pub fn configure_content_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(home))
        .route("/api/posts", get(list_posts))
        .route("/api/posts/{slug}", get(get_post))
        .route("/api/categories", get(list_categories))
        .route("/api/categories/{slug}", get(get_category))
        .route("/api/authors", get(list_authors))
        .route("/api/authors/{slug}", get(get_author))
}
