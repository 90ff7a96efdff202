/**
 * Content Response Types
 */

use serde::{Deserialize, Serialize};

use crate::shared::content::{Author, Category, PostSummary};
use crate::shared::gate::ContentView;

/// A single post as the reader may see it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostPage {
    pub post: PostSummary,
    /// Featured image sized for the article header
    pub hero_image_url: Option<String>,
    pub view: ContentView,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryPage {
    pub category: Category,
    pub posts: Vec<PostSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthorPage {
    pub author: Author,
    pub posts: Vec<PostSummary>,
}

/// Home page data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HomePage {
    pub featured: Option<PostSummary>,
    pub recent: Vec<PostSummary>,
    pub categories: Vec<Category>,
}
