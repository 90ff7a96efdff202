/**
 * Content Entities
 *
 * This module defines the entities served by the hosted content store:
 * posts, authors and categories, plus the stored member record.
 *
 * The store hands every record back as an "object" with a `type` tag and a
 * free-form `metadata` bag. Here that bag is decoded into a closed set of
 * variants (`CosmicObject`), each with a concrete field set, so a record of
 * the wrong shape is a decode error instead of a silently missing field.
 */
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::shared::identity::Role;

/// A stored media file (image) with its CDN url
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Media {
    /// Original file url
    pub url: String,
    /// imgix-backed url that accepts resize parameters
    pub imgix_url: String,
}

impl Media {
    /// imgix url cropped to `width` x `height`
    ///
    /// ```rust
    /// use jazz_chronicle::shared::Media;
    ///
    /// let media = Media {
    ///     url: "https://cdn.example/a.jpg".to_string(),
    ///     imgix_url: "https://imgix.example/a.jpg".to_string(),
    /// };
    /// assert_eq!(
    ///     media.sized(800, 400),
    ///     "https://imgix.example/a.jpg?w=800&h=400&fit=crop&auto=format,compress"
    /// );
    /// ```
    pub fn sized(&self, width: u32, height: u32) -> String {
        format!(
            "{}?w={}&h={}&fit=crop&auto=format,compress",
            self.imgix_url, width, height
        )
    }
}

/// A blog post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub metadata: PostMetadata,
}

/// Post fields stored in the object's metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostMetadata {
    /// Markdown body
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub featured_image: Option<Media>,
    /// Populated when the post is fetched with depth 1, otherwise `None`
    #[serde(default, deserialize_with = "lenient_object")]
    pub author: Option<Author>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub category: Option<Category>,
    /// Comma separated tag list
    #[serde(default)]
    pub tags: Option<String>,
    /// Editorial date, `YYYY-MM-DD`
    #[serde(default)]
    pub published_date: Option<String>,
    /// Visible in full to members only
    #[serde(default)]
    pub exclusive: bool,
}

impl PostMetadata {
    /// Tags split on commas, trimmed, empties dropped
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Parsed editorial date
    pub fn published_on(&self) -> Option<NaiveDate> {
        self.published_date
            .as_deref()
            .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
    }
}

/// A writer profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub metadata: AuthorMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthorMetadata {
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub photo: Option<Media>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub specialties: Option<String>,
}

/// A post category (genre, era, ...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub metadata: CategoryMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryMetadata {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Badge colour, any CSS colour value
    #[serde(default)]
    pub color: Option<String>,
}

/// A member record as stored
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserObject {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub metadata: UserMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserMetadata {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default, deserialize_with = "lenient_object")]
    pub avatar: Option<Media>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Every object type the site reads from the store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum CosmicObject {
    #[serde(rename = "users")]
    User(UserObject),
    #[serde(rename = "posts")]
    Post(Post),
    #[serde(rename = "authors")]
    Author(Author),
    #[serde(rename = "categories")]
    Category(Category),
}

impl CosmicObject {
    /// The store's type slug for this variant
    pub fn type_slug(&self) -> &'static str {
        match self {
            Self::User(_) => "users",
            Self::Post(_) => "posts",
            Self::Author(_) => "authors",
            Self::Category(_) => "categories",
        }
    }
}

/// Post without its body, for listings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostSummary {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub exclusive: bool,
    pub featured_image: Option<Media>,
    /// Featured image resized for cards
    pub card_image_url: Option<String>,
    pub author: Option<Author>,
    pub category: Option<Category>,
    pub published_date: Option<String>,
    /// Editorial date as shown on cards, `Mar 1, 2024`
    pub published_label: Option<String>,
    pub tags: Vec<String>,
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        let metadata = &post.metadata;
        Self {
            id: post.id.clone(),
            slug: post.slug.clone(),
            title: post.title.clone(),
            excerpt: metadata.excerpt.clone(),
            exclusive: metadata.exclusive,
            featured_image: metadata.featured_image.clone(),
            card_image_url: metadata.featured_image.as_ref().map(|image| image.sized(800, 400)),
            author: metadata.author.clone(),
            category: metadata.category.clone(),
            published_date: metadata.published_date.clone(),
            published_label: metadata
                .published_on()
                .map(|date| date.format("%b %-d, %Y").to_string()),
            tags: metadata.tag_list(),
        }
    }
}

/// Decode `T` when the value has its shape, otherwise `None`
///
/// Related objects come back as bare id strings unless fetched with depth,
/// and empty file fields come back as `null` or `""`.
fn lenient_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
