/**
 * Cosmic Bucket Client
 *
 * This module implements `ContentRepository` against the Cosmic REST API.
 *
 * # Requests
 *
 * - Reads: `GET {api}/buckets/{bucket}/objects` with a JSON `query`, the
 *   bucket `read_key`, and optional `depth`, `props`, `sort`, `limit`.
 *   A 404 means "nothing matched" and becomes `None` / an empty list.
 * - Writes: `POST {api}/buckets/{bucket}/objects` and
 *   `PATCH {api}/buckets/{bucket}/objects/{id}`, authorized with the
 *   bucket write key as a bearer token.
 * - Media: `POST {upload}/buckets/{bucket}/media`, multipart with the file
 *   in `media` and the target `folder`.
 *
 * # Schema
 *
 * Posts are listed newest first by `created_at`, projected with both
 * `created_at` and `published_at`, and filtered by category through the
 * category object id in `metadata.category`.
 *
 * Every call is bounded by the client timeout; a timeout surfaces as
 * `RepositoryError::Timeout`.
 */

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{multipart, Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::backend::repository::{
    ContentRepository, MediaUpload, NewUser, RepositoryError, Result,
};
use crate::shared::config::CosmicConfig;
use crate::shared::content::{Author, Category, CosmicObject, Media, Post, UserMetadata, UserObject};
use crate::shared::identity::{Identity, IdentityId};

/// Projection used for post listings
const POST_PROPS: &str = "id,slug,title,type,metadata,created_at,published_at";
/// Projection used for authors and categories
const ENTITY_PROPS: &str = "id,slug,title,type,metadata";
const NEWEST_FIRST: &str = "-created_at";

/// Client for one Cosmic bucket
#[derive(Clone)]
pub struct CosmicRepository {
    client: Client,
    config: CosmicConfig,
}

/// Optional read parameters
#[derive(Debug, Default, Clone, Copy)]
struct FindOptions<'a> {
    depth: Option<u8>,
    props: Option<&'a str>,
    sort: Option<&'a str>,
    limit: Option<u32>,
}

#[derive(Deserialize)]
struct ObjectsResponse {
    #[serde(default)]
    objects: Vec<CosmicObject>,
}

#[derive(Deserialize)]
struct ObjectResponse {
    object: CosmicObject,
}

#[derive(Deserialize)]
struct MediaResponse {
    media: Media,
}

/// Pull one variant out of a decoded object
trait FromObject: Sized {
    const TYPE: &'static str;
    fn from_object(object: CosmicObject) -> Option<Self>;
}

impl FromObject for Post {
    const TYPE: &'static str = "posts";
    fn from_object(object: CosmicObject) -> Option<Self> {
        match object {
            CosmicObject::Post(post) => Some(post),
            _ => None,
        }
    }
}

impl FromObject for Author {
    const TYPE: &'static str = "authors";
    fn from_object(object: CosmicObject) -> Option<Self> {
        match object {
            CosmicObject::Author(author) => Some(author),
            _ => None,
        }
    }
}

impl FromObject for Category {
    const TYPE: &'static str = "categories";
    fn from_object(object: CosmicObject) -> Option<Self> {
        match object {
            CosmicObject::Category(category) => Some(category),
            _ => None,
        }
    }
}

impl FromObject for UserObject {
    const TYPE: &'static str = "users";
    fn from_object(object: CosmicObject) -> Option<Self> {
        match object {
            CosmicObject::User(user) => Some(user),
            _ => None,
        }
    }
}

fn expect_type<T: FromObject>(object: CosmicObject) -> Result<T> {
    let found = object.type_slug();
    T::from_object(object).ok_or_else(|| {
        RepositoryError::Decode(format!("expected {} object, got {}", T::TYPE, found))
    })
}

impl CosmicRepository {
    /// Build a client whose every request is bounded by `timeout`
    pub fn new(config: CosmicConfig, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RepositoryError::Transport(e.to_string()))?;
        Ok(Self { client, config })
    }

    fn objects_url(&self) -> String {
        format!(
            "{}/buckets/{}/objects",
            self.config.api_url.trim_end_matches('/'),
            self.config.bucket_slug
        )
    }

    fn media_url(&self) -> String {
        format!(
            "{}/buckets/{}/media",
            self.config.upload_url.trim_end_matches('/'),
            self.config.bucket_slug
        )
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(&self.config.write_key)
    }

    /// Run a read query; 404 is an empty result
    async fn find<T: FromObject>(&self, query: Value, options: FindOptions<'_>) -> Result<Vec<T>> {
        let mut params: Vec<(&str, String)> = vec![
            ("query", query.to_string()),
            ("read_key", self.config.read_key.clone()),
        ];
        if let Some(depth) = options.depth {
            params.push(("depth", depth.to_string()));
        }
        if let Some(props) = options.props {
            params.push(("props", props.to_string()));
        }
        if let Some(sort) = options.sort {
            params.push(("sort", sort.to_string()));
        }
        if let Some(limit) = options.limit {
            params.push(("limit", limit.to_string()));
        }

        tracing::debug!(query = %query, "cosmic find");
        let response = self.client.get(self.objects_url()).query(&params).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        let response = check_status(response).await?;
        let body: ObjectsResponse = response.json().await?;
        body.objects.into_iter().map(expect_type).collect()
    }

    async fn find_one<T: FromObject>(&self, query: Value, options: FindOptions<'_>) -> Result<Option<T>> {
        let options = FindOptions {
            limit: Some(1),
            ..options
        };
        Ok(self.find(query, options).await?.into_iter().next())
    }

    async fn list_posts_where(&self, query: Value) -> Result<Vec<Post>> {
        self.find(
            query,
            FindOptions {
                depth: Some(1),
                props: Some(POST_PROPS),
                sort: Some(NEWEST_FIRST),
                limit: None,
            },
        )
        .await
    }

    fn entity_options() -> FindOptions<'static> {
        FindOptions {
            props: Some(ENTITY_PROPS),
            ..FindOptions::default()
        }
    }

    async fn decode_user(response: reqwest::Response) -> Result<Identity> {
        let body: ObjectResponse = check_status(response).await?.json().await?;
        Ok(Identity::from(expect_type::<UserObject>(body.object)?))
    }
}

/// Map a non-success status to `RepositoryError::Status`
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(RepositoryError::Status {
        status: status.as_u16(),
        message,
    })
}

fn user_body(name: &str, metadata: &UserMetadata) -> Result<Value> {
    Ok(json!({
        "title": name,
        "type": "users",
        "metadata": serde_json::to_value(metadata)?,
    }))
}

#[async_trait]
impl ContentRepository for CosmicRepository {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<Identity>> {
        let user: Option<UserObject> = self
            .find_one(
                json!({ "type": "users", "metadata.email": email }),
                FindOptions::default(),
            )
            .await?;
        Ok(user.map(Identity::from))
    }

    async fn find_user_by_id(&self, id: &IdentityId) -> Result<Option<Identity>> {
        let user: Option<UserObject> = self
            .find_one(json!({ "type": "users", "id": id.as_str() }), FindOptions::default())
            .await?;
        Ok(user.map(Identity::from))
    }

    async fn create_user(&self, user: NewUser) -> Result<Identity> {
        let metadata = UserMetadata {
            name: user.name.clone(),
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
            avatar: None,
            bio: user.bio,
        };
        let body = user_body(&user.name, &metadata)?;
        let response = self
            .authorized(self.client.post(self.objects_url()))
            .json(&body)
            .send()
            .await?;
        Self::decode_user(response).await
    }

    async fn update_user(&self, identity: &Identity) -> Result<Identity> {
        let mut body = user_body(&identity.name, &identity.to_metadata())?;
        if let Some(fields) = body.as_object_mut() {
            fields.remove("type");
        }
        let url = format!("{}/{}", self.objects_url(), identity.id);
        let response = self
            .authorized(self.client.patch(url))
            .json(&body)
            .send()
            .await?;
        Self::decode_user(response).await
    }

    async fn upload_media(&self, upload: MediaUpload) -> Result<Media> {
        let file_name = upload.file_name;
        let bytes = upload.bytes.to_vec();
        let part = match upload.content_type.as_deref() {
            Some(content_type) => multipart::Part::bytes(bytes.clone())
                .file_name(file_name.clone())
                .mime_str(content_type)
                .unwrap_or_else(|e| {
                    tracing::warn!("Uploading {} without its content type: {}", file_name, e);
                    multipart::Part::bytes(bytes).file_name(file_name)
                }),
            None => multipart::Part::bytes(bytes).file_name(file_name),
        };
        let form = multipart::Form::new()
            .part("media", part)
            .text("folder", upload.folder);

        let response = self
            .authorized(self.client.post(self.media_url()))
            .multipart(form)
            .send()
            .await?;
        let body: MediaResponse = check_status(response).await?.json().await?;
        Ok(body.media)
    }

    async fn list_posts(&self) -> Result<Vec<Post>> {
        self.list_posts_where(json!({ "type": "posts" })).await
    }

    async fn find_post(&self, slug: &str) -> Result<Option<Post>> {
        self.find_one(
            json!({ "type": "posts", "slug": slug }),
            FindOptions {
                depth: Some(1),
                ..FindOptions::default()
            },
        )
        .await
    }

    async fn list_posts_by_category(&self, category_id: &str) -> Result<Vec<Post>> {
        self.list_posts_where(json!({ "type": "posts", "metadata.category": category_id }))
            .await
    }

    async fn list_posts_by_author(&self, author_id: &str) -> Result<Vec<Post>> {
        self.list_posts_where(json!({ "type": "posts", "metadata.author": author_id }))
            .await
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.find(json!({ "type": "categories" }), Self::entity_options())
            .await
    }

    async fn find_category(&self, slug: &str) -> Result<Option<Category>> {
        self.find_one(json!({ "type": "categories", "slug": slug }), FindOptions::default())
            .await
    }

    async fn list_authors(&self) -> Result<Vec<Author>> {
        self.find(json!({ "type": "authors" }), Self::entity_options())
            .await
    }

    async fn find_author(&self, slug: &str) -> Result<Option<Author>> {
        self.find_one(json!({ "type": "authors", "slug": slug }), FindOptions::default())
            .await
    }
}
