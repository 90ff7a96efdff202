/**
 * Member Identity
 *
 * This module defines the member identity as the auth layer sees it, and
 * the public view that is safe to return to clients.
 *
 * `Identity` carries the bcrypt password hash and only lives for the
 * duration of a request. Anything that leaves the server goes through
 * `IdentityView`, which has no hash field at all.
 */
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::content::{Media, UserMetadata, UserObject};

/// Opaque member id assigned by the content store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityId(String);

impl IdentityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Member role
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// A member, including the password hash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: IdentityId,
    pub name: String,
    /// Normalized (trimmed, lowercase)
    pub email: String,
    /// bcrypt hash, never the plaintext
    pub password_hash: String,
    pub role: Role,
    pub bio: Option<String>,
    pub avatar: Option<Media>,
}

impl Identity {
    /// Public view without the password hash
    pub fn view(&self) -> IdentityView {
        IdentityView {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            avatar: self.avatar.as_ref().map(|avatar| avatar.imgix_url.clone()),
            bio: self.bio.clone(),
        }
    }

    /// Metadata bag written back to the store
    pub fn to_metadata(&self) -> UserMetadata {
        UserMetadata {
            name: self.name.clone(),
            email: self.email.clone(),
            password_hash: self.password_hash.clone(),
            role: self.role,
            avatar: self.avatar.clone(),
            bio: self.bio.clone(),
        }
    }
}

impl From<UserObject> for Identity {
    fn from(object: UserObject) -> Self {
        let UserMetadata {
            name,
            email,
            password_hash,
            role,
            avatar,
            bio,
        } = object.metadata;
        Self {
            id: IdentityId::new(object.id),
            name,
            email,
            password_hash,
            role,
            bio,
            avatar,
        }
    }
}

/// Member as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityView {
    pub id: IdentityId,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// imgix url of the avatar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Trim and lowercase an email so lookups are case-insensitive
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
