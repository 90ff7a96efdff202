/**
 * Auth Gateway
 *
 * This module orchestrates the membership flows on top of the credential
 * hasher, the token service and the content repository:
 *
 * - `signup` - validate, reject a taken email, hash, store, issue a token
 * - `login` - look up, verify the password, issue a token
 * - `verify_session` - token to identity, or anonymous
 * - `update_profile` - change name/email/bio/avatar of the session's member
 *
 * # Consistency
 *
 * The email uniqueness checks in `signup` and `update_profile` read and
 * then write. Two concurrent requests for the same email can both pass the
 * check. The store has no unique index the gateway could lean on.
 */

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::backend::auth::password::{HashedPassword, PasswordHasher};
use crate::backend::auth::sessions::TokenService;
use crate::backend::error::BackendError;
use crate::backend::repository::{ContentRepository, MediaUpload, NewUser};
use crate::shared::identity::{normalize_email, Identity, IdentityId, IdentityView, Role};
use crate::shared::validation::{validate_profile, validate_signup};

/// Same message for unknown email and wrong password
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Media library folder for avatars
pub const AVATAR_FOLDER: &str = "avatars";

/// A signed-in member and their token
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: IdentityView,
    pub token: String,
}

/// New member details
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub bio: Option<String>,
}

/// Email and password presented at login
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Requested profile change
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    /// New avatar; an empty file counts as no avatar
    pub avatar: Option<MediaUpload>,
}

/// Membership flows
pub struct AuthGateway {
    repository: Arc<dyn ContentRepository>,
    hasher: PasswordHasher,
    tokens: TokenService,
    /// Hash checked against when the email is unknown, so both login
    /// failures cost one bcrypt verification
    decoy: OnceCell<Option<HashedPassword>>,
}

impl AuthGateway {
    pub fn new(
        repository: Arc<dyn ContentRepository>,
        hasher: PasswordHasher,
        tokens: TokenService,
    ) -> Self {
        Self {
            repository,
            hasher,
            tokens,
            decoy: OnceCell::new(),
        }
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    /// Register a new member and sign them in
    pub async fn signup(&self, registration: Registration) -> Result<AuthSession, BackendError> {
        let fields = validate_signup(
            &registration.name,
            &registration.email,
            &registration.password,
        )?;

        if self.repository.find_user_by_email(&fields.email).await?.is_some() {
            tracing::info!("Signup rejected, email already registered");
            return Err(BackendError::conflict("User already exists with this email"));
        }

        let password_hash = self.hasher.spawn_hash(registration.password).await?;

        let identity = self
            .repository
            .create_user(NewUser {
                name: fields.name,
                email: fields.email,
                password_hash: password_hash.into_string(),
                role: Role::User,
                bio: non_blank(registration.bio),
            })
            .await?;

        let token = self.tokens.issue(&identity.id)?;
        tracing::info!(user_id = %identity.id, "Member created");

        Ok(AuthSession {
            user: identity.view(),
            token,
        })
    }

    /// Check credentials and sign the member in
    pub async fn login(&self, credentials: Credentials) -> Result<AuthSession, BackendError> {
        let email = normalize_email(&credentials.email);

        let identity = match self.repository.find_user_by_email(&email).await? {
            Some(identity) => identity,
            None => {
                self.burn_verification(credentials.password).await;
                tracing::info!("Login failed");
                return Err(BackendError::unauthorized(INVALID_CREDENTIALS));
            }
        };

        let stored = HashedPassword::from_stored(identity.password_hash.clone());
        let valid = match self.hasher.spawn_verify(credentials.password, stored).await {
            Ok(valid) => valid,
            Err(e) => {
                tracing::error!(user_id = %identity.id, "{}", e);
                false
            }
        };

        if !valid {
            tracing::info!("Login failed");
            return Err(BackendError::unauthorized(INVALID_CREDENTIALS));
        }

        let token = self.tokens.issue(&identity.id)?;
        tracing::info!(user_id = %identity.id, "Member logged in");

        Ok(AuthSession {
            user: identity.view(),
            token,
        })
    }

    /// Resolve a token to the member it belongs to
    ///
    /// `Ok(None)` when the token is invalid or its member no longer exists.
    pub async fn verify_session(&self, token: &str) -> Result<Option<IdentityView>, BackendError> {
        match self.tokens.verify(token) {
            Some(id) => self.resolve(&id).await,
            None => Ok(None),
        }
    }

    /// Member view for an id already taken from a verified token
    pub async fn resolve(&self, id: &IdentityId) -> Result<Option<IdentityView>, BackendError> {
        Ok(self
            .repository
            .find_user_by_id(id)
            .await?
            .map(|identity| identity.view()))
    }

    /// Apply a profile change for the session's member
    ///
    /// Password hash and role are carried over untouched. If an avatar is
    /// given it is uploaded first and a failed upload aborts the update.
    pub async fn update_profile(
        &self,
        session: Option<&IdentityId>,
        update: ProfileUpdate,
    ) -> Result<IdentityView, BackendError> {
        let id = session.ok_or_else(|| BackendError::unauthorized("Unauthorized"))?;

        let current = self
            .repository
            .find_user_by_id(id)
            .await?
            .ok_or_else(|| BackendError::not_found("User not found"))?;

        let fields = validate_profile(&update.name, &update.email)?;

        if fields.email != current.email {
            if let Some(owner) = self.repository.find_user_by_email(&fields.email).await? {
                if owner.id != current.id {
                    return Err(BackendError::conflict("Email already in use"));
                }
            }
        }

        let avatar = match update.avatar.filter(|upload| !upload.bytes.is_empty()) {
            Some(upload) => match self.repository.upload_media(upload).await {
                Ok(media) => Some(media),
                Err(e) => {
                    tracing::error!(user_id = %current.id, "Avatar upload failed: {}", e);
                    return Err(e.into());
                }
            },
            None => current.avatar.clone(),
        };

        let updated = Identity {
            id: current.id.clone(),
            name: fields.name,
            email: fields.email,
            password_hash: current.password_hash.clone(),
            role: current.role,
            bio: non_blank(update.bio),
            avatar,
        };

        let stored = self.repository.update_user(&updated).await?;
        tracing::info!(user_id = %stored.id, "Profile updated");
        Ok(stored.view())
    }

    async fn burn_verification(&self, password: String) {
        let decoy = self
            .decoy
            .get_or_init(|| async {
                self.hasher
                    .spawn_hash("decoy-password".to_string())
                    .await
                    .ok()
            })
            .await;
        if let Some(decoy) = decoy {
            let _ = self.hasher.spawn_verify(password, decoy.clone()).await;
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
