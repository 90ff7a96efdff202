/**
 * Session Tokens
 *
 * This module issues and verifies the signed session token (HS256 JWT).
 *
 * A token binds an identity id to an issue time and an expiry seven days
 * later. There is no server-side session table: a token is valid until it
 * expires, and logging out only deletes it on the client.
 *
 * Verification answers `Some(id)` or `None`. Callers never learn whether
 * a token failed on its signature, its expiry or its shape.
 */

use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::backend::error::BackendError;
use crate::shared::config::ConfigError;
use crate::shared::identity::IdentityId;

/// How long an issued token stays valid, in seconds (7 days)
pub const TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Identity id
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Source of the current time
pub trait Clock: Send + Sync {
    /// Seconds since the Unix epoch
    fn now(&self) -> i64;
}

/// Wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// Issues and verifies session tokens
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService").finish_non_exhaustive()
    }
}

impl TokenService {
    /// Create a service signing with `secret`
    ///
    /// An empty secret is refused so the server cannot start without one.
    pub fn new(secret: &str) -> Result<Self, ConfigError> {
        Self::with_clock(secret, Arc::new(SystemClock))
    }

    pub fn with_clock(secret: &str, clock: Arc<dyn Clock>) -> Result<Self, ConfigError> {
        if secret.trim().is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        // expiry is checked against `clock` in `verify`
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "iat", "sub"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            clock,
        })
    }

    /// Issue a token for `id`, valid for [`TOKEN_TTL_SECS`]
    pub fn issue(&self, id: &IdentityId) -> Result<String, BackendError> {
        let now = self.clock.now();
        let claims = Claims {
            sub: id.as_str().to_string(),
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| BackendError::internal(format!("failed to sign session token: {}", e)))
    }

    /// Resolve a token to the identity it was issued for
    ///
    /// `None` for anything that is not a well-formed, correctly signed,
    /// unexpired token.
    pub fn verify(&self, token: &str) -> Option<IdentityId> {
        let claims = match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => data.claims,
            Err(e) => {
                tracing::debug!("rejected session token: {:?}", e.kind());
                return None;
            }
        };

        if claims.exp <= self.clock.now() {
            tracing::debug!("rejected session token: expired");
            return None;
        }
        if claims.sub.is_empty() {
            tracing::debug!("rejected session token: empty subject");
            return None;
        }

        Some(IdentityId::new(claims.sub))
    }
}
