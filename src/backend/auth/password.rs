/**
 * Credential Hasher
 *
 * One-way password hashing with bcrypt. Every hash embeds its own random
 * salt and work factor, so hashing the same password twice gives two
 * different strings that both verify.
 *
 * bcrypt ignores input past 72 bytes and stops at a NUL byte. Passwords
 * bcrypt cannot read in full are never hashed and never verify.
 *
 * bcrypt at cost 12 takes a few hundred milliseconds. Request handlers go
 * through `spawn_hash` and `spawn_verify`, which run on tokio's blocking
 * pool.
 */

use crate::backend::error::BackendError;
use crate::shared::config::{DEFAULT_PASSWORD_COST, MIN_PASSWORD_COST};
use crate::shared::validation::{fits_bcrypt, MAX_PASSWORD_BYTES};

/// A bcrypt hash string (`$2b$12$...`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Wrap a hash loaded from storage
    pub fn from_stored(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// bcrypt hasher with a fixed work factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            cost: DEFAULT_PASSWORD_COST,
        }
    }
}

impl PasswordHasher {
    /// Hasher with a custom work factor, clamped to bcrypt's minimum
    pub fn with_cost(cost: u32) -> Self {
        Self {
            cost: cost.max(MIN_PASSWORD_COST),
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password with a fresh salt
    pub fn hash(&self, password: &str) -> Result<HashedPassword, BackendError> {
        if !fits_bcrypt(password) {
            return Err(BackendError::validation(
                "password",
                format!(
                    "Password must be at most {} bytes and contain no NUL characters",
                    MAX_PASSWORD_BYTES
                ),
            ));
        }
        bcrypt::hash(password, self.cost)
            .map(HashedPassword)
            .map_err(|e| BackendError::internal(format!("password hashing failed: {}", e)))
    }

    /// Check a password against a stored hash
    ///
    /// A wrong password is `Ok(false)`. Only a stored hash that is not a
    /// valid bcrypt string is an error.
    pub fn verify(&self, password: &str, hash: &HashedPassword) -> Result<bool, BackendError> {
        if !fits_bcrypt(password) {
            return Ok(false);
        }
        bcrypt::verify(password, hash.as_str())
            .map_err(|e| BackendError::internal(format!("stored password hash is malformed: {}", e)))
    }

    /// [`hash`](Self::hash) on the blocking pool
    pub async fn spawn_hash(&self, password: String) -> Result<HashedPassword, BackendError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| BackendError::internal(format!("spawn_blocking failed: {}", e)))?
    }

    /// [`verify`](Self::verify) on the blocking pool
    pub async fn spawn_verify(
        &self,
        password: String,
        hash: HashedPassword,
    ) -> Result<bool, BackendError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| BackendError::internal(format!("spawn_blocking failed: {}", e)))?
    }
}
