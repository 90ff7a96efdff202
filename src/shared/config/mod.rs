//! Application configuration module
//!
//! Provides configuration types for the application. Values are usually
//! read from the environment by `backend::server::config::load_config`,
//! which feeds them through [`AppConfigBuilder`].

use std::time::Duration;
use thiserror::Error;

use crate::shared::gate::DEFAULT_PREVIEW_LENGTH;

/// Default REST endpoint of the content store
pub const DEFAULT_COSMIC_API_URL: &str = "https://api.cosmicjs.com/v3";
/// Default media upload endpoint of the content store
pub const DEFAULT_COSMIC_UPLOAD_URL: &str = "https://workers.cosmicjs.com/v3";
/// bcrypt work factor for stored passwords
pub const DEFAULT_PASSWORD_COST: u32 = 12;
/// Lowest work factor bcrypt accepts
pub const MIN_PASSWORD_COST: u32 = 4;

/// Connection settings for the hosted content bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CosmicConfig {
    pub bucket_slug: String,
    pub read_key: String,
    pub write_key: String,
    pub api_url: String,
    pub upload_url: String,
}

impl CosmicConfig {
    pub fn new(
        bucket_slug: impl Into<String>,
        read_key: impl Into<String>,
        write_key: impl Into<String>,
    ) -> Self {
        Self {
            bucket_slug: bucket_slug.into(),
            read_key: read_key.into(),
            write_key: write_key.into(),
            api_url: DEFAULT_COSMIC_API_URL.to_string(),
            upload_url: DEFAULT_COSMIC_UPLOAD_URL.to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Content bucket; `None` runs against the in-memory store
    pub cosmic: Option<CosmicConfig>,
    /// HMAC key for session tokens
    pub jwt_secret: String,
    /// Characters of an exclusive post shown to anonymous readers
    pub preview_length: usize,
    /// Upper bound on every call to the content store
    pub repository_timeout: Duration,
    /// Add `Secure` to the session cookie
    pub cookie_secure: bool,
    pub port: u16,
    pub password_cost: u32,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if self.preview_length == 0 {
            return Err(ConfigError::InvalidValue {
                key: "PREVIEW_LENGTH",
                message: "must be greater than zero".to_string(),
            });
        }
        if self.repository_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "REPOSITORY_TIMEOUT_SECS",
                message: "must be greater than zero".to_string(),
            });
        }
        if self.password_cost < MIN_PASSWORD_COST {
            return Err(ConfigError::InvalidValue {
                key: "password_cost",
                message: format!("must be at least {}", MIN_PASSWORD_COST),
            });
        }
        if let Some(cosmic) = &self.cosmic {
            if cosmic.bucket_slug.trim().is_empty() {
                return Err(ConfigError::MissingValue("COSMIC_BUCKET_SLUG"));
            }
            for url in [&cosmic.api_url, &cosmic.upload_url] {
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err(ConfigError::InvalidUrl(url.clone()));
                }
            }
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    cosmic: Option<CosmicConfig>,
    jwt_secret: Option<String>,
    preview_length: Option<usize>,
    repository_timeout: Option<Duration>,
    cookie_secure: bool,
    port: Option<u16>,
    password_cost: Option<u32>,
}

impl AppConfigBuilder {
    pub fn cosmic(mut self, cosmic: CosmicConfig) -> Self {
        self.cosmic = Some(cosmic);
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn preview_length(mut self, length: usize) -> Self {
        self.preview_length = Some(length);
        self
    }

    pub fn repository_timeout(mut self, timeout: Duration) -> Self {
        self.repository_timeout = Some(timeout);
        self
    }

    pub fn cookie_secure(mut self, secure: bool) -> Self {
        self.cookie_secure = secure;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn password_cost(mut self, cost: u32) -> Self {
        self.password_cost = Some(cost);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            cosmic: self.cosmic,
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            preview_length: self.preview_length.unwrap_or(DEFAULT_PREVIEW_LENGTH),
            repository_timeout: self.repository_timeout.unwrap_or(Duration::from_secs(10)),
            cookie_secure: self.cookie_secure,
            port: self.port.unwrap_or(3000),
            password_cost: self.password_cost.unwrap_or(DEFAULT_PASSWORD_COST),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}
