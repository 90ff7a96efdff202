/**
 * Server Configuration
 *
 * This module loads the application configuration from environment
 * variables (optionally seeded from a `.env` file) and builds the content
 * repository it describes.
 *
 * # Variables
 *
 * - `JWT_SECRET` (required)
 * - `COSMIC_BUCKET_SLUG`, `COSMIC_READ_KEY`, `COSMIC_WRITE_KEY`
 * - `COSMIC_API_URL`, `COSMIC_UPLOAD_URL` (default to the public v3 API)
 * - `PREVIEW_LENGTH` (500), `REPOSITORY_TIMEOUT_SECS` (10)
 * - `COOKIE_SECURE` (false), `SERVER_PORT` (3000)
 *
 * Without `COSMIC_BUCKET_SLUG` the server runs on the in-memory store.
 */

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::backend::repository::{
    ContentRepository, CosmicRepository, MemoryRepository, RepositoryError,
};
use crate::shared::config::{AppConfig, ConfigError, CosmicConfig};

/// Load configuration from the process environment
pub fn load_config() -> Result<AppConfig, ConfigError> {
    if dotenv::dotenv().is_ok() {
        tracing::debug!("Loaded environment from .env");
    }
    config_from_lookup(|key| std::env::var(key).ok())
}

/// Build configuration from any key lookup
pub fn config_from_lookup<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    let mut builder = AppConfig::builder()
        .jwt_secret(get("JWT_SECRET").ok_or(ConfigError::MissingValue("JWT_SECRET"))?);

    if let Some(bucket_slug) = get("COSMIC_BUCKET_SLUG") {
        let mut cosmic = CosmicConfig::new(
            bucket_slug,
            get("COSMIC_READ_KEY").unwrap_or_default(),
            get("COSMIC_WRITE_KEY").unwrap_or_default(),
        );
        if let Some(api_url) = get("COSMIC_API_URL") {
            cosmic.api_url = api_url;
        }
        if let Some(upload_url) = get("COSMIC_UPLOAD_URL") {
            cosmic.upload_url = upload_url;
        }
        if cosmic.write_key.is_empty() {
            tracing::warn!("COSMIC_WRITE_KEY not set. Signup and profile updates will fail.");
        }
        builder = builder.cosmic(cosmic);
    }

    if let Some(value) = get("PREVIEW_LENGTH") {
        builder = builder.preview_length(parse("PREVIEW_LENGTH", &value)?);
    }
    if let Some(value) = get("REPOSITORY_TIMEOUT_SECS") {
        builder = builder.repository_timeout(Duration::from_secs(parse(
            "REPOSITORY_TIMEOUT_SECS",
            &value,
        )?));
    }
    if let Some(value) = get("COOKIE_SECURE") {
        builder = builder.cookie_secure(parse_flag("COOKIE_SECURE", &value)?);
    }
    if let Some(value) = get("SERVER_PORT") {
        builder = builder.port(parse("SERVER_PORT", &value)?);
    }

    builder.build()
}

/// Content repository described by `config`
pub fn build_repository(config: &AppConfig) -> Result<Arc<dyn ContentRepository>, RepositoryError> {
    match &config.cosmic {
        Some(cosmic) => {
            tracing::info!(bucket = %cosmic.bucket_slug, "Using Cosmic content bucket");
            let repository = CosmicRepository::new(cosmic.clone(), config.repository_timeout)?;
            Ok(Arc::new(repository))
        }
        None => {
            tracing::warn!("COSMIC_BUCKET_SLUG not set. Using the in-memory content store.");
            Ok(Arc::new(MemoryRepository::new()))
        }
    }
}

fn parse<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key,
        message: e.to_string(),
    })
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key,
            message: format!("expected a boolean, got {:?}", other),
        }),
    }
}
