//! Runtime configuration.
//!
//! The only setting is where the remote catalogue lives. It defaults to the
//! public test service and can be overridden with `PERFORMER_API_BASE_URL`.

use reqwest::Url;

use crate::framework::ConfigError;

/// Base URL of the public catalogue service.
pub const DEFAULT_BASE_URL: &str = "https://boolean-spec-frontend.vercel.app/freetestapi";

/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "PERFORMER_API_BASE_URL";

/// Settings needed to build a [`CatalogSystem`](super::CatalogSystem).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub base_url: Url,
}

impl CatalogConfig {
    /// Parses `base_url`; collection paths are appended to it as-is.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }
        Ok(Self { base_url })
    }

    /// Reads [`BASE_URL_ENV`], falling back to [`DEFAULT_BASE_URL`] when unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }
}
