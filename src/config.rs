//! Process-wide search configuration.
//!
//! Built once at startup from CLI flags and the environment, then handed to
//! the services by value. Nothing reads the environment after that.

use crate::search::models::{SafeSearch, SearchOptions};
use std::time::Duration;

/// Default bound on a single search call, matching the backend's own timeout.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("backend url is empty")]
    MissingBackendUrl,
    #[error("backend url must start with http:// or https://, got {0}")]
    InvalidBackendUrl(String),
    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub backend_base_url: String,
    pub request_timeout: Duration,
    pub safe_search: SafeSearch,
}

impl SearchConfig {
    pub fn new(backend_base_url: &str, request_timeout: Duration) -> Result<Self, ConfigError> {
        let url = backend_base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::MissingBackendUrl);
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidBackendUrl(url.to_string()));
        }
        if request_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Self {
            backend_base_url: url.trim_end_matches('/').to_string(),
            request_timeout,
            safe_search: SafeSearch::Moderate,
        })
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            safe_search: self.safe_search,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            backend_base_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            safe_search: SafeSearch::Moderate,
        }
    }
}
