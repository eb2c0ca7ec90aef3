//! HTTP client for the CyberSearch backend.
//!
//! Wraps a `reqwest::Client` bound to the configured base url. Any non-2xx
//! status, transport failure, or undecodable body surfaces as a
//! [`SearchError`]; deciding what to show the user is left to the caller.

use crate::config::SearchConfig;
use crate::search::error::SearchError;
use crate::search::models::{HealthStatus, ResultEnvelope, SearchOptions, SearchRequest};
use crate::search::service::SearchService;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const SEARCH_PATH: &str = "/api/search";
const HEALTH_PATH: &str = "/api/search/health";

#[derive(Debug, Clone)]
pub struct HttpSearchService {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpSearchService {
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| SearchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.backend_base_url.trim_end_matches('/').to_string(),
            timeout: config.request_timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        endpoint: &str,
    ) -> Result<T, SearchError> {
        let response = request.send().await.map_err(|e| self.transport_error(e, endpoint))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e, endpoint))?;

        serde_json::from_str(&body).map_err(|e| SearchError::MalformedResponse {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })
    }

    fn transport_error(&self, error: reqwest::Error, endpoint: &str) -> SearchError {
        if error.is_timeout() {
            SearchError::Timeout(self.timeout)
        } else {
            SearchError::Http {
                endpoint: endpoint.to_string(),
                source: error,
            }
        }
    }
}

#[async_trait]
impl SearchService for HttpSearchService {
    async fn search(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<ResultEnvelope, SearchError> {
        let endpoint = self.endpoint(SEARCH_PATH);
        debug!(safe_search = %options.safe_search, "posting search request");

        let request = self
            .client
            .post(&endpoint)
            .json(&SearchRequest::new(query, options));
        self.send(request, &endpoint).await
    }

    async fn health(&self) -> Result<HealthStatus, SearchError> {
        let endpoint = self.endpoint(HEALTH_PATH);
        self.send(self.client.get(&endpoint), &endpoint).await
    }
}
