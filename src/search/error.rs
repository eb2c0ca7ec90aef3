//! Errors raised while talking to the search backend.

use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Connection, DNS, or TLS failure.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The backend answered with a non-2xx status.
    #[error("search backend {endpoint} returned {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// The body could not be decoded into the expected shape.
    #[error("failed to decode response from {endpoint}: {reason}")]
    MalformedResponse { endpoint: String, reason: String },
    /// The call did not finish within the configured bound.
    #[error("search timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
    #[error("failed to build HTTP client: {0}")]
    Client(String),
    /// The search call panicked or was cancelled before it answered.
    #[error("search task failed: {0}")]
    TaskFailed(String),
}

impl SearchError {
    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::Http { .. } => "http",
            SearchError::Status { .. } => "status",
            SearchError::MalformedResponse { .. } => "malformed",
            SearchError::Timeout(_) => "timeout",
            SearchError::Client(_) => "client",
            SearchError::TaskFailed(_) => "task",
        }
    }
}
