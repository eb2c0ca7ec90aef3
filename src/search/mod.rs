pub mod dataset;
pub mod error;
pub mod format;
pub mod http_client;
pub mod models;
pub mod offline;
pub mod service;

#[cfg(test)]
mod http_client_test;

pub use dataset::{canned_results, fallback_results};
pub use error::SearchError;
pub use format::format_search_result;
pub use http_client::HttpSearchService;
pub use models::{HealthStatus, ResultEnvelope, SafeSearch, SearchOptions, SearchRequest, SearchResult};
pub use offline::OfflineSearchService;
pub use service::SearchService;
