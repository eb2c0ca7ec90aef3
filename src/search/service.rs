use crate::search::error::SearchError;
use crate::search::models::{HealthStatus, ResultEnvelope, SearchOptions};
use async_trait::async_trait;

/// Remote search backend as seen by the session controller.
///
/// Implementations must be cheap to share: the controller holds one behind an
/// `Arc` and calls it from spawned tasks.
#[async_trait]
pub trait SearchService: Send + Sync {
    async fn search(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<ResultEnvelope, SearchError>;

    async fn health(&self) -> Result<HealthStatus, SearchError>;
}
