use crate::search::error::SearchError;
use tracing::{debug, info, warn};

/// Receives the lifecycle of every search so degraded results can be told
/// apart from real ones in telemetry. Never affects what the user sees.
///
/// Query text is not passed along: nothing downstream should be able to log it.
pub trait SearchObserver: Send + Sync {
    fn search_started(&self, _generation: u64, _query_len: usize) {}

    fn search_succeeded(&self, _generation: u64, _result_count: usize) {}

    fn search_degraded(&self, _generation: u64, _error: &SearchError) {}

    fn resolution_discarded(&self, _generation: u64, _current: u64) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn search_started(&self, generation: u64, query_len: usize) {
        info!(generation, query_len, "search started");
    }

    fn search_succeeded(&self, generation: u64, result_count: usize) {
        info!(generation, result_count, "search resolved");
    }

    fn search_degraded(&self, generation: u64, error: &SearchError) {
        warn!(generation, kind = error.kind(), error = %error, "search failed, serving fallback results");
    }

    fn resolution_discarded(&self, generation: u64, current: u64) {
        debug!(generation, current, "discarding stale search resolution");
    }
}
