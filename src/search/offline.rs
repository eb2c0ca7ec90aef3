use crate::search::dataset::canned_results;
use crate::search::error::SearchError;
use crate::search::models::{HealthStatus, ResultEnvelope, SearchOptions, SearchResult};
use crate::search::service::SearchService;
use async_trait::async_trait;

/// Search backend that answers from the bundled cybersecurity dataset.
pub struct OfflineSearchService {
    entries: Vec<SearchResult>,
}

impl Default for OfflineSearchService {
    fn default() -> Self {
        Self::new()
    }
}

impl OfflineSearchService {
    pub fn new() -> Self {
        Self::with_entries(canned_results())
    }

    pub fn with_entries(entries: Vec<SearchResult>) -> Self {
        Self { entries }
    }

    /// Every term must appear in the title, snippet, or one of the tags.
    pub fn matching(&self, query: &str) -> Vec<SearchResult> {
        let terms: Vec<String> = query
            .split_whitespace()
            .map(|t| t.to_lowercase())
            .collect();

        if terms.is_empty() {
            return Vec::new();
        }

        self.entries
            .iter()
            .filter(|entry| {
                let haystack = format!(
                    "{} {} {}",
                    entry.title,
                    entry.snippet,
                    entry.tags().join(" ")
                )
                .to_lowercase();
                terms.iter().all(|term| haystack.contains(term.as_str()))
            })
            .cloned()
            .collect()
    }
}

#[async_trait]
impl SearchService for OfflineSearchService {
    async fn search(
        &self,
        query: &str,
        _options: &SearchOptions,
    ) -> Result<ResultEnvelope, SearchError> {
        let results = self.matching(query);
        let mut envelope = ResultEnvelope::from_results(results);
        envelope.total_results = Some(envelope.results.len());
        envelope.query = Some(query.to_string());
        envelope.privacy_protected = Some(true);
        Ok(envelope)
    }

    async fn health(&self) -> Result<HealthStatus, SearchError> {
        Ok(HealthStatus {
            status: "healthy".to_string(),
            service: Some("cybersearch-offline".to_string()),
            privacy: Some("protected".to_string()),
            timestamp: None,
        })
    }
}
