#[cfg(test)]
mod tests {
    use super::super::error::SearchError;
    use super::super::http_client::*;
    use crate::config::SearchConfig;
    use crate::search::dataset::canned_results;
    use crate::search::models::SearchOptions;
    use crate::search::service::SearchService;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service_for(server: &MockServer, timeout: Duration) -> HttpSearchService {
        let config = SearchConfig::new(&server.uri(), timeout).unwrap();
        HttpSearchService::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_posts_query_and_safe_search() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/search"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({
                "query": "nist framework",
                "safe_search": "moderate"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "query": "nist framework",
                "results": canned_results(),
                "total_results": 12,
                "search_time": "0.412s",
                "privacy_protected": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let service = service_for(&server, Duration::from_secs(5));
        let envelope = service
            .search("nist framework", &SearchOptions::default())
            .await
            .unwrap();

        assert_eq!(envelope.results, canned_results());
        assert_eq!(envelope.search_time.as_deref(), Some("0.412s"));
    }

    #[tokio::test]
    async fn test_empty_result_list_is_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/search"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"results": []})),
            )
            .mount(&server)
            .await;

        let service = service_for(&server, Duration::from_secs(5));
        let envelope = service
            .search("nothing", &SearchOptions::default())
            .await
            .unwrap();

        assert!(envelope.results.is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/search"))
            .respond_with(ResponseTemplate::new(500).set_body_string(
                "Search service temporarily unavailable. Your privacy remains protected.",
            ))
            .mount(&server)
            .await;

        let service = service_for(&server, Duration::from_secs(5));
        let err = service
            .search("owasp", &SearchOptions::default())
            .await
            .unwrap_err();

        match err {
            SearchError::Status { status, body, .. } => {
                assert_eq!(status, 500);
                assert!(body.contains("temporarily unavailable"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_client_error_status_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/search"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;

        let service = service_for(&server, Duration::from_secs(5));
        let err = service
            .search("x", &SearchOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "status");
    }

    #[tokio::test]
    async fn test_malformed_body_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let service = service_for(&server, Duration::from_secs(5));
        let err = service
            .search("owasp", &SearchOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, SearchError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_slow_backend_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/search"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"results": []}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let service = service_for(&server, Duration::from_millis(50));
        let err = service
            .search("slow", &SearchOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, SearchError::Timeout(d) if d == Duration::from_millis(50)));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_an_http_error() {
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let config = SearchConfig::new(&uri, Duration::from_secs(2)).unwrap();
        let service = HttpSearchService::new(&config).unwrap();
        let err = service
            .search("anything", &SearchOptions::default())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), "http");
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/search/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "healthy",
                "service": "cybersearch",
                "privacy": "protected",
                "timestamp": "2025-01-01T00:00:00"
            })))
            .mount(&server)
            .await;

        let service = service_for(&server, Duration::from_secs(5));
        let health = service.health().await.unwrap();

        assert!(health.is_healthy());
        assert_eq!(health.service.as_deref(), Some("cybersearch"));

        // GET carries no body, so no content type either
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].headers.get("content-type").is_none());
    }
}
