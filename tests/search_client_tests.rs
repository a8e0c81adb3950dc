//! Integration tests for the search client
//!
//! These tests run the client against a wiremock server standing in for the
//! search API.

use serde_json::json;
use site_finder::config::HttpConfig;
use site_finder::search::{SearchOutcome, SearchProvider, SearchResponse, SerperClient};
use site_finder::SiteFinderError;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_http_config() -> HttpConfig {
    HttpConfig {
        timeout_secs: 5,
        connect_timeout_secs: 2,
    }
}

fn client_for(server: &MockServer) -> SerperClient {
    SerperClient::new(
        &format!("{}/search", server.uri()),
        "test-key",
        &test_http_config(),
    )
    .expect("Failed to build search client")
}

#[tokio::test]
async fn test_search_sends_key_and_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(header("x-api-key", "test-key"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"q": "Acme GmbH"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "searchParameters": {"q": "Acme GmbH"},
            "organic": [
                {"title": "Acme | LinkedIn", "link": "https://www.linkedin.com/company/acme", "position": 1},
                {"title": "Acme GmbH", "link": "https://acme.de/", "position": 2}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let outcome = client_for(&mock_server).search("Acme GmbH").await;

    let SearchOutcome::Found(response) = outcome else {
        panic!("Expected search results, got {:?}", outcome);
    };
    let links: Vec<&str> = response.links().collect();
    assert_eq!(
        links,
        vec!["https://www.linkedin.com/company/acme", "https://acme.de/"]
    );
}

#[tokio::test]
async fn test_response_without_organic_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "searchParameters": {"q": "Unknown Co"},
            "relatedSearches": []
        })))
        .mount(&mock_server)
        .await;

    let outcome = client_for(&mock_server).search("Unknown Co").await;
    assert_eq!(outcome, SearchOutcome::Found(SearchResponse::default()));
}

#[tokio::test]
async fn test_error_status_is_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Unauthorized."))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    assert_eq!(client.search("Acme").await, SearchOutcome::Unavailable);
    assert!(matches!(
        client.try_search("Acme").await,
        Err(SiteFinderError::HttpStatus { status: 403, .. })
    ));
}

#[tokio::test]
async fn test_invalid_json_is_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    assert_eq!(client.search("Acme").await, SearchOutcome::Unavailable);
    assert!(matches!(
        client.try_search("Acme").await,
        Err(SiteFinderError::InvalidResponse { .. })
    ));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_unavailable() {
    let client = SerperClient::new("http://127.0.0.1:1/search", "test-key", &test_http_config())
        .expect("Failed to build search client");

    assert_eq!(client.search("Acme").await, SearchOutcome::Unavailable);
    assert!(matches!(
        client.try_search("Acme").await,
        Err(SiteFinderError::Http { .. })
    ));
}
