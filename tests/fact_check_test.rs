//! Wiremock integration tests for FactCheckClient.
//!
//! Every failure mode must come back as a `FactCheckResult::Error` value,
//! never as a panic or `Err`.

use std::time::Duration;

use newsverdict::FactCheckResult;
use newsverdict::providers::{FactCheckClient, FactChecker};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TIMEOUT: Duration = Duration::from_secs(5);

fn client(server: &MockServer) -> FactCheckClient {
    FactCheckClient::with_base_url("test_key", server.uri(), TIMEOUT).unwrap()
}

#[tokio::test]
async fn test_search_sends_query_and_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1alpha1/claims:search"))
        .and(query_param("query", "Moon landing faked"))
        .and(query_param("key", "test_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "claims": [{
                "text": "The moon landing was staged",
                "claimant": "Some blog",
                "claimDate": "2019-07-20T00:00:00Z",
                "claimReview": [{
                    "publisher": { "name": "PolitiFact", "site": "politifact.com" },
                    "url": "https://politifact.example/moon",
                    "title": "No, the moon landing was not staged",
                    "textualRating": "Pants on Fire",
                    "languageCode": "en"
                }]
            }],
            "nextPageToken": "abc"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).search("Moon landing faked").await;

    let claims = result.claims().expect("should be a claim list");
    assert_eq!(claims.len(), 1);
    assert_eq!(claims[0].text_or_default(), "The moon landing was staged");
    assert_eq!(claims[0].claim_date.as_deref(), Some("2019-07-20T00:00:00Z"));

    let review = &claims[0].claim_review[0];
    assert_eq!(review.publisher_name(), "PolitiFact");
    assert_eq!(review.rating(), "Pants on Fire");
    assert_eq!(review.link(), "https://politifact.example/moon");
}

#[tokio::test]
async fn test_empty_object_is_empty_claim_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1alpha1/claims:search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).search("anything").await;
    assert_eq!(result, FactCheckResult::Claims(vec![]));
}

#[tokio::test]
async fn test_explicit_empty_claims() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1alpha1/claims:search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "claims": [] })),
        )
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).search("anything").await;
    assert_eq!(result.claims(), Some(&[][..]));
}

#[tokio::test]
async fn test_non_200_is_error_with_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1alpha1/claims:search"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).search("anything").await;

    match result {
        FactCheckResult::Error { status, message } => {
            assert_eq!(status, Some(404));
            assert!(message.contains("404"), "message: {message}");
            assert!(message.contains("Not Found"), "message: {message}");
        }
        other => panic!("Expected error result, got {:?}", other),
    }
}

#[tokio::test]
async fn test_forbidden_key_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1alpha1/claims:search"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "error": { "code": 403, "message": "API key not valid" }
        })))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).fact_check("anything").await;

    assert!(result.is_error());
    assert!(result.claims().is_none());
}

#[tokio::test]
async fn test_malformed_json_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1alpha1/claims:search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).search("anything").await;

    match result {
        FactCheckResult::Error { status, message } => {
            assert_eq!(status, Some(200));
            assert!(message.starts_with("Invalid Google Fact Check API response"));
        }
        other => panic!("Expected error result, got {:?}", other),
    }
}

#[tokio::test]
async fn test_language_code_is_forwarded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1alpha1/claims:search"))
        .and(query_param("languageCode", "de"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).language_code("de").search("Mond").await;
    assert!(!result.is_error());
}

#[tokio::test]
async fn test_unreachable_server_is_error_without_status() {
    // Nothing listens on port 9 (discard) in the test environment.
    let client =
        FactCheckClient::with_base_url("test_key", "http://127.0.0.1:9", TIMEOUT).unwrap();

    let result = client.search("anything").await;

    match result {
        FactCheckResult::Error { status, message } => {
            assert_eq!(status, None);
            assert!(message.starts_with("Unable to reach Google Fact Check API"));
        }
        other => panic!("Expected error result, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_review_fields_use_placeholders() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1alpha1/claims:search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "claims": [{ "claimReview": [{}] }]
        })))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).search("anything").await;
    let claims = result.claims().unwrap();

    assert_eq!(claims[0].text_or_default(), "N/A");
    let review = &claims[0].claim_review[0];
    assert_eq!(review.publisher_name(), "N/A");
    assert_eq!(review.rating(), "N/A");
    assert_eq!(review.link(), "#");
}

/// Live test against the real API. Requires `GOOGLE_FACT_CHECK_API_KEY`.
#[tokio::test]
#[ignore]
async fn real_api_search() {
    let key = std::env::var("GOOGLE_FACT_CHECK_API_KEY")
        .expect("GOOGLE_FACT_CHECK_API_KEY must be set for live tests");
    let client = FactCheckClient::new(key, Duration::from_secs(30)).unwrap();

    let result = client.search("vaccines cause autism").await;
    assert!(!result.is_error(), "live search failed: {:?}", result);
}
