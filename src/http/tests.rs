//! Tests for the HTTP client module

use super::*;
use crate::error::Error;
use crate::types::{BackoffType, JsonValue};
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.max_retries, 3);
    assert_eq!(config.backoff_type, BackoffType::Exponential);
    assert!(config.user_agent.starts_with("typegen/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .timeout(Duration::from_secs(60))
        .max_retries(5)
        .backoff(
            BackoffType::Linear,
            Duration::from_millis(200),
            Duration::from_secs(30),
        )
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.max_retries, 5);
    assert_eq!(config.backoff_type, BackoffType::Linear);
    assert_eq!(config.initial_backoff, Duration::from_millis(200));
    assert_eq!(config.max_backoff, Duration::from_secs(30));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_request_config_builder() {
    let config = RequestConfig::new()
        .query("page", "1")
        .header("X-Request-Id", "abc123")
        .timeout(Duration::from_secs(10))
        .retries(2);

    assert_eq!(config.query.get("page"), Some(&"1".to_string()));
    assert_eq!(
        config.headers.get("X-Request-Id"),
        Some(&"abc123".to_string())
    );
    assert_eq!(config.timeout, Some(Duration::from_secs(10)));
    assert_eq!(config.max_retries, Some(2));
}

#[test]
fn test_calculate_backoff() {
    let client = HttpClient::with_config(
        HttpClientConfig::builder()
            .backoff(
                BackoffType::Exponential,
                Duration::from_millis(100),
                Duration::from_secs(1),
            )
            .build(),
    );

    assert_eq!(client.calculate_backoff(0), Duration::from_millis(100));
    assert_eq!(client.calculate_backoff(1), Duration::from_millis(200));
    assert_eq!(client.calculate_backoff(2), Duration::from_millis(400));
    // Clamped at max_backoff
    assert_eq!(client.calculate_backoff(10), Duration::from_secs(1));

    let linear = HttpClient::with_config(
        HttpClientConfig::builder()
            .backoff(
                BackoffType::Linear,
                Duration::from_millis(100),
                Duration::from_secs(1),
            )
            .build(),
    );
    assert_eq!(linear.calculate_backoff(2), Duration::from_millis(300));

    let constant = HttpClient::with_config(
        HttpClientConfig::builder()
            .backoff(
                BackoffType::Constant,
                Duration::from_millis(100),
                Duration::from_secs(1),
            )
            .build(),
    );
    assert_eq!(constant.calculate_backoff(5), Duration::from_millis(100));
}

#[tokio::test]
async fn test_get_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/sample"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "test",
            "age": 30
        })))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new();
    let body: JsonValue = client
        .get_json(&format!("{}/api/sample", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(body["name"], "test");
    assert_eq!(body["age"], 30);
}

#[tokio::test]
async fn test_get_sends_headers_and_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/protected"))
        .and(header("Authorization", "Bearer test-token"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new();
    let config = RequestConfig::new()
        .header("Authorization", "Bearer test-token")
        .query("page", "1");

    let response = client
        .get_with_config(&format!("{}/api/protected", mock_server.uri()), config)
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn test_retries_transient_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/flaky"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/flaky"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let client = HttpClient::with_config(
        HttpClientConfig::builder()
            .max_retries(2)
            .backoff(
                BackoffType::Constant,
                Duration::from_millis(10),
                Duration::from_millis(10),
            )
            .build(),
    );

    let body: JsonValue = client
        .get_json(&format!("{}/api/flaky", mock_server.uri()))
        .await
        .unwrap();
    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn test_client_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new();
    let err = client
        .get(&format!("{}/api/missing", mock_server.uri()))
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "not found");
        }
        other => panic!("expected HttpStatus error, got {other:?}"),
    }
}
