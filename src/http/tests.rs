//! Tests for the HTTP client module

use super::*;
use crate::error::{Error, Result};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client() -> HttpClient {
    HttpClient::with_config(HttpClientConfig::default()).unwrap()
}

fn graphql_url(server: &MockServer) -> String {
    format!("{}/graphql", server.uri())
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.rate_limit.is_none());
    assert!(config.user_agent.starts_with("irys-uploads/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .timeout(Duration::from_secs(5))
        .rate_limit(RateLimiterConfig::per_second(2))
        .build();

    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.rate_limit, Some(RateLimiterConfig::per_second(2)));
}

#[tokio::test]
async fn test_post_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"query": "{ ping }"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"ping": "pong"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let data: Value = client()
        .post_json(&graphql_url(&mock_server), &json!({"query": "{ ping }"}))
        .await
        .unwrap();

    assert_eq!(data["data"]["ping"], "pong");
}

#[tokio::test]
async fn test_post_json_sends_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header(
            "user-agent",
            format!("irys-uploads/{}", env!("CARGO_PKG_VERSION")).as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let _: Value = client()
        .post_json(&graphql_url(&mock_server), &json!({}))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_server_error_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client()
        .post_json::<Value>(&graphql_url(&mock_server), &json!({}))
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "upstream down");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_body_truncated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("e".repeat(4096)))
        .mount(&mock_server)
        .await;

    let err = client()
        .post_json::<Value>(&graphql_url(&mock_server), &json!({}))
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body.len(), crate::error::MAX_DETAIL_LEN);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .timeout(Duration::from_millis(50))
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let err = client
        .post_json::<Value>(&graphql_url(&mock_server), &json!({}))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Timeout { timeout_ms: 50 }));
}

#[tokio::test]
async fn test_invalid_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let result: Result<Value> = client()
        .post_json(&graphql_url(&mock_server), &json!({}))
        .await;

    assert!(matches!(result, Err(Error::JsonParse(_))));
}

#[tokio::test]
async fn test_rate_limited_client() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(3)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .rate_limit(RateLimiterConfig::per_second(100))
        .build();
    let client = HttpClient::with_config(config).unwrap();
    assert!(format!("{client:?}").contains("has_rate_limiter: true"));

    for _ in 0..3 {
        let _: Value = client
            .post_json(&graphql_url(&mock_server), &json!({}))
            .await
            .unwrap();
    }
}
