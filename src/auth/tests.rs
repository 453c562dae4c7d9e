//! Tests for the auth module

use super::*;
use wiremock::matchers::{basic_auth, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_credentials() -> Credentials {
    Credentials::new("app-id", "app-secret", "miner", "hunter2")
}

fn test_authenticator(server: &MockServer) -> Authenticator {
    Authenticator::with_client(
        test_credentials(),
        format!("{}/api/v1/access_token", server.uri()),
        reqwest::Client::new(),
    )
}

#[tokio::test]
async fn test_password_grant_fetches_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/access_token"))
        .and(basic_auth("app-id", "app-secret"))
        .and(body_string_contains("grant_type=password"))
        .and(body_string_contains("username=miner"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "tok-123",
            "token_type": "bearer",
            "expires_in": 3600,
            "scope": "*"
        })))
        .mount(&mock_server)
        .await;

    let auth = test_authenticator(&mock_server);
    let token = auth.access_token().await.unwrap();

    assert_eq!(token, "tok-123");
}

#[tokio::test]
async fn test_token_is_cached_across_calls() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "tok-123",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let auth = test_authenticator(&mock_server);
    assert_eq!(auth.access_token().await.unwrap(), "tok-123");
    assert_eq!(auth.access_token().await.unwrap(), "tok-123");
}

#[tokio::test]
async fn test_rejected_credentials_in_body() {
    let mock_server = MockServer::start().await;

    // Reddit reports bad credentials with a 200 and an error field
    Mock::given(method("POST"))
        .and(path("/api/v1/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": "invalid_grant"
        })))
        .mount(&mock_server)
        .await;

    let auth = test_authenticator(&mock_server);
    let err = auth.access_token().await.unwrap_err();

    assert!(err.is_auth());
    assert!(err.to_string().contains("invalid_grant"));
}

#[tokio::test]
async fn test_token_endpoint_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/access_token"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let auth = test_authenticator(&mock_server);
    let err = auth.access_token().await.unwrap_err();

    assert!(err.is_auth());
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn test_missing_access_token_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token_type": "bearer"
        })))
        .mount(&mock_server)
        .await;

    let auth = test_authenticator(&mock_server);
    let err = auth.access_token().await.unwrap_err();

    assert!(err.is_auth());
}

#[tokio::test]
async fn test_apply_sets_bearer_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "tok-xyz",
            "expires_in": 3600
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/me"))
        .and(wiremock::matchers::header(
            "Authorization",
            "Bearer tok-xyz",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "miner"
        })))
        .mount(&mock_server)
        .await;

    let auth = test_authenticator(&mock_server);
    let client = reqwest::Client::new();
    let req = client.get(format!("{}/api/v1/me", mock_server.uri()));
    let response = auth.apply(req).await.unwrap().send().await.unwrap();

    assert_eq!(response.status(), 200);
}

#[test]
fn test_authenticator_debug_omits_secrets() {
    let auth = Authenticator::new(test_credentials(), "modmine-tests");
    let debug_str = format!("{auth:?}");

    assert!(debug_str.contains("miner"));
    assert!(!debug_str.contains("hunter2"));
    assert!(!debug_str.contains("app-secret"));
}
