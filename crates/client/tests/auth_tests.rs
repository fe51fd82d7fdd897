//! Universal auth login endpoint tests.
//!
//! This module tests:
//! - Successful login with access token extraction
//! - Invalid credential handling
//! - Login responses without a usable token
//! - Client-side timeout classification
//!
//! # Invariants
//! - The login request body is `{ "clientId", "clientSecret" }` JSON
//! - Any non-success status maps to `ClientError::AuthFailed`

mod common;

use common::*;
use infisical_client::ClientError;
use secrecy::SecretString;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};

#[tokio::test]
async fn test_login_success() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("auth/login_success.json");

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/universal-auth/login"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "clientId": "machine-id",
            "clientSecret": "machine-secret"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let result = endpoints::universal_auth_login(
        &client,
        &mock_server.uri(),
        "machine-id",
        "machine-secret",
        TEST_TIMEOUT,
    )
    .await;

    if let Err(ref e) = result {
        eprintln!("Login error: {:?}", e);
    }
    assert_eq!(result.unwrap().expose_secret(), "test-access-token-12345678");
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("auth/login_invalid_creds.json");

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/universal-auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err = endpoints::universal_auth_login(
        &client,
        &mock_server.uri(),
        "machine-id",
        "wrong-secret",
        TEST_TIMEOUT,
    )
    .await
    .unwrap_err();

    match err {
        ClientError::AuthFailed { status, ref body } => {
            assert_eq!(status, 401);
            assert!(body.contains("Invalid credentials"));
        }
        other => panic!("Expected AuthFailed, got {:?}", other),
    }
    assert!(err.is_auth_error());
}

#[tokio::test]
async fn test_login_server_error_is_auth_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/universal-auth/login"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream unavailable"))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err = endpoints::universal_auth_login(
        &client,
        &mock_server.uri(),
        "machine-id",
        "machine-secret",
        TEST_TIMEOUT,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ClientError::AuthFailed { status: 500, .. }));
    assert!(err.to_string().contains("upstream unavailable"));
}

#[tokio::test]
async fn test_login_missing_access_token() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("auth/login_missing_token.json");

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/universal-auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err = endpoints::universal_auth_login(
        &client,
        &mock_server.uri(),
        "machine-id",
        "machine-secret",
        TEST_TIMEOUT,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ClientError::MissingAccessToken));
}

#[tokio::test]
async fn test_login_empty_access_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/universal-auth/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"accessToken": ""})),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err = endpoints::universal_auth_login(
        &client,
        &mock_server.uri(),
        "machine-id",
        "machine-secret",
        TEST_TIMEOUT,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ClientError::MissingAccessToken));
}

#[tokio::test]
async fn test_login_non_json_body_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/universal-auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err = endpoints::universal_auth_login(
        &client,
        &mock_server.uri(),
        "machine-id",
        "machine-secret",
        TEST_TIMEOUT,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ClientError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_login_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/universal-auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("auth/login_success.json"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Duration::from_millis(100));
    let err = client
        .universal_auth_login(
            "machine-id",
            &SecretString::new("machine-secret".to_string().into()),
        )
        .await
        .unwrap_err();

    assert!(err.is_timeout(), "Expected Timeout, got {:?}", err);
}

#[tokio::test]
async fn test_login_error_does_not_leak_client_secret() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/universal-auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, TEST_TIMEOUT);
    let err = client
        .universal_auth_login(
            "machine-id",
            &SecretString::new("do-not-print-me".to_string().into()),
        )
        .await
        .unwrap_err();

    assert!(!err.to_string().contains("do-not-print-me"));
    assert!(!format!("{:?}", err).contains("do-not-print-me"));
}
