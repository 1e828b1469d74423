//! Integration tests for the username/password login flow.
//!
//! These tests run `authenticate` against a wiremock server and verify the
//! login request, the client it yields, and how failures are reported.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wizishop_api::auth::request_credential;
use wizishop_api::{
    authenticate, ApiUrl, AuthError, MalformedCredentialError, Password, Username, WizishopConfig,
};

// {"alg":"RS256","typ":"JWS"} . {"exp":4102444800,"id_shop":131}
const TOKEN: &str =
    "eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXUyJ9.eyJleHAiOjQxMDI0NDQ4MDAsImlkX3Nob3AiOjEzMX0.Signature";

fn config_for(server: &MockServer) -> WizishopConfig {
    WizishopConfig::builder()
        .api_url(ApiUrl::new(server.uri()).unwrap())
        .build()
}

fn username() -> Username {
    Username::new("merchant@example.com").unwrap()
}

fn password() -> Password {
    Password::new("s3cret").unwrap()
}

async fn mount_login(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({
            "username": "merchant@example.com",
            "password": "s3cret",
        })))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_authenticate_yields_shop_scoped_client() {
    let server = MockServer::start().await;
    mount_login(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"token": TOKEN})),
    )
    .await;

    let client = authenticate(&username(), &password(), &config_for(&server))
        .await
        .unwrap();

    assert_eq!(client.credential().token(), TOKEN);
    assert_eq!(client.credential().shop_id().as_deref(), Some("131"));
    assert!(!client.credential().expired());
    assert_eq!(
        client.base_uri(),
        format!("{}/v2/shops/131/", server.uri())
    );
}

#[tokio::test]
async fn test_request_credential_returns_parsed_token() {
    let server = MockServer::start().await;
    mount_login(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"token": TOKEN, "ttl": 3600})),
    )
    .await;

    let credential = request_credential(&username(), &password(), &config_for(&server))
        .await
        .unwrap();

    assert_eq!(credential.claim("id_shop"), Some(&json!(131)));
}

#[tokio::test]
async fn test_rejected_login_is_an_authentication_error() {
    let server = MockServer::start().await;
    mount_login(
        &server,
        ResponseTemplate::new(401).set_body_json(json!({"message": "Bad credentials"})),
    )
    .await;

    let result = authenticate(&username(), &password(), &config_for(&server)).await;

    match result {
        Err(AuthError::Authentication(error)) => {
            assert_eq!(error.status(), Some(401));
            assert_eq!(error.request.path, "auth/login");
            // The password never leaves the login call
            assert_eq!(
                error.request.body,
                Some(json!({"username": "merchant@example.com", "password": "*****"}))
            );
            let body = error.response().unwrap().json().unwrap();
            assert_eq!(body["message"], "Bad credentials");
        }
        other => panic!("Expected AuthError::Authentication, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_login_response_is_an_authentication_error() {
    let server = MockServer::start().await;
    mount_login(&server, ResponseTemplate::new(200).set_body_string("<html>")).await;

    let result = authenticate(&username(), &password(), &config_for(&server)).await;

    assert!(matches!(result, Err(AuthError::Authentication(_))));
}

#[tokio::test]
async fn test_missing_token_is_a_malformed_credential() {
    let server = MockServer::start().await;
    mount_login(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})),
    )
    .await;

    let result = authenticate(&username(), &password(), &config_for(&server)).await;

    assert!(matches!(
        result,
        Err(AuthError::MalformedCredential(MalformedCredentialError::Empty))
    ));
}

#[tokio::test]
async fn test_unparseable_token_is_a_malformed_credential() {
    let server = MockServer::start().await;
    mount_login(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"token": "not-a-token"})),
    )
    .await;

    let result = authenticate(&username(), &password(), &config_for(&server)).await;

    assert!(matches!(
        result,
        Err(AuthError::MalformedCredential(
            MalformedCredentialError::WrongSegmentCount { count: 1 }
        ))
    ));
}

#[tokio::test]
async fn test_unreachable_server_is_an_authentication_error() {
    let config = WizishopConfig::builder()
        .api_url(ApiUrl::new("http://127.0.0.1:1").unwrap())
        .build();

    let result = authenticate(&username(), &password(), &config).await;

    match result {
        Err(AuthError::Authentication(error)) => assert_eq!(error.status(), None),
        other => panic!("Expected AuthError::Authentication, got: {other:?}"),
    }
}
