//! Integration tests for the WiziShop API SDK.
//!
//! These tests verify configuration, credential handling and client
//! construction end to end, without network access.

use chrono::{Duration, Utc};
use serde_json::json;

use wizishop_api::{
    ApiUrl, ApiVersion, AuthenticatedApiClient, ConfigError, Credential, MalformedCredentialError,
    NotFoundPolicy, Password, Username, WizishopConfig,
};

// {"alg":"RS256","typ":"JWS"} . {"exp":4102444800,"id_shop":131}
const TOKEN: &str =
    "eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXUyJ9.eyJleHAiOjQxMDI0NDQ4MDAsImlkX3Nob3AiOjEzMX0.Signature";

#[test]
fn test_full_workflow_build_config_parse_credential_create_client() {
    let config = WizishopConfig::builder()
        .api_url(ApiUrl::new("https://sandbox.wizishop.test").unwrap())
        .api_version("V3".parse().unwrap())
        .user_agent_prefix("Warehouse/1.0")
        .not_found_policy(NotFoundPolicy::Error)
        .build();

    assert_eq!(config.api_url().host_name(), "sandbox.wizishop.test");
    assert_eq!(config.api_version(), &ApiVersion::Custom("v3".to_string()));
    assert_eq!(config.user_agent_prefix(), Some("Warehouse/1.0"));

    let credential: Credential = TOKEN.parse().unwrap();
    let client = AuthenticatedApiClient::new(credential, &config);

    assert_eq!(
        client.base_uri(),
        "https://sandbox.wizishop.test/v3/shops/131/"
    );
    assert_eq!(client.not_found_policy(), NotFoundPolicy::Error);

    let user_agent = client.transport().default_headers().get("User-Agent").unwrap();
    assert!(user_agent.starts_with("Warehouse/1.0 | wizishop-api-rust/"));
}

#[test]
fn test_default_config_targets_production_v2() {
    let config = WizishopConfig::default();

    assert_eq!(config.api_url().as_ref(), "https://api.wizishop.com/");
    assert_eq!(config.api_version(), &ApiVersion::V2);
    assert_eq!(config.user_agent_prefix(), None);
    assert_eq!(config.not_found_policy(), NotFoundPolicy::EmptyResult);
}

#[test]
fn test_error_handling_invalid_inputs_produce_correct_errors() {
    assert!(matches!(Username::new(""), Err(ConfigError::EmptyUsername)));
    assert!(matches!(Password::new(""), Err(ConfigError::EmptyPassword)));
    assert!(matches!(
        ApiUrl::new("api.wizishop.com"),
        Err(ConfigError::InvalidApiUrl { .. })
    ));
    assert!(matches!(
        ApiUrl::new("ftp://api.wizishop.com"),
        Err(ConfigError::InvalidApiUrl { .. })
    ));
    assert!(matches!(
        "2".parse::<ApiVersion>(),
        Err(ConfigError::InvalidApiVersion { .. })
    ));
}

#[test]
fn test_credential_expiry_relative_to_now() {
    let now = Utc::now();
    let credential: Credential = TOKEN.parse().unwrap();

    assert!(!credential.is_expired(now));
    assert!(credential.is_expired(credential.expires_at() + Duration::seconds(1)));
    assert!(!credential.is_expired(credential.expires_at()));
}

#[test]
fn test_credential_claims_survive_storage() {
    let credential: Credential = TOKEN.parse().unwrap();

    let stored = serde_json::to_value(&credential).unwrap();
    assert_eq!(stored, json!(TOKEN));

    let restored: Credential = serde_json::from_value(stored).unwrap();
    assert_eq!(restored, credential);
    assert_eq!(restored.claim("exp"), Some(&json!(4_102_444_800_i64)));
}

#[test]
fn test_stored_garbage_is_rejected_on_restore() {
    let result: Result<Credential, _> = serde_json::from_value(json!("a.b"));
    assert!(result.is_err());

    assert_eq!(
        "a.b".parse::<Credential>(),
        Err(MalformedCredentialError::WrongSegmentCount { count: 2 })
    );
}

#[test]
fn test_config_can_be_cloned_and_shared() {
    let config = WizishopConfig::builder()
        .not_found_policy(NotFoundPolicy::Error)
        .build();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let config = config.clone();
            std::thread::spawn(move || {
                let credential: Credential = TOKEN.parse().unwrap();
                AuthenticatedApiClient::new(credential, &config)
                    .base_uri()
                    .to_string()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "https://api.wizishop.com/v2/shops/131/");
    }
}
