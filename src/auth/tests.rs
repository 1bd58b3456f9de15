//! Tests for the auth module

use super::*;
use crate::config::{ApiKeyPlacement, ClientConfig, TokenPlacement};

fn apply(config: &ClientConfig) -> reqwest::Request {
    let auth = Authenticator::from_config(config);
    let client = reqwest::Client::new();
    let req = client.get("https://example.com/api/v1/products?fields=id");
    auth.apply(req).build().unwrap()
}

#[test]
fn test_api_key_header() {
    let config = ClientConfig::new("https://example.com", "test-key-123").unwrap();
    let built = apply(&config);

    assert_eq!(built.headers().get("ApiKey").unwrap(), "test-key-123");
    assert!(built.headers().get("Authorization").is_none());
}

#[test]
fn test_api_key_custom_header() {
    let config = ClientConfig::builder()
        .base_url("https://example.com")
        .api_key("k")
        .api_key_placement(ApiKeyPlacement::Header("X-Api-Key".to_string()))
        .build()
        .unwrap();
    let built = apply(&config);

    assert_eq!(built.headers().get("X-Api-Key").unwrap(), "k");
    assert!(built.headers().get("ApiKey").is_none());
}

#[test]
fn test_api_key_query_appended_after_options() {
    let config = ClientConfig::builder()
        .base_url("https://example.com")
        .api_key("secret123")
        .api_key_placement(ApiKeyPlacement::Query("api_key".to_string()))
        .build()
        .unwrap();
    let built = apply(&config);

    assert_eq!(built.url().query(), Some("fields=id&api_key=secret123"));
    assert!(built.headers().get("ApiKey").is_none());
}

#[test]
fn test_session_token_as_bearer() {
    let config = ClientConfig::builder()
        .base_url("https://example.com")
        .api_key("k")
        .auth_token("session-token")
        .build()
        .unwrap();
    let built = apply(&config);

    assert_eq!(
        built.headers().get("Authorization").unwrap(),
        "Bearer session-token"
    );
    assert_eq!(built.headers().get("ApiKey").unwrap(), "k");
}

#[test]
fn test_contact_token_header() {
    let config = ClientConfig::builder()
        .base_url("https://example.com")
        .api_key("k")
        .auth_token("contact-1")
        .token_placement(TokenPlacement::Header("ContactToken".to_string()))
        .build()
        .unwrap();
    let built = apply(&config);

    assert_eq!(built.headers().get("ContactToken").unwrap(), "contact-1");
    assert!(built.headers().get("Authorization").is_none());
}

#[test]
fn test_debug_hides_credentials() {
    let config = ClientConfig::builder()
        .base_url("https://example.com")
        .api_key("hidden-key")
        .auth_token("hidden-token")
        .build()
        .unwrap();
    let auth = Authenticator::from_config(&config);

    assert!(auth.has_token());
    let debug = format!("{auth:?}");
    assert!(!debug.contains("hidden-key"));
    assert!(!debug.contains("hidden-token"));
}
