//! Integration tests using mock HTTP server
//!
//! Tests the full flow through the public API: config → client → request →
//! normalized response or typed error.

use mints_client::{
    ApiClient, ApiResponse, ClientConfig, ConfigFile, Error, ErrorKind, HttpMethod, PubClient,
    RequestOptions, ResponseBody, UserClient,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Raw request
// ============================================================================

#[tokio::test]
async fn test_get_product_fields_scenario() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ecommerce/products/abc"))
        .and(query_param("fields", "id,title"))
        .and(header("ApiKey", "integration-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "title": "x"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client =
        ApiClient::new(ClientConfig::new(mock_server.uri(), "integration-key").unwrap()).unwrap();
    let options = RequestOptions::new().fields("id,title");

    assert_eq!(
        client.build_url("/ecommerce/products/abc", Some(&options)),
        format!("{}/ecommerce/products/abc?fields=id%2Ctitle", mock_server.uri())
    );

    let response = client
        .request(HttpMethod::Get, "/ecommerce/products/abc", Some(&options), None)
        .await
        .unwrap();

    assert_eq!(
        response,
        ApiResponse::new(200, ResponseBody::Json(json!({"id": 1, "title": "x"})))
    );
}

#[tokio::test]
async fn test_post_form_submit_scenario() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/content/forms/submit"))
        .and(body_json(json!({"email": "a@b.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client =
        ApiClient::new(ClientConfig::new(mock_server.uri(), "integration-key").unwrap()).unwrap();
    let response = client
        .request(
            HttpMethod::Post,
            "/content/forms/submit",
            None,
            Some(&json!({"email": "a@b.com"})),
        )
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_http_error_carries_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/crm/workflows/1"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"errors": {"title": ["required"]}})),
        )
        .mount(&mock_server)
        .await;

    let client =
        ApiClient::new(ClientConfig::new(mock_server.uri(), "integration-key").unwrap()).unwrap();
    let err = client
        .put("/crm/workflows/1", &json!({"title": ""}))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Http);
    assert_eq!(err.status(), Some(422));
    let body: serde_json::Value = serde_json::from_str(err.body().unwrap()).unwrap();
    assert_eq!(body["errors"]["title"][0], "required");
}

// ============================================================================
// Personas from a config file
// ============================================================================

#[tokio::test]
async fn test_personas_from_same_config() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ecommerce/products"))
        .and(header("ApiKey", "shared-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [{"id": 1}]})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/profile/me"))
        .and(header("ApiKey", "shared-key"))
        .and(header("Authorization", "Bearer session-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": 5}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let yaml = format!(
        "mints:\n  host: {}\n  api_key: shared-key\n  session_token: session-abc\n",
        mock_server.uri()
    );
    let file = ConfigFile::from_yaml_str(&yaml).unwrap();

    let public = PubClient::new(file.public_config().unwrap()).unwrap();
    let user = UserClient::new(file.user_config().unwrap()).unwrap();

    let products = public.get_products(None).await.unwrap();
    assert_eq!(products.data(), Some(&json!([{"id": 1}])));

    let me = user.me().await.unwrap();
    assert_eq!(me.data(), Some(&json!({"id": 5})));

    // The public persona never sends the session token
    let requests = mock_server.received_requests().await.unwrap();
    let public_request = requests
        .iter()
        .find(|r| r.url.path() == "/ecommerce/products")
        .unwrap();
    assert!(public_request.headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_missing_credentials_is_configuration_error() {
    let file = ConfigFile::from_yaml_str("mints:\n  host: https://demo.mints.cloud\n").unwrap();
    let err = file.public_config().unwrap_err();

    assert!(matches!(err, Error::MissingConfigField { ref field } if field == "api_key"));
    assert_eq!(err.kind(), ErrorKind::Configuration);
}
