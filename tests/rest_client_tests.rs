//! Integration tests for the REST client request cycle.
//!
//! These tests run the client against a local mock server and verify URL
//! construction, authentication headers, and status handling.

use bigcommerce_api::clients::{HttpMethod, SDK_VERSION};
use bigcommerce_api::{
    BigCommerceConfig, Credentials, HostUrl, HttpError, RestClient, SettingsOptions,
};
use serde_json::json;
use wiremock::matchers::{any, body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const STORE_HASH: &str = "abc123";

/// Creates a client pointed at the given mock server.
fn create_test_client(server: &MockServer) -> RestClient {
    let config = BigCommerceConfig::builder()
        .api_host(HostUrl::new(server.uri()).unwrap())
        .user_agent_prefix("IntegrationTests/1.0")
        .build();
    let credentials = Credentials::from_parts(STORE_HASH, "test-client", "test-token").unwrap();

    RestClient::with_http_client(credentials, Some(&config), reqwest::Client::new())
}

fn store_path(path: &str) -> String {
    format!("/stores/{STORE_HASH}{path}")
}

// ============================================================================
// Request execution
// ============================================================================

#[tokio::test]
async fn test_execute_returns_raw_body_bytes() {
    let server = MockServer::start().await;
    let body = r#"{"data":{"page_title":"Shop"},"meta":{}}"#;

    Mock::given(method("GET"))
        .and(path(store_path("/v3/settings/storefront/seo")))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let bytes = client
        .execute(HttpMethod::Get, "/v3/settings/storefront/seo", None)
        .await
        .unwrap();

    assert_eq!(bytes, body.as_bytes());
}

#[tokio::test]
async fn test_execute_sends_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(store_path("/v3/hooks")))
        .and(body_json(json!({"scope": "store/cart/*"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": 1}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client
        .execute(
            HttpMethod::Post,
            "/v3/hooks",
            Some(json!({"scope": "store/cart/*"})),
        )
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_status_error_carries_code_and_body_text() {
    let server = MockServer::start().await;
    let body = r#"{"status":404,"title":"The requested resource was not found","type":"https://developer.bigcommerce.com/api-docs/getting-started/api-status-codes"}"#;

    Mock::given(method("GET"))
        .and(path(store_path("/v3/hooks/999")))
        .respond_with(ResponseTemplate::new(404).set_body_string(body))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client.get("/v3/hooks/999", Vec::new()).await;

    match result {
        Err(HttpError::Response(e)) => {
            assert_eq!(e.code, 404);
            assert_eq!(e.message, body);
        }
        other => panic!("Expected HttpError::Response, got {other:?}"),
    }
}

#[tokio::test]
async fn test_redirect_and_server_errors_are_failures() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(store_path("/v3/moved")))
        .respond_with(ResponseTemplate::new(304))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(store_path("/v3/broken")))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let client = create_test_client(&server);

    let error = client.get("/v3/moved", Vec::new()).await.unwrap_err();
    assert_eq!(error.status(), Some(304));

    let error = client.get("/v3/broken", Vec::new()).await.unwrap_err();
    assert_eq!(error.status(), Some(500));
    assert!(error.to_string().contains("Internal Server Error"));
}

#[tokio::test]
async fn test_redirect_is_returned_not_followed() {
    let server = MockServer::start().await;
    let other_host = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .mount(&other_host)
        .await;

    let location = format!("{}/elsewhere", other_host.uri());
    Mock::given(method("GET"))
        .and(path(store_path("/v3/settings/storefront/seo")))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", location.as_str()))
        .mount(&server)
        .await;

    let config = BigCommerceConfig::builder()
        .api_host(HostUrl::new(server.uri()).unwrap())
        .build();
    let credentials = Credentials::from_parts(STORE_HASH, "test-client", "test-token").unwrap();
    let client = RestClient::new(credentials, Some(&config)).unwrap();

    let error = client
        .storefront()
        .seo()
        .get(SettingsOptions::default())
        .await
        .unwrap_err();
    assert_eq!(error.status(), Some(302));

    let forwarded = other_host.received_requests().await.unwrap();
    assert!(forwarded.is_empty());
}

#[tokio::test]
async fn test_success_codes_below_300_are_accepted() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(store_path("/v3/hooks/5")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let bytes = client.delete("/v3/hooks/5", Vec::new()).await.unwrap();

    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_connection_failure_is_network_error() {
    // Nothing listens on port 1.
    let config = BigCommerceConfig::builder()
        .api_host(HostUrl::new("http://127.0.0.1:1").unwrap())
        .build();
    let credentials = Credentials::from_parts(STORE_HASH, "test-client", "test-token").unwrap();
    let client = RestClient::new(credentials, Some(&config)).unwrap();

    let result = client.get("/v3/hooks", Vec::new()).await;

    assert!(matches!(result, Err(HttpError::Network(_))));
}

#[tokio::test]
async fn test_query_parameters_are_appended() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(store_path("/v3/hooks")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    client
        .get(
            "/v3/hooks",
            vec![
                ("page".to_string(), "2".to_string()),
                ("scope".to_string(), "store/order/*".to_string()),
            ],
        )
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url.query(),
        Some("page=2&scope=store%2Forder%2F%2A")
    );
}

// ============================================================================
// Authentication headers
// ============================================================================

async fn mount_authenticated(server: &MockServer, http_method: &str, api_path: &str) {
    Mock::given(method(http_method))
        .and(path(store_path(api_path)))
        .and(header("X-Auth-Client", "test-client"))
        .and(header("X-Auth-Token", "test-token"))
        .and(header("Content-Type", "application/json"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_auth_headers_on_every_method() {
    let server = MockServer::start().await;

    mount_authenticated(&server, "GET", "/v3/settings/storefront/search").await;
    mount_authenticated(&server, "POST", "/content/widget-templates/").await;
    mount_authenticated(&server, "PUT", "/v3/settings/storefront/search").await;
    mount_authenticated(&server, "DELETE", "/v3/hooks/1").await;

    let client = create_test_client(&server);

    client
        .get("/v3/settings/storefront/search", Vec::new())
        .await
        .unwrap();
    client
        .post("/content/widget-templates/", json!({"name": "x"}))
        .await
        .unwrap();
    client
        .put(
            "/v3/settings/storefront/search",
            json!({"default_product_sort": "relevance"}),
            Vec::new(),
        )
        .await
        .unwrap();
    client.delete("/v3/hooks/1", Vec::new()).await.unwrap();

    server.verify().await;
}

#[tokio::test]
async fn test_user_agent_names_library_and_prefix() {
    let server = MockServer::start().await;
    let user_agent = format!("IntegrationTests/1.0 | BigCommerce API Library v{SDK_VERSION} | Rust");

    Mock::given(method("GET"))
        .and(path(store_path("/v3/settings/storefront/status")))
        .and(header("User-Agent", user_agent.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client
        .storefront()
        .status()
        .get(SettingsOptions::default())
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_client_is_shareable_across_tasks() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(store_path("/v3/settings/storefront/seo")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(4)
        .mount(&server)
        .await;

    let client = std::sync::Arc::new(create_test_client(&server));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move {
                client
                    .storefront()
                    .seo()
                    .get(SettingsOptions::default())
                    .await
                    .is_ok()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap());
    }
}
