//! Integration tests for the channel-scoped storefront settings.

use bigcommerce_api::rest::resources::storefront::{
    HstsSettings, SecuritySettings, SeoSettings, StorefrontStatus,
};
use bigcommerce_api::rest::StorefrontSetting;
use bigcommerce_api::{
    BigCommerceConfig, Credentials, HostUrl, ResourceError, RestClient, Settings, SettingsOptions,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_client(server: &MockServer) -> RestClient {
    let config = BigCommerceConfig::builder()
        .api_host(HostUrl::new(server.uri()).unwrap())
        .build();
    let credentials = Credentials::from_parts("abc123", "test-client", "test-token").unwrap();

    RestClient::with_http_client(credentials, Some(&config), reqwest::Client::new())
}

fn store_path<S: StorefrontSetting>() -> String {
    format!("/stores/abc123{}", S::PATH)
}

/// Serves a body that is not JSON and checks that `get` reports it as a
/// decode failure of the right settings type.
async fn assert_get_decode_error<S: StorefrontSetting>(
    server: &MockServer,
    settings: Settings<'_, S>,
) {
    Mock::given(method("GET"))
        .and(path(store_path::<S>()))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"data\": "))
        .mount(server)
        .await;

    let result = settings.get(SettingsOptions::default()).await;
    assert!(
        matches!(result, Err(ResourceError::Decode { resource, .. }) if resource == S::NAME),
        "{} did not report a decode error",
        S::NAME
    );
}

/// Checks the query string sent by `get` with and without a channel.
async fn assert_get_channel_query<S: StorefrontSetting>(
    settings: Settings<'_, S>,
    server: &MockServer,
) {
    server.reset().await;
    Mock::given(method("GET"))
        .and(path(store_path::<S>()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}, "meta": {}})))
        .expect(2)
        .mount(server)
        .await;

    settings.get(SettingsOptions::default()).await.unwrap();
    settings.get(SettingsOptions::channel(42)).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2, "{}", S::NAME);
    assert_eq!(requests[0].url.query(), None, "{}", S::NAME);
    assert_eq!(requests[1].url.query(), Some("channel_id=42"), "{}", S::NAME);
}

#[tokio::test]
async fn test_every_setting_get_scopes_by_channel() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);
    let storefront = client.storefront();

    assert_get_channel_query(storefront.category(), &server).await;
    assert_get_channel_query(storefront.robots_txt(), &server).await;
    assert_get_channel_query(storefront.search(), &server).await;
    assert_get_channel_query(storefront.security(), &server).await;
    assert_get_channel_query(storefront.seo(), &server).await;
    assert_get_channel_query(storefront.status(), &server).await;
}

#[tokio::test]
async fn test_every_setting_get_reports_malformed_body() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);
    let storefront = client.storefront();

    assert_get_decode_error(&server, storefront.category()).await;
    assert_get_decode_error(&server, storefront.robots_txt()).await;
    assert_get_decode_error(&server, storefront.search()).await;
    assert_get_decode_error(&server, storefront.security()).await;
    assert_get_decode_error(&server, storefront.seo()).await;
    assert_get_decode_error(&server, storefront.status()).await;
}

#[tokio::test]
async fn test_seo_get_decodes_values() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/settings/storefront/seo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "page_title": "Plant Shop",
                "meta_description": "Houseplants delivered",
                "www_redirect": "www"
            },
            "meta": {}
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let seo = client
        .storefront()
        .seo()
        .get(SettingsOptions::default())
        .await
        .unwrap();

    assert_eq!(
        *seo,
        SeoSettings {
            page_title: Some("Plant Shop".to_string()),
            meta_description: Some("Houseplants delivered".to_string()),
            www_redirect: Some("www".to_string()),
        }
    );
}

#[tokio::test]
async fn test_security_get_decodes_nested_hsts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/settings/storefront/security"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "sitewide_https_enabled": true,
                "csp_header": "enabled",
                "hsts": {"enabled": true, "max_age_months": 6, "includeSubDomains": false}
            }
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let security = client
        .storefront()
        .security()
        .get(SettingsOptions::channel(1))
        .await
        .unwrap();

    assert_eq!(
        security.hsts,
        Some(HstsSettings {
            enabled: Some(true),
            max_age_months: Some(6),
            include_sub_domains: Some(false),
        })
    );
}

#[tokio::test]
async fn test_update_puts_body_with_channel_query() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/stores/abc123/v3/settings/storefront/status"))
        .and(body_json(json!({
            "down_for_maintenance": "Back soon",
            "prelaunch_password": "letmein"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "down_for_maintenance": "Back soon",
                "prelaunch_message": "",
                "prelaunch_password": "letmein"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let status = StorefrontStatus {
        down_for_maintenance: Some("Back soon".to_string()),
        prelaunch_password: Some("letmein".to_string()),
        ..Default::default()
    };

    let stored = client
        .storefront()
        .status()
        .update(&status, SettingsOptions::channel(42))
        .await
        .unwrap();
    assert_eq!(stored.prelaunch_message.as_deref(), Some(""));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("channel_id=42"));
}

#[tokio::test]
async fn test_update_without_channel_sends_no_query() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/stores/abc123/v3/settings/storefront/security"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"sitewide_https_enabled": true}
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let settings = SecuritySettings {
        sitewide_https_enabled: Some(true),
        ..Default::default()
    };

    client
        .storefront()
        .security()
        .update(&settings, SettingsOptions::default())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_delete_sends_channel_then_comma_joined_keys() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/stores/abc123/v3/settings/storefront/seo"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    client
        .storefront()
        .seo()
        .delete(["a", "b", "c"], SettingsOptions::channel(7))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("channel_id=7&keys=a,b,c"));
}

#[tokio::test]
async fn test_delete_with_no_keys_omits_keys_param() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/stores/abc123/v3/settings/storefront/category"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    client
        .storefront()
        .category()
        .delete(Vec::<String>::new(), SettingsOptions::channel(3))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("channel_id=3"));
}

#[tokio::test]
async fn test_settings_status_errors_propagate() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/settings/storefront/robotstxt"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let error = client
        .storefront()
        .robots_txt()
        .get(SettingsOptions::channel(9))
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(403));
    assert!(matches!(error, ResourceError::Http(_)));
}
