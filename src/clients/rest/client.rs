//! REST client implementation for the BigCommerce API.
//!
//! This module provides the [`RestClient`] type, which executes raw requests
//! against one store and hands out the typed resource handles.

use serde_json::Value;

use crate::auth::Credentials;
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::config::BigCommerceConfig;
use crate::rest::resources::{Webhook, WidgetTemplate};
use crate::rest::{Resources, Storefront};

/// REST API client for one BigCommerce store.
///
/// Owns the store [`Credentials`] and an [`HttpClient`]. Beyond the
/// transport's connection pool there is no mutable state, so a single
/// client can be shared by reference across tasks.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`.
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_api::{Credentials, RestClient, SettingsOptions};
///
/// let credentials = Credentials::from_parts("abc123", "client-id", "access-token")?;
/// let client = RestClient::new(credentials, None)?;
///
/// // Typed resource operations
/// let hooks = client.webhooks().list(None).await?;
/// let status = client.storefront().status().get(SettingsOptions::default()).await?;
///
/// // Raw request
/// let bytes = client.get("/v3/settings/storefront/seo", Vec::new()).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    credentials: Credentials,
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new client with its own transport.
    ///
    /// # Arguments
    ///
    /// * `credentials` - The store hash, client ID, and access token
    /// * `config` - Optional host and user agent settings
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the transport cannot be initialized.
    pub fn new(
        credentials: Credentials,
        config: Option<&BigCommerceConfig>,
    ) -> Result<Self, HttpError> {
        let http_client = HttpClient::new(&credentials, config)?;
        Self::log_custom_host(config);

        Ok(Self {
            credentials,
            http_client,
        })
    }

    /// Creates a new client that sends through a caller-supplied
    /// `reqwest::Client`.
    ///
    /// Timeouts, proxies, and connection pooling are whatever that client
    /// was built with. Build it with
    /// `redirect(reqwest::redirect::Policy::none())`: a followed redirect
    /// turns a 3xx into the target's answer and sends `X-Auth-Token` along.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use bigcommerce_api::{Credentials, RestClient};
    ///
    /// let transport = reqwest::Client::builder()
    ///     .timeout(Duration::from_secs(10))
    ///     .redirect(reqwest::redirect::Policy::none())
    ///     .build()
    ///     .unwrap();
    ///
    /// let credentials = Credentials::from_parts("abc123", "client-id", "token").unwrap();
    /// let client = RestClient::with_http_client(credentials, None, transport);
    /// assert_eq!(client.credentials().store_hash().as_ref(), "abc123");
    /// ```
    #[must_use]
    pub fn with_http_client(
        credentials: Credentials,
        config: Option<&BigCommerceConfig>,
        http_client: reqwest::Client,
    ) -> Self {
        let http_client = HttpClient::with_client(&credentials, config, http_client);
        Self::log_custom_host(config);

        Self {
            credentials,
            http_client,
        }
    }

    fn log_custom_host(config: Option<&BigCommerceConfig>) {
        if let Some(config) = config {
            if config.api_host().as_ref() != crate::config::DEFAULT_API_HOST {
                tracing::debug!(
                    api_host = %config.api_host().as_ref(),
                    "Rest client using custom API host"
                );
            }
        }
    }

    /// Returns the credentials this client authenticates with.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Webhooks under `/v3/hooks`.
    #[must_use]
    pub const fn webhooks(&self) -> Resources<'_, Webhook> {
        Resources::new(self)
    }

    /// Widget templates under `/content/widget-templates/`.
    #[must_use]
    pub const fn widget_templates(&self) -> Resources<'_, WidgetTemplate> {
        Resources::new(self)
    }

    /// Storefront settings under `/v3/settings/storefront/`.
    #[must_use]
    pub const fn storefront(&self) -> Storefront<'_> {
        Storefront::new(self)
    }

    /// Executes a request and returns the raw response body.
    ///
    /// `path` is relative to the store root and may carry its own query
    /// string, e.g. `/v3/hooks?is_active=true`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport failures, unreadable bodies,
    /// status codes of 300 or above, and POST/PUT requests without a body.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use bigcommerce_api::clients::HttpMethod;
    /// use serde_json::json;
    ///
    /// let body = json!({"scope": "store/order/*", "destination": "https://example.com/hook", "is_active": true});
    /// let bytes = client.execute(HttpMethod::Post, "/v3/hooks", Some(body)).await?;
    /// ```
    pub async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> Result<Vec<u8>, HttpError> {
        self.make_request(method, path, body, Vec::new()).await
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// See [`RestClient::execute`].
    pub async fn get(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<Vec<u8>, HttpError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`RestClient::execute`].
    pub async fn post(&self, path: &str, body: Value) -> Result<Vec<u8>, HttpError> {
        self.make_request(HttpMethod::Post, path, Some(body), Vec::new())
            .await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`RestClient::execute`].
    pub async fn put(
        &self,
        path: &str,
        body: Value,
        query: Vec<(String, String)>,
    ) -> Result<Vec<u8>, HttpError> {
        self.make_request(HttpMethod::Put, path, Some(body), query)
            .await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// See [`RestClient::execute`].
    pub async fn delete(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<Vec<u8>, HttpError> {
        self.make_request(HttpMethod::Delete, path, None, query)
            .await
    }

    /// Builds and sends a request, returning the body bytes.
    pub(crate) async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
        query: Vec<(String, String)>,
    ) -> Result<Vec<u8>, HttpError> {
        let mut builder = HttpRequest::builder(method, path).query(query);

        if let Some(body) = body {
            builder = builder.body(body);
        }

        let request = builder.build()?;
        let response = self.http_client.request(request).await?;

        Ok(response.into_body())
    }
}
