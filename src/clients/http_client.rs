//! HTTP client for BigCommerce API communication.
//!
//! This module provides the [`HttpClient`] type, which owns the shared
//! transport and attaches authentication headers to every request.

use std::collections::HashMap;
use std::fmt;

use crate::auth::Credentials;
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::BigCommerceConfig;

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the BigCommerce API.
///
/// The client handles:
/// - Base URI construction from the API host and store hash
/// - Default headers: JSON content negotiation, `X-Auth-Client`,
///   `X-Auth-Token`, and `User-Agent`
/// - Reading the full response body and rejecting status codes of 300 or above
///
/// There is no retry, rate-limit handling, or timeout beyond what the
/// underlying `reqwest::Client` provides.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`; the inner `reqwest::Client` is a shared
/// connection pool, so one client can serve concurrent calls.
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_api::Credentials;
/// use bigcommerce_api::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let credentials = Credentials::from_parts("abc123", "client-id", "token")?;
/// let client = HttpClient::new(&credentials, None)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/v3/hooks").build()?;
/// let response = client.request(request).await?;
/// ```
#[derive(Clone)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.bigcommerce.com/stores/abc123`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Header values carry the access token.
impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header_names: Vec<&str> =
            self.default_headers.keys().map(String::as_str).collect();
        header_names.sort_unstable();

        f.debug_struct("HttpClient")
            .field("base_uri", &self.base_uri)
            .field("default_headers", &header_names)
            .finish_non_exhaustive()
    }
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client with its own rustls-backed transport.
    ///
    /// Redirects are not followed: a 3xx answer is returned as
    /// [`HttpError::Response`] and the auth headers never leave the API host.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the transport cannot be initialized
    /// (e.g., TLS backend failure).
    pub fn new(
        credentials: &Credentials,
        config: Option<&BigCommerceConfig>,
    ) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self::with_client(credentials, config, client))
    }

    /// Creates a new HTTP client around an existing `reqwest::Client`.
    ///
    /// Use this to share one connection pool across several stores or to
    /// configure timeouts and proxies on the transport.
    ///
    /// The supplied client should be built with
    /// `redirect(reqwest::redirect::Policy::none())`. reqwest follows
    /// redirects by default, which hides the 3xx status and forwards
    /// `X-Auth-Token` to the redirect target.
    #[must_use]
    pub fn with_client(
        credentials: &Credentials,
        config: Option<&BigCommerceConfig>,
        client: reqwest::Client,
    ) -> Self {
        let default_config;
        let config = if let Some(config) = config {
            config
        } else {
            default_config = BigCommerceConfig::default();
            &default_config
        };

        let base_uri = format!(
            "{}/stores/{}",
            config.api_host().as_ref(),
            credentials.store_hash()
        );

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent =
            format!("{user_agent_prefix}BigCommerce API Library v{SDK_VERSION} | Rust");

        let mut default_headers = HashMap::new();
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "X-Auth-Client".to_string(),
            credentials.client_id().as_ref().to_string(),
        );
        default_headers.insert(
            "X-Auth-Token".to_string(),
            credentials.access_token().as_ref().to_string(),
        );
        default_headers.insert("User-Agent".to_string(), user_agent);

        tracing::debug!(base_uri = %base_uri, "Created BigCommerce HTTP client");

        Self {
            client,
            base_uri,
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Builds the absolute URL for a request.
    #[must_use]
    pub fn url_for(&self, request: &HttpRequest) -> String {
        let path_and_query = request.path_and_query();
        if path_and_query.starts_with('/') {
            format!("{}{path_and_query}", self.base_uri)
        } else {
            format!("{}/{path_and_query}", self.base_uri)
        }
    }

    /// Sends an HTTP request to the API.
    ///
    /// The whole body is read before returning.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The request cannot be sent (`Network`)
    /// - The body cannot be read (`Body`)
    /// - The status code is 300 or above (`Response`, carrying the code and raw body)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(method = %request.http_method, path = %request.path, "Sending request");

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.bytes().await.map_err(HttpError::Body)?.to_vec();

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            status = code,
            "Received response"
        );

        let response = HttpResponse::new(code, headers, body);

        if !response.is_ok() {
            return Err(HttpError::Response(HttpResponseError {
                code,
                message: response.text(),
            }));
        }

        Ok(response)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
