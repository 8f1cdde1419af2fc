//! # BigCommerce API Rust Client
//!
//! A typed client for the BigCommerce REST API, covering store
//! configuration resources: webhooks, widget templates, and the
//! channel-scoped storefront settings.
//!
//! ## Overview
//!
//! This crate provides:
//! - Validated credential newtypes ([`StoreHash`], [`ClientId`], [`AccessToken`])
//! - Optional client configuration via [`BigCommerceConfig`]
//! - An async HTTP transport that attaches the `X-Auth-Client` and
//!   `X-Auth-Token` headers to every request
//! - Typed `get`/`list`/`create`/`update`/`delete` operations per resource,
//!   decoded from the API's `data`/`meta` envelope
//!
//! There is no retry, rate-limit handling, caching, or automatic
//! pagination: each call maps to exactly one HTTP request.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bigcommerce_api::{Credentials, RestClient, SettingsOptions};
//! use bigcommerce_api::rest::resources::Webhook;
//!
//! let credentials = Credentials::from_parts("abc123", "client-id", "access-token")?;
//! let client = RestClient::new(credentials, None)?;
//!
//! // Subscribe to order events
//! let hook = client
//!     .webhooks()
//!     .create(&Webhook::new("store/order/*", "https://example.com/hook"))
//!     .await?;
//! println!("webhook id: {:?}", hook.id);
//!
//! // Read the SEO settings of channel 1
//! let seo = client
//!     .storefront()
//!     .seo()
//!     .get(SettingsOptions::channel(1))
//!     .await?;
//! println!("title: {:?}", seo.page_title);
//! ```
//!
//! ## Configuration
//!
//! The API host and a `User-Agent` prefix can be overridden, which is how
//! tests point the client at a local mock server:
//!
//! ```rust
//! use bigcommerce_api::{BigCommerceConfig, Credentials, HostUrl, RestClient};
//!
//! let config = BigCommerceConfig::builder()
//!     .api_host(HostUrl::new("http://127.0.0.1:8080").unwrap())
//!     .user_agent_prefix("MyApp/1.0")
//!     .build();
//!
//! let credentials = Credentials::from_parts("abc123", "client-id", "token").unwrap();
//! let client = RestClient::with_http_client(credentials, Some(&config), reqwest::Client::new());
//! ```
//!
//! ## Errors
//!
//! - [`ConfigError`]: invalid credential or configuration values
//! - [`HttpError`]: transport failures and status codes of 300 or above
//! - [`ResourceError`]: everything a resource operation can fail with
//!
//! ## Logging
//!
//! The crate emits `tracing` events at `debug` level for every request and
//! response. It never installs a subscriber and never logs tokens.
//!
//! ## Thread Safety
//!
//! All public types are `Send + Sync`; a [`RestClient`] can be shared across
//! tasks by reference or inside an `Arc`.

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::Credentials;
pub use config::{
    AccessToken, BigCommerceConfig, BigCommerceConfigBuilder, ClientId, HostUrl, StoreHash,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, RestClient,
};

// Re-export resource layer types
pub use rest::{
    Pagination, ResourceError, ResourceResponse, Resources, Settings, SettingsOptions, Storefront,
};
