//! Configuration types for the BigCommerce API client.
//!
//! This module provides the validated credential newtypes and the optional
//! client configuration.
//!
//! # Overview
//!
//! - [`BigCommerceConfig`]: Optional settings for the HTTP client
//! - [`BigCommerceConfigBuilder`]: A builder for constructing [`BigCommerceConfig`] instances
//! - [`StoreHash`]: A validated store hash newtype
//! - [`ClientId`]: A validated API account client ID
//! - [`AccessToken`]: A validated access token newtype with masked debug output
//! - [`HostUrl`]: A validated API host URL
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::{BigCommerceConfig, HostUrl};
//!
//! let config = BigCommerceConfig::builder()
//!     .api_host(HostUrl::new("https://api.bigcommerce.com").unwrap())
//!     .user_agent_prefix("MyApp/1.0")
//!     .build();
//! ```

mod newtypes;

pub use newtypes::{AccessToken, ClientId, HostUrl, StoreHash};

/// The production API host.
pub const DEFAULT_API_HOST: &str = "https://api.bigcommerce.com";

/// Optional configuration for the API client.
///
/// Every field has a default, so `BigCommerceConfig::default()` targets the
/// production API with the stock `User-Agent`.
///
/// # Thread Safety
///
/// `BigCommerceConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct BigCommerceConfig {
    api_host: HostUrl,
    user_agent_prefix: Option<String>,
}

impl BigCommerceConfig {
    /// Creates a new builder for constructing a `BigCommerceConfig`.
    #[must_use]
    pub fn builder() -> BigCommerceConfigBuilder {
        BigCommerceConfigBuilder::new()
    }

    /// Returns the API host the client sends requests to.
    #[must_use]
    pub const fn api_host(&self) -> &HostUrl {
        &self.api_host
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl Default for BigCommerceConfig {
    fn default() -> Self {
        BigCommerceConfigBuilder::new().build()
    }
}

// Verify BigCommerceConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BigCommerceConfig>();
};

/// Builder for constructing [`BigCommerceConfig`] instances.
///
/// # Defaults
///
/// - `api_host`: [`DEFAULT_API_HOST`]
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::{BigCommerceConfig, HostUrl};
///
/// let config = BigCommerceConfig::builder()
///     .api_host(HostUrl::new("http://localhost:8080").unwrap())
///     .build();
///
/// assert_eq!(config.api_host().as_ref(), "http://localhost:8080");
/// ```
#[derive(Debug, Default)]
pub struct BigCommerceConfigBuilder {
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl BigCommerceConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the API host (proxies, test servers).
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`BigCommerceConfig`].
    #[must_use]
    pub fn build(self) -> BigCommerceConfig {
        let api_host = self.api_host.unwrap_or_else(HostUrl::production);

        BigCommerceConfig {
            api_host,
            user_agent_prefix: self.user_agent_prefix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_targets_production_host() {
        let config = BigCommerceConfig::default();
        assert_eq!(config.api_host().as_ref(), DEFAULT_API_HOST);
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_production_host_matches_parsed_constant() {
        assert_eq!(HostUrl::production(), HostUrl::new(DEFAULT_API_HOST).unwrap());
    }

    #[test]
    fn test_builder_overrides_api_host() {
        let config = BigCommerceConfig::builder()
            .api_host(HostUrl::new("http://localhost:3000").unwrap())
            .build();
        assert_eq!(config.api_host().as_ref(), "http://localhost:3000");
    }

    #[test]
    fn test_builder_sets_user_agent_prefix() {
        let config = BigCommerceConfig::builder()
            .user_agent_prefix("MyApp/1.0")
            .build();
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BigCommerceConfig>();
    }
}
