//! Storefront security settings.
//!
//! Covers HTTPS enforcement, the Content-Security-Policy header, and
//! HTTP Strict Transport Security.

use serde::{Deserialize, Serialize};

use crate::rest::StorefrontSetting;

/// HTTP Strict Transport Security options.
///
/// The API spells the last field in camel case (`includeSubDomains`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct HstsSettings {
    /// Whether the `Strict-Transport-Security` header is sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// The `max-age` directive, in months.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age_months: Option<i64>,

    /// Whether the policy covers subdomains.
    #[serde(rename = "includeSubDomains", skip_serializing_if = "Option::is_none")]
    pub include_sub_domains: Option<bool>,
}

/// Storefront security settings.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::resources::storefront::{HstsSettings, SecuritySettings};
///
/// let settings = SecuritySettings {
///     sitewide_https_enabled: Some(true),
///     hsts: Some(HstsSettings {
///         enabled: Some(true),
///         max_age_months: Some(6),
///         include_sub_domains: Some(false),
///     }),
///     ..Default::default()
/// };
///
/// let body = serde_json::to_value(&settings).unwrap();
/// assert_eq!(body["hsts"]["includeSubDomains"], false);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SecuritySettings {
    /// Whether every storefront page is served over HTTPS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sitewide_https_enabled: Option<bool>,

    /// The Content-Security-Policy header value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csp_header: Option<String>,

    /// HSTS options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hsts: Option<HstsSettings>,
}

impl StorefrontSetting for SecuritySettings {
    const NAME: &'static str = "SecuritySettings";
    const PATH: &'static str = "/v3/settings/storefront/security";
}
