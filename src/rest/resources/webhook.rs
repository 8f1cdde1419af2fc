//! Webhook resource implementation.
//!
//! A webhook subscribes a destination URL to store events such as
//! `store/order/*` or `store/product/updated`.
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::resources::{Webhook, WebhookListParams};
//!
//! let hook = client
//!     .webhooks()
//!     .create(&Webhook::new("store/order/*", "https://example.com/hook"))
//!     .await?;
//! println!("created webhook {:?}", hook.id);
//!
//! let params = WebhookListParams {
//!     is_active: Some(true),
//!     ..Default::default()
//! };
//! let active = client.webhooks().list(Some(&params)).await?;
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// A webhook subscription on a store.
///
/// # Fields
///
/// ## Read-Only Fields
/// - `id`, `client_id`, `store_hash`
/// - `created_at`, `updated_at` (unix seconds)
///
/// ## Writable Fields
/// - `scope` - The event the webhook fires on
/// - `destination` - The HTTPS URL events are posted to
/// - `is_active` - Whether events are delivered
/// - `headers` - Extra headers sent with every delivery
///
/// Absent fields are left out of request bodies, so a freshly built webhook
/// posts only what was set.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Webhook {
    /// The unique identifier of the webhook.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Client ID of the API account that created the webhook.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    /// Hash of the store the webhook belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_hash: Option<String>,

    /// Creation time, in seconds since the unix epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,

    /// Last modification time, in seconds since the unix epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,

    /// The event scope, e.g. `store/order/*`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// The URL events are delivered to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    /// Whether events are delivered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    /// Headers added to every delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
}

impl Webhook {
    /// Creates an active webhook for `scope` delivering to `destination`.
    ///
    /// These are the only fields the API requires on create.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bigcommerce_api::rest::resources::Webhook;
    ///
    /// let hook = Webhook::new("store/order/*", "https://example.com/hook");
    /// assert_eq!(
    ///     serde_json::to_value(&hook).unwrap(),
    ///     serde_json::json!({
    ///         "scope": "store/order/*",
    ///         "destination": "https://example.com/hook",
    ///         "is_active": true
    ///     })
    /// );
    /// ```
    #[must_use]
    pub fn new(scope: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            scope: Some(scope.into()),
            destination: Some(destination.into()),
            is_active: Some(true),
            ..Default::default()
        }
    }
}

impl RestResource for Webhook {
    type Id = i64;
    type ListParams = WebhookListParams;

    const NAME: &'static str = "Webhook";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Get, "/v3/hooks/{id}"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::List, "/v3/hooks"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, "/v3/hooks"),
        ResourcePath::new(HttpMethod::Put, ResourceOperation::Update, "/v3/hooks/{id}"),
        ResourcePath::new(HttpMethod::Delete, ResourceOperation::Delete, "/v3/hooks/{id}"),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Parameters for listing webhooks.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WebhookListParams {
    /// One-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,

    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,

    /// Filter by active state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    /// Filter by scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// Filter by destination URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}
