//! Resource types of the BigCommerce API.
//!
//! # Available Resources
//!
//! ## Webhook
//!
//! Event subscriptions under `/v3/hooks`.
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::resources::{Webhook, WebhookListParams};
//!
//! let hook = client.webhooks().get(18048287).await?;
//!
//! let params = WebhookListParams {
//!     scope: Some("store/order/*".to_string()),
//!     ..Default::default()
//! };
//! let hooks = client.webhooks().list(Some(&params)).await?;
//! ```
//!
//! ## `WidgetTemplate`
//!
//! Page Builder templates under `/content/widget-templates/`, addressed by
//! UUID.
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::resources::WidgetTemplate;
//!
//! let page = client.widget_templates().list(None).await?;
//! client.widget_templates().delete(page[0].uuid.clone().unwrap_or_default()).await?;
//! ```
//!
//! ## Storefront Settings
//!
//! Channel-scoped singletons in [`storefront`], reached through
//! [`RestClient::storefront`](crate::RestClient::storefront).

pub mod storefront;
mod webhook;
mod widget_template;

pub use webhook::{Webhook, WebhookListParams};
pub use widget_template::{WidgetTemplate, WidgetTemplateListParams};
