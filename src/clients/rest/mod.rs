//! Store-level REST client.
//!
//! [`RestClient`] is the entry point of the library. It owns the store
//! credentials and the shared transport, and hands out one typed handle per
//! resource group:
//!
//! - [`RestClient::webhooks`]: `/v3/hooks`
//! - [`RestClient::widget_templates`]: `/content/widget-templates/`
//! - [`RestClient::storefront`]: `/v3/settings/storefront/*`
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::{Credentials, RestClient, SettingsOptions};
//!
//! let credentials = Credentials::from_parts("abc123", "client-id", "token")?;
//! let client = RestClient::new(credentials, None)?;
//!
//! let hooks = client.webhooks().list(None).await?;
//! let seo = client
//!     .storefront()
//!     .seo()
//!     .get(SettingsOptions::channel(1))
//!     .await?;
//! ```

mod client;

pub use client::RestClient;
