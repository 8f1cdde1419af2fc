//! REST resource infrastructure for the BigCommerce API.
//!
//! This module provides the typed layer on top of
//! [`RestClient`](crate::RestClient):
//!
//! - **[`RestResource`] trait**: describes a collection resource (name, paths, ID)
//! - **[`Resources<R>`]**: `get`, `list`, `create`, `update`, and `delete` for any resource
//! - **[`StorefrontSetting`] trait** and **[`Settings<S>`]**: channel-scoped singletons
//! - **[`ResourceResponse<T>`]**: a Deref-based wrapper carrying pagination metadata
//! - **[`ResourceError`]**: errors for resource operations
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::{Credentials, RestClient, SettingsOptions};
//! use bigcommerce_api::rest::resources::Webhook;
//!
//! let client = RestClient::new(Credentials::from_parts("abc123", "id", "token")?, None)?;
//!
//! // Fetch one page of webhooks
//! let hooks = client.webhooks().list(None).await?;
//! for hook in hooks.iter() {
//!     println!("{:?} -> {:?}", hook.scope, hook.destination);
//! }
//!
//! // Create one
//! let created = client
//!     .webhooks()
//!     .create(&Webhook::new("store/cart/*", "https://example.com/cart"))
//!     .await?;
//!
//! // Read a channel's robots.txt
//! let robots = client
//!     .storefront()
//!     .robots_txt()
//!     .get(SettingsOptions::channel(1))
//!     .await?;
//! ```

mod errors;
mod path;
mod resource;
mod response;
mod settings;

pub mod resources;

pub use errors::ResourceError;
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use resource::{serialize_to_query, Resources, RestResource};
pub use response::{Envelope, Meta, Pagination, PaginationLinks, ResourceResponse};
pub use settings::{Settings, SettingsOptions, Storefront, StorefrontSetting};
