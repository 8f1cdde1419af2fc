//! Authentication types for the BigCommerce API client.
//!
//! Store-level API accounts authenticate every request with two headers
//! derived from the account's client ID and access token. This module holds
//! the [`Credentials`] carrying those values together with the store hash.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::Credentials;
//!
//! let credentials = Credentials::from_parts("abc123", "client-id", "access-token").unwrap();
//! ```

mod credentials;

pub use credentials::Credentials;
