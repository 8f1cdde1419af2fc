//! Error types for the BigCommerce API client.
//!
//! This module contains error types used throughout the crate for credential
//! and configuration validation.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::{StoreHash, ConfigError};
//!
//! let result = StoreHash::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyStoreHash)));
//! ```

use thiserror::Error;

/// Errors that can occur while building credentials or configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Store hash cannot be empty.
    #[error("Store hash cannot be empty. Please provide the hash from your store's API path.")]
    EmptyStoreHash,

    /// Store hash contains characters other than ASCII letters and digits.
    #[error("Invalid store hash '{hash}'. Expected only ASCII letters and digits (e.g., 'abc123xyz').")]
    InvalidStoreHash {
        /// The invalid hash that was provided.
        hash: String,
    },

    /// Client ID cannot be empty.
    #[error("Client ID cannot be empty. Please provide the client ID of your API account.")]
    EmptyClientId,

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide the access token of your API account.")]
    EmptyAccessToken,

    /// API host URL is invalid.
    #[error("Invalid API host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.bigcommerce.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
