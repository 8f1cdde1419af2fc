//! API account credentials.
//!
//! This module provides the [`Credentials`] type holding everything needed to
//! authenticate requests against a single store.

use crate::config::{AccessToken, ClientId, StoreHash};
use crate::error::ConfigError;

/// Credentials of a store-level API account.
///
/// Credentials are immutable once constructed. The store hash selects the
/// store in every request path; the client ID and access token are sent as the
/// `X-Auth-Client` and `X-Auth-Token` headers.
///
/// # Thread Safety
///
/// `Credentials` is `Send + Sync`, making it safe to share across threads.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::{AccessToken, ClientId, Credentials, StoreHash};
///
/// let credentials = Credentials::new(
///     StoreHash::new("abc123").unwrap(),
///     ClientId::new("client-id").unwrap(),
///     AccessToken::new("access-token").unwrap(),
/// );
///
/// assert_eq!(credentials.store_hash().as_ref(), "abc123");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    store_hash: StoreHash,
    client_id: ClientId,
    access_token: AccessToken,
}

impl Credentials {
    /// Creates credentials from validated parts.
    #[must_use]
    pub const fn new(
        store_hash: StoreHash,
        client_id: ClientId,
        access_token: AccessToken,
    ) -> Self {
        Self {
            store_hash,
            client_id,
            access_token,
        }
    }

    /// Validates raw strings and creates credentials from them.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] produced by the newtype constructors.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bigcommerce_api::{ConfigError, Credentials};
    ///
    /// let credentials = Credentials::from_parts("abc123", "client-id", "token").unwrap();
    /// assert_eq!(credentials.client_id().as_ref(), "client-id");
    ///
    /// let result = Credentials::from_parts("abc123", "client-id", "");
    /// assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
    /// ```
    pub fn from_parts(
        store_hash: impl Into<String>,
        client_id: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(
            StoreHash::new(store_hash)?,
            ClientId::new(client_id)?,
            AccessToken::new(access_token)?,
        ))
    }

    /// Returns the store hash.
    #[must_use]
    pub const fn store_hash(&self) -> &StoreHash {
        &self.store_hash
    }

    /// Returns the API account client ID.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the API account access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }
}

// Verify Credentials is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Credentials>();
};
