//! Channel-scoped storefront settings.
//!
//! Storefront settings are singletons: one per store, optionally overridden
//! per sales channel. They have no identifier and no list; the channel is
//! selected with [`SettingsOptions`].
//!
//! ```rust,ignore
//! use bigcommerce_api::SettingsOptions;
//!
//! // Store-wide value
//! let seo = client.storefront().seo().get(SettingsOptions::default()).await?;
//!
//! // Channel override: GET /v3/settings/storefront/seo?channel_id=42
//! let seo = client.storefront().seo().get(SettingsOptions::channel(42)).await?;
//!
//! // Drop the channel overrides for two keys:
//! // DELETE /v3/settings/storefront/seo?channel_id=42&keys=page_title,meta_description
//! client
//!     .storefront()
//!     .seo()
//!     .delete(["page_title", "meta_description"], SettingsOptions::channel(42))
//!     .await?;
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::{HttpMethod, RestClient};
use crate::rest::resources::storefront::{
    CategorySettings, RobotsTxtSettings, SearchSettings, SecuritySettings, SeoSettings,
    StorefrontStatus,
};
use crate::rest::{ResourceError, ResourceResponse};

/// A singleton settings object under `/v3/settings/storefront/`.
pub trait StorefrontSetting: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The settings name used in errors and log lines (e.g., "SeoSettings").
    const NAME: &'static str;

    /// The endpoint path (e.g., `/v3/settings/storefront/seo`).
    const PATH: &'static str;
}

/// Options accepted by every settings operation.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::SettingsOptions;
///
/// assert_eq!(SettingsOptions::default().channel_id, None);
/// assert_eq!(SettingsOptions::channel(42).channel_id, Some(42));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsOptions {
    /// Sales channel to scope the call to. `None` addresses the store-wide
    /// value.
    pub channel_id: Option<u64>,
}

impl SettingsOptions {
    /// Scopes a call to one channel.
    #[must_use]
    pub const fn channel(channel_id: u64) -> Self {
        Self {
            channel_id: Some(channel_id),
        }
    }

    fn to_query(self) -> Vec<(String, String)> {
        self.channel_id
            .map(|id| ("channel_id".to_string(), id.to_string()))
            .into_iter()
            .collect()
    }
}

/// Typed operations over one storefront settings object.
pub struct Settings<'c, S> {
    client: &'c RestClient,
    _setting: PhantomData<fn() -> S>,
}

impl<S> Clone for Settings<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Settings<'_, S> {}

impl<S> fmt::Debug for Settings<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("setting", &std::any::type_name::<S>())
            .finish_non_exhaustive()
    }
}

impl<'c, S: StorefrontSetting> Settings<'c, S> {
    pub(crate) const fn new(client: &'c RestClient) -> Self {
        Self {
            client,
            _setting: PhantomData,
        }
    }

    /// Fetches the settings, for a channel when one is given.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for transport and status errors, or
    /// [`ResourceError::Decode`] if the body does not match the envelope.
    pub async fn get(
        &self,
        options: SettingsOptions,
    ) -> Result<ResourceResponse<S>, ResourceError> {
        let body = self
            .client
            .make_request(HttpMethod::Get, S::PATH, None, options.to_query())
            .await?;

        ResourceResponse::from_body(&body, S::NAME)
    }

    /// Replaces the settings and returns the stored values.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialize`], [`ResourceError::Http`], or
    /// [`ResourceError::Decode`].
    pub async fn update(
        &self,
        settings: &S,
        options: SettingsOptions,
    ) -> Result<ResourceResponse<S>, ResourceError> {
        let payload = serde_json::to_value(settings).map_err(|source| ResourceError::Serialize {
            resource: S::NAME,
            source,
        })?;

        let body = self
            .client
            .make_request(HttpMethod::Put, S::PATH, Some(payload), options.to_query())
            .await?;

        ResourceResponse::from_body(&body, S::NAME)
    }

    /// Removes the channel overrides for the named keys.
    ///
    /// Keys are sent comma-joined after the channel. An empty key list sends
    /// no `keys` parameter.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for transport and status errors.
    pub async fn delete<I, K>(&self, keys: I, options: SettingsOptions) -> Result<(), ResourceError>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut query = options.to_query();

        let keys = keys
            .into_iter()
            .map(|k| k.as_ref().to_string())
            .collect::<Vec<_>>();
        if !keys.is_empty() {
            query.push(("keys".to_string(), keys.join(",")));
        }

        self.client
            .make_request(HttpMethod::Delete, S::PATH, None, query)
            .await?;

        Ok(())
    }
}

/// The storefront settings group, obtained from [`RestClient::storefront`].
#[derive(Debug, Clone, Copy)]
pub struct Storefront<'c> {
    client: &'c RestClient,
}

impl<'c> Storefront<'c> {
    pub(crate) const fn new(client: &'c RestClient) -> Self {
        Self { client }
    }

    /// `/v3/settings/storefront/category`
    #[must_use]
    pub const fn category(&self) -> Settings<'c, CategorySettings> {
        Settings::new(self.client)
    }

    /// `/v3/settings/storefront/robotstxt`
    #[must_use]
    pub const fn robots_txt(&self) -> Settings<'c, RobotsTxtSettings> {
        Settings::new(self.client)
    }

    /// `/v3/settings/storefront/search`
    #[must_use]
    pub const fn search(&self) -> Settings<'c, SearchSettings> {
        Settings::new(self.client)
    }

    /// `/v3/settings/storefront/security`
    #[must_use]
    pub const fn security(&self) -> Settings<'c, SecuritySettings> {
        Settings::new(self.client)
    }

    /// `/v3/settings/storefront/seo`
    #[must_use]
    pub const fn seo(&self) -> Settings<'c, SeoSettings> {
        Settings::new(self.client)
    }

    /// `/v3/settings/storefront/status`
    #[must_use]
    pub const fn status(&self) -> Settings<'c, StorefrontStatus> {
        Settings::new(self.client)
    }
}

// Verify the handles are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SettingsOptions>();
    assert_send_sync::<Settings<'static, SeoSettings>>();
    assert_send_sync::<Storefront<'static>>();
};
