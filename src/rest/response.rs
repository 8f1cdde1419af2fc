//! Response envelope and wrapper for REST resource operations.
//!
//! Every BigCommerce v3 and content endpoint wraps its payload the same way:
//!
//! ```json
//! {
//!   "data": { ... } | [ ... ],
//!   "meta": {
//!     "pagination": {
//!       "total": 36, "count": 10, "per_page": 10,
//!       "current_page": 1, "total_pages": 4,
//!       "links": { "previous": null, "current": "?page=1&limit=10", "next": "?page=2&limit=10" }
//!     }
//!   }
//! }
//! ```
//!
//! [`Envelope`] is the wire shape; [`ResourceResponse<T>`] is what callers
//! receive. It implements `Deref<Target = T>`, so a list response can be
//! iterated directly:
//!
//! ```rust,ignore
//! let hooks = client.webhooks().list(None).await?;
//!
//! for hook in hooks.iter() {
//!     println!("{:?}", hook.scope);
//! }
//!
//! if let Some(page) = hooks.pagination().and_then(|p| p.next_page()) {
//!     // request `page` with WebhookListParams { page: Some(page), .. }
//! }
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::rest::ResourceError;

/// Navigation links of a list page, as query strings relative to the
/// collection path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationLinks {
    /// Link to the previous page.
    pub previous: Option<String>,
    /// Link to the current page.
    pub current: Option<String>,
    /// Link to the next page.
    pub next: Option<String>,
}

/// Pagination metadata of a list page. Missing fields default to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    /// Total number of items across all pages.
    pub total: u64,
    /// Number of items on this page.
    pub count: u64,
    /// Page size.
    pub per_page: u64,
    /// One-based index of this page.
    pub current_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Navigation links.
    pub links: PaginationLinks,
}

impl Pagination {
    /// Returns the number of the following page, if there is one.
    #[must_use]
    pub const fn next_page(&self) -> Option<u64> {
        if self.current_page < self.total_pages {
            Some(self.current_page + 1)
        } else {
            None
        }
    }

    /// Returns the number of the preceding page, if there is one.
    #[must_use]
    pub const fn prev_page(&self) -> Option<u64> {
        if self.current_page > 1 {
            Some(self.current_page - 1)
        } else {
            None
        }
    }
}

/// The `meta` member of an envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    /// Present on list responses.
    pub pagination: Option<Pagination>,
}

/// The outer JSON wrapper of every response body.
///
/// `data` has no default: a body without it fails to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// One resource or an array of resources.
    pub data: T,
    /// Response metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

/// A decoded response from a REST resource operation.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::{Pagination, ResourceResponse};
///
/// let response = ResourceResponse::new(
///     vec!["a", "b", "c"],
///     Some(Pagination {
///         total: 7,
///         count: 3,
///         per_page: 3,
///         current_page: 1,
///         total_pages: 3,
///         ..Default::default()
///     }),
/// );
///
/// assert_eq!(response.len(), 3);
/// assert_eq!(response.pagination().and_then(|p| p.next_page()), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceResponse<T> {
    data: T,
    pagination: Option<Pagination>,
}

impl<T> ResourceResponse<T> {
    /// Creates a new `ResourceResponse`.
    #[must_use]
    pub const fn new(data: T, pagination: Option<Pagination>) -> Self {
        Self { data, pagination }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns a reference to the inner data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns a mutable reference to the inner data.
    #[must_use]
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Returns the pagination metadata, if the response carried any.
    #[must_use]
    pub const fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    /// Returns `true` if the API reported a next page.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.pagination
            .as_ref()
            .is_some_and(|p| p.links.next.is_some() || p.next_page().is_some())
    }

    /// Returns `true` if the API reported a previous page.
    #[must_use]
    pub fn has_prev_page(&self) -> bool {
        self.pagination
            .as_ref()
            .is_some_and(|p| p.links.previous.is_some() || p.prev_page().is_some())
    }

    /// Maps the inner data to a new type, keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            pagination: self.pagination,
        }
    }
}

impl<T: DeserializeOwned> ResourceResponse<T> {
    /// Decodes a response body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] if the body is not valid JSON or
    /// `data` is missing or does not match `T`.
    pub fn from_body(body: &[u8], resource: &'static str) -> Result<Self, ResourceError> {
        let envelope: Envelope<T> = serde_json::from_slice(body)
            .map_err(|source| ResourceError::Decode { resource, source })?;

        Ok(Self {
            data: envelope.data,
            pagination: envelope.meta.and_then(|meta| meta.pagination),
        })
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

// Verify ResourceResponse is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<String>>();
    assert_send_sync::<ResourceResponse<Vec<String>>>();
};
