//! Resource-specific error types for REST API operations.
//!
//! [`ResourceError`] wraps transport failures ([`HttpError`]) and adds the
//! failures that only exist at the resource layer: decoding the JSON
//! envelope, serializing a request body, and calling an ID-addressed
//! operation on a resource that has no ID.
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::ResourceError;
//!
//! match client.webhooks().get(42).await {
//!     Ok(hook) => println!("{:?}", hook.destination),
//!     Err(e) if e.status() == Some(404) => println!("no such webhook"),
//!     Err(ResourceError::Decode { resource, source }) => {
//!         println!("unexpected {resource} payload: {source}");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use std::collections::HashMap;

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST resource operations.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::ResourceError;
///
/// let error = ResourceError::MissingId {
///     resource: "Webhook",
///     operation: "update",
/// };
/// assert_eq!(error.to_string(), "Cannot update Webhook without an id");
/// assert_eq!(error.status(), None);
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The request failed at the transport level or the API answered with a
    /// status code of 300 or above.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response body did not match the expected envelope.
    ///
    /// A missing or mistyped `data` field lands here; it is never defaulted.
    #[error("Failed to decode {resource} response: {source}")]
    Decode {
        /// The type name of the resource (e.g., "Webhook").
        resource: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The request body could not be serialized.
    #[error("Failed to serialize {resource}: {source}")]
    Serialize {
        /// The type name of the resource.
        resource: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The resource declares no path for the requested operation.
    #[error("Cannot resolve path for {resource}::{operation}")]
    PathResolutionFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted (e.g., "get", "list").
        operation: &'static str,
    },

    /// An operation that addresses a resource by ID was called on a value
    /// without one. No request is sent.
    #[error("Cannot {operation} {resource} without an id")]
    MissingId {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted (e.g., "update").
        operation: &'static str,
    },
}

impl ResourceError {
    /// Returns the HTTP status code if the API rejected the request.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Returns the field errors reported by the API, keyed by field name.
    ///
    /// BigCommerce reports validation failures as
    /// `{"status": 422, "title": "...", "errors": {"field": "message"}}`.
    /// The result is empty for any other error or body shape.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bigcommerce_api::clients::{HttpError, HttpResponseError};
    /// use bigcommerce_api::rest::ResourceError;
    ///
    /// let error = ResourceError::Http(HttpError::Response(HttpResponseError {
    ///     code: 422,
    ///     message: r#"{"status":422,"errors":{"destination":"must be https"}}"#.to_string(),
    /// }));
    ///
    /// let errors = error.validation_errors();
    /// assert_eq!(errors["destination"], vec!["must be https".to_string()]);
    /// ```
    #[must_use]
    pub fn validation_errors(&self) -> HashMap<String, Vec<String>> {
        match self {
            Self::Http(HttpError::Response(e)) => serde_json::from_str(&e.message)
                .map(|body| parse_validation_errors(&body))
                .unwrap_or_default(),
            _ => HashMap::new(),
        }
    }
}

/// Parses the `errors` member of an API error body.
///
/// Accepts an object of field names to a message or list of messages, an
/// array of messages (reported under `base`), or a single string.
fn parse_validation_errors(body: &serde_json::Value) -> HashMap<String, Vec<String>> {
    let mut result = HashMap::new();

    if let Some(errors) = body.get("errors") {
        match errors {
            serde_json::Value::Object(map) => {
                for (field, messages) in map {
                    let msgs: Vec<String> = match messages {
                        serde_json::Value::Array(arr) => arr
                            .iter()
                            .filter_map(|v| v.as_str().map(ToString::to_string))
                            .collect(),
                        serde_json::Value::String(s) => vec![s.clone()],
                        _ => vec![messages.to_string()],
                    };
                    result.insert(field.clone(), msgs);
                }
            }
            serde_json::Value::Array(arr) => {
                let msgs: Vec<String> = arr
                    .iter()
                    .filter_map(|v| v.as_str().map(ToString::to_string))
                    .collect();
                if !msgs.is_empty() {
                    result.insert("base".to_string(), msgs);
                }
            }
            serde_json::Value::String(s) => {
                result.insert("base".to_string(), vec![s.clone()]);
            }
            _ => {}
        }
    }

    result
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
