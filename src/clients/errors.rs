//! HTTP-specific error types for the BigCommerce API client.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: The API answered with a status code of 300 or above
//! - [`InvalidHttpRequestError`]: A request failed validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! None of these are retried automatically.
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::clients::{HttpError, HttpMethod};
//!
//! match client.execute(HttpMethod::Get, "/v3/hooks", None).await {
//!     Ok(bytes) => println!("{} bytes", bytes.len()),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(HttpError::Body(e)) => println!("Failed reading body: {e}"),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request receives a status code of 300 or above.
///
/// The message holds the raw response body so API validation details
/// are preserved verbatim.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 422,
///     message: r#"{"title":"Input is invalid"}"#.to_string(),
/// };
///
/// assert_eq!(error.to_string(), r#"HTTP 422: {"title":"Input is invalid"}"#);
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body text.
    pub message: String,
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A response with status code 300 or above.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network, TLS, or connection error while sending the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body could not be read to completion.
    #[error("Failed to read response body: {0}")]
    Body(reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code for response errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}
