//! HTTP client types for BigCommerce API communication.
//!
//! This module provides the transport layer for making authenticated
//! requests to the BigCommerce REST API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client that attaches auth headers
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A raw response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`RestClient`]: The store client exposing the resource operations
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::{Credentials, RestClient};
//! use bigcommerce_api::clients::HttpMethod;
//!
//! let credentials = Credentials::from_parts("abc123", "client-id", "token")?;
//! let client = RestClient::new(credentials, None)?;
//!
//! let bytes = client.execute(HttpMethod::Get, "/v3/hooks", None).await?;
//! ```
//!
//! # Failure Behavior
//!
//! A status code of 300 or above is returned as [`HttpError::Response`]
//! with the raw body text. Nothing is retried.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

pub use rest::RestClient;
