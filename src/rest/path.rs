//! Path building infrastructure for REST resources.
//!
//! Every collection resource declares a table of [`ResourcePath`]s, one per
//! operation. The generic [`Resources`](crate::rest::Resources) handle looks
//! up the path for the operation it is performing and interpolates the
//! resource identifier into it.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::rest::{build_path, get_path, ResourceOperation, ResourcePath};
//! use bigcommerce_api::clients::HttpMethod;
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::List, "/v3/hooks"),
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::Get, "/v3/hooks/{id}"),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Get).unwrap();
//!
//! let mut ids = HashMap::new();
//! ids.insert("id", 42);
//! assert_eq!(build_path(path.template, &ids), "/v3/hooks/42");
//! ```

use crate::clients::HttpMethod;
use std::collections::HashMap;
use std::fmt::Display;

/// Operations that can be performed on a collection resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Fetch a single resource by ID (GET /resources/{id}).
    Get,
    /// List one page of resources (GET /resources).
    List,
    /// Create a new resource (POST /resources).
    Create,
    /// Replace an existing resource (PUT /resources/{id}).
    Update,
    /// Delete a resource (DELETE /resources/{id}).
    Delete,
}

impl ResourceOperation {
    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::List => "list",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// A path configuration for a REST resource operation.
///
/// Templates use `{name}` placeholders, e.g. `/v3/hooks/{id}` or
/// `/content/widget-templates/{uuid}`. Templates are relative to the store
/// root and keep whatever trailing slash the API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// The URL template with `{name}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            template,
        }
    }
}

/// Returns the path declared for an operation, or `None` if the resource
/// does not support it.
#[must_use]
pub fn get_path(paths: &[ResourcePath], operation: ResourceOperation) -> Option<&ResourcePath> {
    paths.iter().find(|p| p.operation == operation)
}

/// Builds a URL path from a template by interpolating IDs.
///
/// Each value is percent-encoded so an identifier can never change the
/// shape of the path.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::build_path;
/// use std::collections::HashMap;
///
/// let mut ids = HashMap::new();
/// ids.insert("uuid", "4d6b7a1e-0000-4000-8000-000000000001");
///
/// assert_eq!(
///     build_path("/content/widget-templates/{uuid}", &ids),
///     "/content/widget-templates/4d6b7a1e-0000-4000-8000-000000000001"
/// );
/// ```
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        let value = value.to_string();
        result = result.replace(&placeholder, &urlencoding::encode(&value));
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
