//! REST resource trait and the generic collection handle.
//!
//! A collection resource (webhooks, widget templates) is a plain serde
//! struct that implements [`RestResource`]: it names itself, declares one
//! [`ResourcePath`] per supported operation, and exposes its identifier.
//! [`Resources<R>`] then provides `get`, `list`, `create`, `update`, and
//! `delete` for it, all sharing one request/decode cycle.
//!
//! # Implementing a Resource
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::{RestResource, ResourcePath, ResourceOperation};
//! use bigcommerce_api::clients::HttpMethod;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Default, Serialize, Deserialize)]
//! pub struct Banner {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub id: Option<i64>,
//!     pub content: Option<String>,
//! }
//!
//! impl RestResource for Banner {
//!     type Id = i64;
//!     type ListParams = ();
//!
//!     const NAME: &'static str = "Banner";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::List, "/v2/banners"),
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::Get, "/v2/banners/{id}"),
//!     ];
//!
//!     fn get_id(&self) -> Option<i64> {
//!         self.id
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::fmt::{self, Display};
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::clients::RestClient;
use crate::rest::{
    build_path, get_path, ResourceError, ResourceOperation, ResourcePath, ResourceResponse,
};

/// A remote entity addressed by an identifier inside a collection.
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The type of the resource's identifier.
    type Id: Display + Clone + Send + Sync;

    /// Filters and paging accepted by `list`. Use `()` if there are none.
    type ListParams: Serialize + Default + Send + Sync;

    /// The resource name used in errors and log lines (e.g., "Webhook").
    const NAME: &'static str;

    /// The placeholder the identifier fills in item paths.
    const ID_FIELD: &'static str = "id";

    /// Available paths for this resource, one per supported operation.
    const PATHS: &'static [ResourcePath];

    /// Returns the resource's ID if it exists.
    ///
    /// Returns `None` for new resources that haven't been created yet.
    fn get_id(&self) -> Option<Self::Id>;
}

/// Typed operations over one collection resource.
///
/// Obtained from [`RestClient::webhooks`] or
/// [`RestClient::widget_templates`]; borrows the client.
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_api::rest::resources::Webhook;
///
/// let hook = client
///     .webhooks()
///     .create(&Webhook::new("store/order/*", "https://example.com/hook"))
///     .await?;
///
/// let mut hook = hook.into_inner();
/// hook.is_active = Some(false);
/// client.webhooks().update(&hook).await?;
///
/// client.webhooks().delete(hook.id.unwrap_or_default()).await?;
/// ```
pub struct Resources<'c, R> {
    client: &'c RestClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for Resources<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Resources<'_, R> {}

impl<R> fmt::Debug for Resources<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resources")
            .field("resource", &std::any::type_name::<R>())
            .finish_non_exhaustive()
    }
}

impl<'c, R: RestResource> Resources<'c, R> {
    pub(crate) const fn new(client: &'c RestClient) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    /// Fetches a single resource by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for transport and status errors, or
    /// [`ResourceError::Decode`] if the body does not match the envelope.
    pub async fn get(&self, id: impl Into<R::Id>) -> Result<ResourceResponse<R>, ResourceError> {
        let id = id.into();
        let (path, url) = item_path::<R>(ResourceOperation::Get, &id)?;

        let body = self
            .client
            .make_request(path.http_method, &url, None, Vec::new())
            .await?;

        ResourceResponse::from_body(&body, R::NAME)
    }

    /// Fetches one page of the collection.
    ///
    /// The pagination metadata of the page is available through
    /// [`ResourceResponse::pagination`].
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialize`] if the filters cannot be
    /// encoded, [`ResourceError::Http`] for transport and status errors, or
    /// [`ResourceError::Decode`] if the body does not match the envelope.
    pub async fn list(
        &self,
        params: Option<&R::ListParams>,
    ) -> Result<ResourceResponse<Vec<R>>, ResourceError> {
        let path = resolve_path::<R>(ResourceOperation::List)?;

        let query = params
            .map(|p| serialize_to_query(p, R::NAME))
            .transpose()?
            .unwrap_or_default();

        let body = self
            .client
            .make_request(path.http_method, path.template, None, query)
            .await?;

        ResourceResponse::from_body(&body, R::NAME)
    }

    /// Creates a resource and returns it as stored by the API, including
    /// server-assigned fields.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialize`], [`ResourceError::Http`], or
    /// [`ResourceError::Decode`].
    pub async fn create(&self, resource: &R) -> Result<ResourceResponse<R>, ResourceError> {
        let path = resolve_path::<R>(ResourceOperation::Create)?;
        let payload = to_body(resource)?;

        let body = self
            .client
            .make_request(path.http_method, path.template, Some(payload), Vec::new())
            .await?;

        ResourceResponse::from_body(&body, R::NAME)
    }

    /// Replaces a resource, addressing it by its own ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] without sending anything if the
    /// resource has no ID or an empty one; otherwise as [`Resources::create`].
    pub async fn update(&self, resource: &R) -> Result<ResourceResponse<R>, ResourceError> {
        let id = resource.get_id().ok_or(ResourceError::MissingId {
            resource: R::NAME,
            operation: ResourceOperation::Update.as_str(),
        })?;
        let (path, url) = item_path::<R>(ResourceOperation::Update, &id)?;
        let payload = to_body(resource)?;

        let body = self
            .client
            .make_request(path.http_method, &url, Some(payload), Vec::new())
            .await?;

        ResourceResponse::from_body(&body, R::NAME)
    }

    /// Deletes a resource by ID. Any response body is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for transport and status errors.
    pub async fn delete(&self, id: impl Into<R::Id>) -> Result<(), ResourceError> {
        let id = id.into();
        let (path, url) = item_path::<R>(ResourceOperation::Delete, &id)?;

        self.client
            .make_request(path.http_method, &url, None, Vec::new())
            .await?;

        Ok(())
    }
}

fn resolve_path<R: RestResource>(
    operation: ResourceOperation,
) -> Result<&'static ResourcePath, ResourceError> {
    get_path(R::PATHS, operation).ok_or(ResourceError::PathResolutionFailed {
        resource: R::NAME,
        operation: operation.as_str(),
    })
}

/// Resolves the item path for `id`. An empty identifier would collapse the
/// path onto the collection, so it counts as missing.
fn item_path<R: RestResource>(
    operation: ResourceOperation,
    id: &R::Id,
) -> Result<(&'static ResourcePath, String), ResourceError> {
    let id = id.to_string();
    if id.is_empty() {
        return Err(ResourceError::MissingId {
            resource: R::NAME,
            operation: operation.as_str(),
        });
    }

    let path = resolve_path::<R>(operation)?;

    let mut ids = HashMap::new();
    ids.insert(R::ID_FIELD, id);

    Ok((path, build_path(path.template, &ids)))
}

fn to_body<R: RestResource>(resource: &R) -> Result<Value, ResourceError> {
    serde_json::to_value(resource).map_err(|source| ResourceError::Serialize {
        resource: R::NAME,
        source,
    })
}

/// Flattens a params struct into query pairs.
///
/// `None` fields are skipped, arrays are comma-joined, and nested objects
/// are sent as JSON text. Pairs come out in key order.
///
/// # Errors
///
/// Returns [`ResourceError::Serialize`] if the params cannot be serialized.
pub fn serialize_to_query<T: Serialize>(
    params: &T,
    resource: &'static str,
) -> Result<Vec<(String, String)>, ResourceError> {
    let value = serde_json::to_value(params)
        .map_err(|source| ResourceError::Serialize { resource, source })?;

    let mut query = Vec::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => query.push((key, s)),
                Value::Number(n) => query.push((key, n.to_string())),
                Value::Bool(b) => query.push((key, b.to_string())),
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.push((key, values.join(",")));
                    }
                }
                Value::Object(_) => query.push((key, val.to_string())),
            }
        }
    }

    Ok(query)
}

// Verify Resources is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Resources<'static, crate::rest::resources::Webhook>>();
};
