use serde::{Deserialize, Serialize};

use crate::rest::StorefrontSetting;

/// Settings for the storefront search results page.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SearchSettings {
    /// Default sort order of search results, e.g. `relevance`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_product_sort: Option<String>,
}

impl StorefrontSetting for SearchSettings {
    const NAME: &'static str = "SearchSettings";
    const PATH: &'static str = "/v3/settings/storefront/search";
}
