//! Category page settings.

use serde::{Deserialize, Serialize};

use crate::rest::StorefrontSetting;

/// Settings for category pages.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CategorySettings {
    /// Default sort order of products on category pages, e.g. `featured`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_product_sort: Option<String>,

    /// How many levels of the category tree are shown. The API exchanges
    /// this as a string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_tree_depth: Option<String>,
}

impl StorefrontSetting for CategorySettings {
    const NAME: &'static str = "CategorySettings";
    const PATH: &'static str = "/v3/settings/storefront/category";
}
