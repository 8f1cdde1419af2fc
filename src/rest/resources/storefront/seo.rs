use serde::{Deserialize, Serialize};

use crate::rest::StorefrontSetting;

/// Store-level SEO settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SeoSettings {
    /// The `<title>` of the home page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,

    /// The home page meta description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,

    /// Redirect policy between `www.` and the bare domain, e.g. `www`,
    /// `no-www`, or `none`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub www_redirect: Option<String>,
}

impl StorefrontSetting for SeoSettings {
    const NAME: &'static str = "SeoSettings";
    const PATH: &'static str = "/v3/settings/storefront/seo";
}
