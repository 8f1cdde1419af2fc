use serde::{Deserialize, Serialize};

use crate::rest::StorefrontSetting;

/// Maintenance and pre-launch messaging of the storefront.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StorefrontStatus {
    /// Message shown while the store is down for maintenance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub down_for_maintenance: Option<String>,

    /// Message shown before the store launches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prelaunch_message: Option<String>,

    /// Password that unlocks the storefront before launch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prelaunch_password: Option<String>,
}

impl StorefrontSetting for StorefrontStatus {
    const NAME: &'static str = "StorefrontStatus";
    const PATH: &'static str = "/v3/settings/storefront/status";
}
