use serde::{Deserialize, Serialize};

use crate::rest::StorefrontSetting;

/// The storefront `robots.txt` contents.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RobotsTxtSettings {
    /// `robots.txt` served over HTTPS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robots_txt_ssl: Option<String>,
}

impl StorefrontSetting for RobotsTxtSettings {
    const NAME: &'static str = "RobotsTxtSettings";
    const PATH: &'static str = "/v3/settings/storefront/robotstxt";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_robots_txt_round_trip() {
        let settings = RobotsTxtSettings {
            robots_txt_ssl: Some("User-agent: *\nDisallow: /cart.php\n".to_string()),
        };

        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(serde_json::from_str::<RobotsTxtSettings>(&json).unwrap(), settings);
    }
}
