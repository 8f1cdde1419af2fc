//! Storefront settings under `/v3/settings/storefront/`.
//!
//! Each type here is a channel-scoped singleton served through
//! [`Settings`](crate::rest::Settings). Every field is optional: an update
//! sends only the fields that are set.

mod category;
mod robots_txt;
mod search;
mod security;
mod seo;
mod status;

pub use category::CategorySettings;
pub use robots_txt::RobotsTxtSettings;
pub use search::SearchSettings;
pub use security::{HstsSettings, SecuritySettings};
pub use seo::SeoSettings;
pub use status::StorefrontStatus;
