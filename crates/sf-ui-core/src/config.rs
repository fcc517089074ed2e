//! Storefront front-end configuration.
//!
//! Every field has a default so pages can embed a partial JSON object (or
//! nothing at all).

use serde::{Deserialize, Serialize};
use sf_api_types::Page;

pub const DEFAULT_TOAST_TTL_MS: u32 = 3_000;
pub const DEFAULT_MAX_QUANTITY: u32 = 999;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Prefix for API paths. Empty means same origin.
    pub api_base: String,
    pub toast_ttl_ms: u32,
    /// Stepper ceiling used when the quantity input declares no `max`.
    pub default_max_quantity: u32,
    /// Path of the wishlist listing page.
    pub wishlist_path: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            toast_ttl_ms: DEFAULT_TOAST_TTL_MS,
            default_max_quantity: DEFAULT_MAX_QUANTITY,
            wishlist_path: Page::Wishlist.path(),
        }
    }
}

impl StorefrontConfig {
    /// Parse an embedded JSON config block.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut config: StorefrontConfig = serde_json::from_str(raw)?;
        config.api_base = config.api_base.trim().trim_end_matches('/').to_owned();
        Ok(config)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}
