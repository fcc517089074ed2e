//! Page-embedded configuration.
//!
//! Pages may carry `<script id="storefront-config" type="application/json">`
//! with a partial `StorefrontConfig`. Anything missing or malformed falls
//! back to defaults.

use crate::dom;
use sf_ui_core::StorefrontConfig;
use tracing::warn;

pub const CONFIG_ELEMENT_ID: &str = "storefront-config";

pub fn load() -> StorefrontConfig {
    let raw = dom::by_id(CONFIG_ELEMENT_ID)
        .map(|el| dom::text_of(&el))
        .unwrap_or_default();
    if raw.trim().is_empty() {
        return StorefrontConfig::default();
    }

    match StorefrontConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %err, "ignoring malformed #{CONFIG_ELEMENT_ID}");
            StorefrontConfig::default()
        }
    }
}
