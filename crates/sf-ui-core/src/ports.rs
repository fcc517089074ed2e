//! Boundaries to the outside world: the backend and the page.
//!
//! `StorefrontApi` is implemented over `fetch` in the browser and by
//! recording fakes in tests. `UiPort` receives the DOM changes the actions
//! decide on.

use crate::badge::{BadgeCount, BadgeKind};
use crate::error::ApiError;
use crate::toast::Toast;
use async_trait::async_trait;
use sf_api_types::{ActionResponse, Page, ProductId};

#[async_trait(?Send)]
pub trait StorefrontApi {
    /// POST `body` as JSON to `endpoint` and decode the response envelope.
    ///
    /// `success: false` is not an error at this level.
    async fn post_json(
        &self,
        endpoint: &'static str,
        body: serde_json::Value,
    ) -> Result<ActionResponse, ApiError>;
}

/// A change to the page decided by an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Badge(BadgeKind, BadgeCount),
    Notify(Toast),
    Navigate(Page),
    Reload,
    /// Mark the triggering control as in / out of the wishlist.
    WishlistMarker { product_id: ProductId, active: bool },
    /// Disable the submit control and show the processing label.
    CheckoutPending,
    /// Re-enable the submit control with its original label.
    CheckoutRestored,
}

pub trait UiPort {
    fn apply(&self, effect: Effect);

    /// Ask the shopper to confirm; `false` aborts the action.
    fn confirm(&self, message: &str) -> bool;
}
