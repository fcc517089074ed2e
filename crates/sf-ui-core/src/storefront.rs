//! Storefront actions.
//!
//! Each action is at most one backend round trip. Outcomes are reported to
//! the page as [`Effect`]s through a [`UiPort`]; nothing here touches the DOM.

use crate::badge::{BadgeCount, BadgeKind};
use crate::config::StorefrontConfig;
use crate::error::ApiError;
use crate::inflight::{ActionKey, InFlight};
use crate::ports::{Effect, StorefrontApi, UiPort};
use crate::quantity;
use crate::toast::{Toast, ToastKind};
use crate::wishlist::WishlistState;
use serde::Serialize;
use sf_api_types::{
    ActionResponse, CART_ADD, CART_REMOVE, CART_UPDATE, CHECKOUT_COMPLETE, CartAddRequest,
    CartUpdateRequest, CheckoutRequest, Page, ProductId, ProductRequest, WISHLIST_ADD,
    WISHLIST_REMOVE,
};
use std::cell::RefCell;
use tracing::{debug, warn};

pub const REMOVE_CONFIRM: &str = "Remove this item from cart?";

pub struct Storefront<A> {
    api: A,
    config: StorefrontConfig,
    wishlist: RefCell<WishlistState>,
    inflight: InFlight,
}

impl<A: StorefrontApi> Storefront<A> {
    pub fn new(api: A, config: StorefrontConfig) -> Self {
        Self {
            api,
            config,
            wishlist: RefCell::new(WishlistState::default()),
            inflight: InFlight::default(),
        }
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn seed_wishlist(&self, product_id: ProductId, member: bool) {
        self.wishlist.borrow_mut().seed(product_id, member);
    }

    pub fn wishlist_membership(&self, product_id: &ProductId) -> Option<bool> {
        self.wishlist.borrow().known(product_id)
    }

    pub fn is_busy(&self, key: &ActionKey) -> bool {
        self.inflight.is_active(key)
    }

    /// Re-apply the counts the page was rendered with.
    pub fn refresh_badges(&self, ui: &dyn UiPort, cart_text: Option<&str>, wishlist_text: Option<&str>) {
        if let Some(text) = cart_text {
            ui.apply(Effect::Badge(BadgeKind::Cart, BadgeCount::parse(text)));
        }
        if let Some(text) = wishlist_text {
            ui.apply(Effect::Badge(BadgeKind::Wishlist, BadgeCount::parse(text)));
        }
    }

    pub fn notify(&self, ui: &dyn UiPort, message: &str, kind: ToastKind) {
        ui.apply(Effect::Notify(Toast {
            message: message.to_owned(),
            kind,
        }));
    }

    pub fn view_product(&self, ui: &dyn UiPort, product_id: ProductId) {
        ui.apply(Effect::Navigate(Page::Product(product_id)));
    }

    /// Stepper value for the `#quantity` input after adding `delta`.
    pub fn change_quantity(&self, raw_value: Option<&str>, raw_max: Option<&str>, delta: i64) -> u32 {
        quantity::step(raw_value, raw_max, delta, self.config.default_max_quantity)
    }

    pub async fn add_to_cart(&self, ui: &dyn UiPort, product_id: ProductId) {
        self.add(ui, product_id, 1, "Added to cart!".to_owned()).await;
    }

    pub async fn add_to_cart_with_quantity(
        &self,
        ui: &dyn UiPort,
        product_id: ProductId,
        raw_quantity: Option<&str>,
    ) {
        let quantity = quantity::requested(raw_quantity);
        let message = format!("Added {quantity} item(s) to cart!");
        self.add(ui, product_id, quantity, message).await;
    }

    async fn add(&self, ui: &dyn UiPort, product_id: ProductId, quantity: i64, message: String) {
        let Some(_guard) = self.inflight.try_begin(ActionKey::Cart(product_id.clone())) else {
            debug!(%product_id, "cart request already in flight");
            return;
        };

        let body = CartAddRequest {
            product_id,
            quantity,
        };
        match self.send(CART_ADD, &body).await {
            Ok(resp) => {
                ui.apply(Effect::Notify(Toast::success(message)));
                apply_cart_count(ui, &resp);
            }
            Err(err) => fail(ui, "add_to_cart", err, "Error adding to cart"),
        }
    }

    pub async fn buy_now(&self, ui: &dyn UiPort, product_id: ProductId, raw_quantity: Option<&str>) {
        let Some(_guard) = self.inflight.try_begin(ActionKey::Cart(product_id.clone())) else {
            debug!(%product_id, "cart request already in flight");
            return;
        };

        let body = CartAddRequest {
            product_id,
            quantity: quantity::requested(raw_quantity),
        };
        match self.send(CART_ADD, &body).await {
            Ok(_) => ui.apply(Effect::Navigate(Page::Checkout)),
            Err(err) => fail(ui, "buy_now", err, "Error processing request"),
        }
    }

    /// Set a cart line's quantity. Anything below one is a removal.
    pub async fn update_cart_quantity(&self, ui: &dyn UiPort, product_id: ProductId, quantity: i64) {
        if quantity < 1 {
            self.remove_from_cart(ui, product_id).await;
            return;
        }

        let Some(_guard) = self.inflight.try_begin(ActionKey::Cart(product_id.clone())) else {
            debug!(%product_id, "cart request already in flight");
            return;
        };

        let body = CartUpdateRequest {
            product_id,
            quantity,
        };
        match self.send(CART_UPDATE, &body).await {
            Ok(resp) => {
                apply_cart_count(ui, &resp);
                ui.apply(Effect::Reload);
            }
            Err(err) => fail(ui, "update_cart_quantity", err, "Error updating cart"),
        }
    }

    pub async fn remove_from_cart(&self, ui: &dyn UiPort, product_id: ProductId) {
        let Some(_guard) = self.inflight.try_begin(ActionKey::Cart(product_id.clone())) else {
            debug!(%product_id, "cart request already in flight");
            return;
        };
        if !ui.confirm(REMOVE_CONFIRM) {
            debug!(%product_id, "cart removal declined");
            return;
        }

        match self.send(CART_REMOVE, &ProductRequest { product_id }).await {
            Ok(resp) => {
                ui.apply(Effect::Notify(Toast::success("Removed from cart")));
                apply_cart_count(ui, &resp);
                ui.apply(Effect::Reload);
            }
            Err(err) => fail(ui, "remove_from_cart", err, "Error removing item"),
        }
    }

    /// Flip wishlist membership for a product.
    ///
    /// `trigger_active` is only consulted when the product has no recorded
    /// membership yet. `current_path` decides whether a removal reloads the
    /// wishlist listing.
    pub async fn toggle_wishlist(
        &self,
        ui: &dyn UiPort,
        product_id: ProductId,
        trigger_active: bool,
        current_path: &str,
    ) {
        let Some(_guard) = self.inflight.try_begin(ActionKey::Wishlist(product_id.clone())) else {
            debug!(%product_id, "wishlist request already in flight");
            return;
        };

        let member = self.wishlist.borrow().is_member(&product_id, trigger_active);
        let endpoint = if member { WISHLIST_REMOVE } else { WISHLIST_ADD };
        let body = ProductRequest {
            product_id: product_id.clone(),
        };

        let resp = match self.send(endpoint, &body).await {
            Ok(resp) => resp,
            Err(err) => {
                fail(ui, "toggle_wishlist", err, "Error updating wishlist");
                return;
            }
        };

        self.wishlist.borrow_mut().set(product_id.clone(), !member);
        let wishlist_count = resp.wishlist_count.map(BadgeCount);

        if member {
            ui.apply(Effect::Notify(Toast::success("Removed from wishlist")));
            if current_path == self.config.wishlist_path {
                if let Some(count) = wishlist_count {
                    ui.apply(Effect::Badge(BadgeKind::Wishlist, count));
                }
                ui.apply(Effect::Reload);
                return;
            }
        } else {
            ui.apply(Effect::Notify(Toast::success("Added to wishlist!")));
        }

        ui.apply(Effect::WishlistMarker {
            product_id,
            active: !member,
        });
        if let Some(count) = wishlist_count {
            ui.apply(Effect::Badge(BadgeKind::Wishlist, count));
        }
    }

    pub async fn remove_from_wishlist(
        &self,
        ui: &dyn UiPort,
        product_id: ProductId,
        trigger_active: bool,
        current_path: &str,
    ) {
        self.toggle_wishlist(ui, product_id, trigger_active, current_path)
            .await;
    }

    /// Submit an already validated checkout form.
    pub async fn complete_checkout(&self, ui: &dyn UiPort, form: CheckoutRequest) {
        let Some(_guard) = self.inflight.try_begin(ActionKey::Checkout) else {
            debug!("checkout already in flight");
            return;
        };

        ui.apply(Effect::CheckoutPending);
        match self.send(CHECKOUT_COMPLETE, &form).await {
            Ok(_) => ui.apply(Effect::Navigate(Page::OrderSuccess)),
            Err(err) => {
                fail(ui, "complete_checkout", err, "Error processing order");
                ui.apply(Effect::CheckoutRestored);
            }
        }
    }

    async fn send<T: Serialize>(&self, endpoint: &'static str, body: &T) -> Result<ActionResponse, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        debug!(endpoint, "storefront request");

        let resp = self.api.post_json(endpoint, body).await?;
        if !resp.success {
            return Err(ApiError::Rejected(resp.message));
        }
        Ok(resp)
    }
}

fn apply_cart_count(ui: &dyn UiPort, resp: &ActionResponse) {
    if let Some(count) = resp.cart_count {
        ui.apply(Effect::Badge(BadgeKind::Cart, BadgeCount(count)));
    }
}

fn fail(ui: &dyn UiPort, action: &'static str, err: ApiError, message: &str) {
    warn!(action, error = %err, "storefront action failed");
    ui.apply(Effect::Notify(Toast::error(message)));
}
