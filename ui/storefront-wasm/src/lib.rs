//! Storefront WASM front-end.
//!
//! Binds the storefront pages to the cart, wishlist and checkout endpoints.
//! Controls either carry `data-action` attributes (handled by one delegated
//! listener) or call the exported globals from inline handlers; the loader
//! script assigns the module exports onto `window` for the latter.

pub mod api;
pub mod config;
pub mod dom;
pub mod events;
pub mod handlers;
pub mod state;
pub mod ui;

use sf_api_types::ProductId;
use sf_ui_core::ToastKind;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    init()
}

/// Page-ready sequence.
fn init() -> Result<(), JsValue> {
    let store = state::storefront();
    tracing::info!(api_base = %store.config().api_base, "storefront ready");

    handlers::seed_wishlist();
    handlers::refresh_badges();
    events::bind_events()
}

fn trigger_of(event: Option<web_sys::Event>) -> Option<web_sys::Element> {
    let event = event?;
    event.prevent_default();
    dom::event_element(&event)
}

// ── Globals for inline handlers ──

#[wasm_bindgen(js_name = updateBadges)]
pub fn update_badges() {
    handlers::refresh_badges();
}

#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: String, kind: Option<String>) {
    let kind = kind.as_deref().map(ToastKind::from_name).unwrap_or_default();
    handlers::notify(&message, kind);
}

#[wasm_bindgen(js_name = viewProduct)]
pub fn view_product(product_id: String) {
    handlers::view_product(ProductId::new(product_id));
}

#[wasm_bindgen(js_name = addToCart)]
pub fn add_to_cart(product_id: String, event: Option<web_sys::Event>) {
    spawn_local(handlers::add_to_cart(trigger_of(event), ProductId::new(product_id)));
}

#[wasm_bindgen(js_name = addToCartWithQuantity)]
pub fn add_to_cart_with_quantity(product_id: String, event: Option<web_sys::Event>) {
    spawn_local(handlers::add_to_cart_with_quantity(
        trigger_of(event),
        ProductId::new(product_id),
    ));
}

#[wasm_bindgen(js_name = buyNow)]
pub fn buy_now(product_id: String, event: Option<web_sys::Event>) {
    spawn_local(handlers::buy_now(trigger_of(event), ProductId::new(product_id)));
}

#[wasm_bindgen(js_name = updateCartQuantity)]
pub fn update_cart_quantity(product_id: String, quantity: f64, event: Option<web_sys::Event>) {
    let Some(quantity) = events::js_integer(quantity) else {
        tracing::warn!(%product_id, "ignoring non-numeric cart quantity");
        return;
    };
    spawn_local(handlers::update_cart_quantity(
        trigger_of(event),
        ProductId::new(product_id),
        quantity,
    ));
}

#[wasm_bindgen(js_name = removeFromCart)]
pub fn remove_from_cart(product_id: String, event: Option<web_sys::Event>) {
    spawn_local(handlers::remove_from_cart(trigger_of(event), ProductId::new(product_id)));
}

#[wasm_bindgen(js_name = toggleWishlist)]
pub fn toggle_wishlist(product_id: String, event: Option<web_sys::Event>) {
    spawn_local(handlers::toggle_wishlist(trigger_of(event), ProductId::new(product_id)));
}

#[wasm_bindgen(js_name = removeFromWishlist)]
pub fn remove_from_wishlist(product_id: String, event: Option<web_sys::Event>) {
    spawn_local(handlers::remove_from_wishlist(
        trigger_of(event),
        ProductId::new(product_id),
    ));
}

#[wasm_bindgen(js_name = changeQuantity)]
pub fn change_quantity(delta: f64) {
    if let Some(delta) = events::js_integer(delta) {
        handlers::change_quantity(delta);
    }
}

#[wasm_bindgen(js_name = completeCheckout)]
pub fn complete_checkout(event: Option<web_sys::Event>) {
    spawn_local(handlers::complete_checkout(trigger_of(event)));
}
