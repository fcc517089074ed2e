//! Action handlers.
//!
//! Each handler reads whatever the action needs from the page, runs the
//! matching storefront action, and lets `DomUi` apply the outcome. Both the
//! delegated click listener and the exported globals land here.

use crate::dom;
use crate::state;
use crate::ui::{self, BusyControl, DomUi};
use sf_api_types::{CheckoutRequest, ProductId};
use sf_ui_core::{BadgeKind, ToastKind};
use web_sys::{Element, HtmlFormElement, HtmlInputElement};

fn quantity_input() -> Option<HtmlInputElement> {
    dom::by_id_typed::<HtmlInputElement>("quantity")
}

fn input_value(id: &str) -> String {
    dom::by_id_typed::<HtmlInputElement>(id)
        .map(|input| input.value())
        .unwrap_or_default()
}

pub fn refresh_badges() {
    let cart = ui::badge_text(BadgeKind::Cart);
    let wishlist = ui::badge_text(BadgeKind::Wishlist);
    let store = state::storefront();
    let ui = DomUi::new(None);
    store.refresh_badges(&ui, cart.as_deref(), wishlist.as_deref());
}

/// Record the wishlist membership the page was rendered with.
pub fn seed_wishlist() {
    let store = state::storefront();
    for el in dom::query_all(r#"[data-action="toggle-wishlist"], [data-action="remove-from-wishlist"]"#) {
        if let Some(id) = el.get_attribute("data-product-id") {
            store.seed_wishlist(ProductId::new(id), dom::has_class(&el, "active"));
        }
    }
}

pub fn notify(message: &str, kind: ToastKind) {
    let ui = DomUi::new(None);
    state::storefront().notify(&ui, message, kind);
}

pub fn view_product(product_id: ProductId) {
    let ui = DomUi::new(None);
    state::storefront().view_product(&ui, product_id);
}

pub fn change_quantity(delta: i64) {
    let Some(input) = quantity_input() else {
        return;
    };
    let value = input.value();
    let max = input.max();
    let next = state::storefront().change_quantity(Some(&value), Some(&max), delta);
    input.set_value(&next.to_string());
}

pub async fn add_to_cart(trigger: Option<Element>, product_id: ProductId) {
    let store = state::storefront();
    let _busy = BusyControl::hold(trigger.as_ref());
    let ui = DomUi::new(trigger);
    store.add_to_cart(&ui, product_id).await;
}

pub async fn add_to_cart_with_quantity(trigger: Option<Element>, product_id: ProductId) {
    let store = state::storefront();
    let raw = quantity_input().map(|input| input.value());
    let _busy = BusyControl::hold(trigger.as_ref());
    let ui = DomUi::new(trigger);
    store
        .add_to_cart_with_quantity(&ui, product_id, raw.as_deref())
        .await;
}

pub async fn buy_now(trigger: Option<Element>, product_id: ProductId) {
    let store = state::storefront();
    let raw = quantity_input().map(|input| input.value());
    let _busy = BusyControl::hold(trigger.as_ref());
    let ui = DomUi::new(trigger);
    store.buy_now(&ui, product_id, raw.as_deref()).await;
}

pub async fn update_cart_quantity(trigger: Option<Element>, product_id: ProductId, quantity: i64) {
    let store = state::storefront();
    let _busy = BusyControl::hold(trigger.as_ref());
    let ui = DomUi::new(trigger);
    store.update_cart_quantity(&ui, product_id, quantity).await;
}

pub async fn remove_from_cart(trigger: Option<Element>, product_id: ProductId) {
    let store = state::storefront();
    let _busy = BusyControl::hold(trigger.as_ref());
    let ui = DomUi::new(trigger);
    store.remove_from_cart(&ui, product_id).await;
}

pub async fn toggle_wishlist(trigger: Option<Element>, product_id: ProductId) {
    let store = state::storefront();
    let active = trigger
        .as_ref()
        .is_some_and(|el| dom::has_class(el, "active"));
    let path = dom::current_path();
    let _busy = BusyControl::hold(trigger.as_ref());
    let ui = DomUi::new(trigger);
    store.toggle_wishlist(&ui, product_id, active, &path).await;
}

pub async fn remove_from_wishlist(trigger: Option<Element>, product_id: ProductId) {
    let store = state::storefront();
    let active = trigger
        .as_ref()
        .is_some_and(|el| dom::has_class(el, "active"));
    let path = dom::current_path();
    let _busy = BusyControl::hold(trigger.as_ref());
    let ui = DomUi::new(trigger);
    store
        .remove_from_wishlist(&ui, product_id, active, &path)
        .await;
}

/// Validate `#checkout-form` and submit it.
///
/// The trigger is the submit control; it is disabled and relabelled by the
/// storefront's checkout effects rather than by `BusyControl`.
pub async fn complete_checkout(trigger: Option<Element>) {
    let Some(form) = dom::by_id_typed::<HtmlFormElement>("checkout-form") else {
        tracing::warn!("checkout requested without #checkout-form");
        return;
    };
    if !form.check_validity() {
        form.report_validity();
        return;
    }

    let body = CheckoutRequest {
        first_name: input_value("firstName"),
        last_name: input_value("lastName"),
        email: input_value("email"),
    };
    let trigger = trigger.or_else(|| dom::query(r#"#checkout-form [type="submit"]"#));
    let store = state::storefront();
    let ui = DomUi::new(trigger);
    store.complete_checkout(&ui, body).await;
}
