//! Event binding.
//!
//! One delegated click listener on the document dispatches every control
//! that carries a `data-action` attribute. Async actions are spawned via
//! `wasm_bindgen_futures::spawn_local`.

use crate::dom;
use crate::handlers;
use sf_api_types::ProductId;
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

/// What a `data-action` control asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    AddToCart(ProductId),
    AddToCartWithQuantity(ProductId),
    BuyNow(ProductId),
    UpdateCart(ProductId, i64),
    RemoveFromCart(ProductId),
    ToggleWishlist(ProductId),
    RemoveFromWishlist(ProductId),
    ChangeQuantity(i64),
    CompleteCheckout,
    ViewProduct(ProductId),
}

impl Action {
    /// Decode a control's `data-*` attributes. `attr` looks up an attribute
    /// by its name without the `data-` prefix.
    pub fn parse(name: &str, attr: impl Fn(&str) -> Option<String>) -> Option<Action> {
        let product = || attr("product-id").filter(|id| !id.is_empty()).map(ProductId::new);
        let number = |key: &str| attr(key).and_then(|raw| raw.trim().parse::<i64>().ok());

        let action = match name {
            "add-to-cart" => Action::AddToCart(product()?),
            "add-to-cart-qty" => Action::AddToCartWithQuantity(product()?),
            "buy-now" => Action::BuyNow(product()?),
            "update-cart" => Action::UpdateCart(product()?, number("quantity")?),
            "remove-from-cart" => Action::RemoveFromCart(product()?),
            "toggle-wishlist" => Action::ToggleWishlist(product()?),
            "remove-from-wishlist" => Action::RemoveFromWishlist(product()?),
            "change-quantity" => Action::ChangeQuantity(number("delta")?),
            "complete-checkout" => Action::CompleteCheckout,
            "view-product" => Action::ViewProduct(product()?),
            _ => return None,
        };
        Some(action)
    }
}

/// Whole-number part of a number passed in from JavaScript.
///
/// `NaN` and the infinities carry no quantity and yield `None`.
pub fn js_integer(value: f64) -> Option<i64> {
    value.is_finite().then(|| value.trunc() as i64)
}

/// Run `action` on behalf of `trigger`.
pub fn dispatch(action: Action, trigger: Element) {
    let trigger = Some(trigger);
    match action {
        Action::AddToCart(id) => spawn_local(handlers::add_to_cart(trigger, id)),
        Action::AddToCartWithQuantity(id) => {
            spawn_local(handlers::add_to_cart_with_quantity(trigger, id))
        }
        Action::BuyNow(id) => spawn_local(handlers::buy_now(trigger, id)),
        Action::UpdateCart(id, quantity) => {
            spawn_local(handlers::update_cart_quantity(trigger, id, quantity))
        }
        Action::RemoveFromCart(id) => spawn_local(handlers::remove_from_cart(trigger, id)),
        Action::ToggleWishlist(id) => spawn_local(handlers::toggle_wishlist(trigger, id)),
        Action::RemoveFromWishlist(id) => spawn_local(handlers::remove_from_wishlist(trigger, id)),
        Action::ChangeQuantity(delta) => handlers::change_quantity(delta),
        Action::CompleteCheckout => spawn_local(handlers::complete_checkout(trigger)),
        Action::ViewProduct(id) => handlers::view_product(id),
    }
}

fn on_document_click(event: web_sys::MouseEvent) {
    let Some(control) = dom::event_element(&event).and_then(|el| el.closest("[data-action]").ok().flatten()) else {
        return;
    };
    let Some(name) = control.get_attribute("data-action") else {
        return;
    };

    match Action::parse(&name, |key| control.get_attribute(&format!("data-{key}"))) {
        Some(action) => {
            event.prevent_default();
            dispatch(action, control);
        }
        None => warn!(action = %name, "ignoring control with incomplete data attributes"),
    }
}

/// Bind the delegated click listener. Call once after init.
pub fn bind_events() -> Result<(), JsValue> {
    let document = dom::document().ok_or_else(|| JsValue::from_str("no document"))?;
    let cb = Closure::wrap(Box::new(on_document_click) as Box<dyn FnMut(web_sys::MouseEvent)>);
    document.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn parses_product_actions() {
        let with_id = attrs(&[("product-id", "p7")]);
        assert_eq!(
            Action::parse("add-to-cart", &with_id),
            Some(Action::AddToCart(ProductId::new("p7")))
        );
        assert_eq!(
            Action::parse("toggle-wishlist", &with_id),
            Some(Action::ToggleWishlist(ProductId::new("p7")))
        );
        assert_eq!(
            Action::parse("view-product", &with_id),
            Some(Action::ViewProduct(ProductId::new("p7")))
        );
    }

    #[test]
    fn parses_numeric_attributes() {
        assert_eq!(
            Action::parse("update-cart", attrs(&[("product-id", "p1"), ("quantity", "0")])),
            Some(Action::UpdateCart(ProductId::new("p1"), 0))
        );
        assert_eq!(
            Action::parse("change-quantity", attrs(&[("delta", "-1")])),
            Some(Action::ChangeQuantity(-1))
        );
    }

    #[test]
    fn missing_attributes_yield_none() {
        assert_eq!(Action::parse("add-to-cart", attrs(&[])), None);
        assert_eq!(Action::parse("add-to-cart", attrs(&[("product-id", "")])), None);
        assert_eq!(Action::parse("update-cart", attrs(&[("product-id", "p1")])), None);
        assert_eq!(Action::parse("change-quantity", attrs(&[("delta", "up")])), None);
        assert_eq!(Action::parse("explode", attrs(&[("product-id", "p1")])), None);
    }

    #[test]
    fn js_numbers_truncate_toward_zero() {
        assert_eq!(js_integer(3.9), Some(3));
        assert_eq!(js_integer(-0.5), Some(0));
        assert_eq!(js_integer(-2.7), Some(-2));
        assert_eq!(js_integer(5e9), Some(5_000_000_000));
    }

    #[test]
    fn non_finite_js_numbers_are_not_quantities() {
        assert_eq!(js_integer(f64::NAN), None);
        assert_eq!(js_integer(f64::INFINITY), None);
        assert_eq!(js_integer(f64::NEG_INFINITY), None);
    }

    #[test]
    fn checkout_needs_no_attributes() {
        assert_eq!(Action::parse("complete-checkout", attrs(&[])), Some(Action::CompleteCheckout));
    }
}
