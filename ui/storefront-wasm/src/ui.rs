//! DOM presenter.
//!
//! Applies storefront effects to the page. One `DomUi` is built per user
//! action and carries the control that triggered it, so the wishlist marker
//! and checkout button effects land on the right element.

use crate::dom;
use crate::state;
use gloo_timers::callback::Timeout;
use sf_api_types::ProductId;
use sf_ui_core::{BadgeCount, BadgeKind, Effect, Toast, UiPort};
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement};

const PROCESSING_LABEL: &str = r#"<i class="fas fa-spinner fa-spin"></i> Processing..."#;

pub struct DomUi {
    trigger: Option<Element>,
    toast_ttl_ms: u32,
    saved_label: RefCell<Option<String>>,
}

impl DomUi {
    pub fn new(trigger: Option<Element>) -> Self {
        Self {
            trigger,
            toast_ttl_ms: state::storefront().config().toast_ttl_ms,
            saved_label: RefCell::new(None),
        }
    }
}

impl UiPort for DomUi {
    fn apply(&self, effect: Effect) {
        match effect {
            Effect::Badge(kind, count) => apply_badge(kind, count),
            Effect::Notify(toast) => show_toast(&toast, self.toast_ttl_ms),
            Effect::Navigate(page) => {
                if let Some(w) = dom::window() {
                    let _ = w.location().set_href(&page.path());
                }
            }
            Effect::Reload => {
                if let Some(w) = dom::window() {
                    let _ = w.location().reload();
                }
            }
            Effect::WishlistMarker { product_id, active } => {
                for el in wishlist_markers(self.trigger.as_ref(), &product_id) {
                    dom::toggle_class(&el, "active", active);
                    if let Ok(Some(icon)) = el.query_selector("i") {
                        if active {
                            dom::replace_class(&icon, "far", "fas");
                        } else {
                            dom::replace_class(&icon, "fas", "far");
                        }
                    }
                }
            }
            Effect::CheckoutPending => {
                if let Some(el) = &self.trigger {
                    *self.saved_label.borrow_mut() = Some(el.inner_html());
                    set_disabled(el, true);
                    el.set_inner_html(PROCESSING_LABEL);
                }
            }
            Effect::CheckoutRestored => {
                if let Some(el) = &self.trigger {
                    if let Some(label) = self.saved_label.borrow_mut().take() {
                        el.set_inner_html(&label);
                    }
                    set_disabled(el, false);
                }
            }
        }
    }

    fn confirm(&self, message: &str) -> bool {
        dom::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// Write `count` to every badge of `kind` and show it iff positive.
pub fn apply_badge(kind: BadgeKind, count: BadgeCount) {
    for el in dom::query_all(&format!("#{}", kind.element_id())) {
        dom::set_text(&el, &count.text());
        dom::set_display(&el, count.display());
    }
}

/// Text of the first rendered badge of `kind`, if the page has one.
pub fn badge_text(kind: BadgeKind) -> Option<String> {
    dom::by_id(kind.element_id()).map(|el| dom::text_of(&el))
}

pub fn show_toast(toast: &Toast, ttl_ms: u32) {
    let Some(el) = dom::by_id("toast") else {
        return;
    };
    dom::set_text(&el, &toast.message);
    el.set_class_name(&toast.shown_class());

    let timer = Timeout::new(ttl_ms, move || dom::remove_class(&el, "show"));
    state::set_toast_timer(timer);
}

/// Wishlist controls for `product_id`: the trigger, or every matching
/// control on the page when the action had none.
fn wishlist_markers(trigger: Option<&Element>, product_id: &ProductId) -> Vec<Element> {
    if let Some(el) = trigger {
        return vec![el.clone()];
    }
    dom::query_all(r#"[data-action="toggle-wishlist"], [data-action="remove-from-wishlist"]"#)
        .into_iter()
        .filter(|el| el.get_attribute("data-product-id").as_deref() == Some(product_id.as_str()))
        .collect()
}

pub fn set_disabled(el: &Element, disabled: bool) {
    if let Some(btn) = el.dyn_ref::<HtmlButtonElement>() {
        btn.set_disabled(disabled);
    } else if disabled {
        let _ = el.set_attribute("aria-disabled", "true");
    } else {
        let _ = el.remove_attribute("aria-disabled");
    }
}

pub fn is_disabled(el: &Element) -> bool {
    match el.dyn_ref::<HtmlButtonElement>() {
        Some(btn) => btn.disabled(),
        None => el.get_attribute("aria-disabled").as_deref() == Some("true"),
    }
}

/// Keeps a trigger control disabled while its request is outstanding.
pub struct BusyControl {
    el: Option<Element>,
}

impl BusyControl {
    pub fn hold(trigger: Option<&Element>) -> Self {
        let el = trigger.filter(|el| !is_disabled(el)).cloned();
        if let Some(el) = &el {
            set_disabled(el, true);
        }
        Self { el }
    }
}

impl Drop for BusyControl {
    fn drop(&mut self) {
        if let Some(el) = &self.el {
            set_disabled(el, false);
        }
    }
}
