//! DOM helpers.
//!
//! Thin wrappers over `web_sys` lookups. Lookups return `Option` so a page
//! that lacks an element simply skips the work that needed it.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok()?
}

/// All elements matching `selector`, including repeated ids.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(nl) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn text_of(el: &Element) -> String {
    el.text_content().unwrap_or_default()
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_display(el: &Element, display: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property("display", display);
    }
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

pub fn replace_class(el: &Element, from: &str, to: &str) {
    let _ = el.class_list().replace(from, to);
}

pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// Element the handler was bound to, falling back to the element clicked.
pub fn event_element(event: &web_sys::Event) -> Option<Element> {
    event
        .current_target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .or_else(|| event.target().and_then(|t| t.dyn_into::<Element>().ok()))
}
