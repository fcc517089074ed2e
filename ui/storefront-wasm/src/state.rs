//! Global front-end state.
//!
//! `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded). The
//! storefront is handed out as an `Rc` so handlers never hold a borrow
//! across an `.await`.

use crate::api::FetchApi;
use crate::config;
use gloo_timers::callback::Timeout;
use sf_ui_core::Storefront;
use std::cell::RefCell;
use std::rc::Rc;

pub type App = Storefront<FetchApi>;

thread_local! {
    static STOREFRONT: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
    static TOAST_TIMER: RefCell<Option<Timeout>> = const { RefCell::new(None) };
}

/// The shared storefront, built from the page config on first use.
pub fn storefront() -> Rc<App> {
    STOREFRONT.with(|s| {
        s.borrow_mut()
            .get_or_insert_with(|| {
                let config = config::load();
                Rc::new(Storefront::new(FetchApi::new(config.clone()), config))
            })
            .clone()
    })
}

/// Replace the pending toast dismissal. Dropping the old `Timeout`
/// cancels it.
pub fn set_toast_timer(timer: Timeout) {
    TOAST_TIMER.with(|t| *t.borrow_mut() = Some(timer));
}
