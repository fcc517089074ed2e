//! Per-action in-flight guards.
//!
//! While a key is held, a second action with the same key is dropped. The
//! key is released when the guard is dropped, whichever way the request
//! settled.

use sf_api_types::ProductId;
use std::cell::RefCell;
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ActionKey {
    /// Add, buy-now, update and remove for one product.
    Cart(ProductId),
    Wishlist(ProductId),
    Checkout,
}

#[derive(Debug, Default)]
pub struct InFlight {
    keys: RefCell<HashSet<ActionKey>>,
}

impl InFlight {
    /// Claim `key`, or `None` if a request for it is still outstanding.
    pub fn try_begin(&self, key: ActionKey) -> Option<InFlightGuard<'_>> {
        if !self.keys.borrow_mut().insert(key.clone()) {
            return None;
        }
        Some(InFlightGuard { owner: self, key })
    }

    pub fn is_active(&self, key: &ActionKey) -> bool {
        self.keys.borrow().contains(key)
    }
}

pub struct InFlightGuard<'a> {
    owner: &'a InFlight,
    key: ActionKey,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.owner.keys.borrow_mut().remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_claim_is_refused_until_release() {
        let inflight = InFlight::default();
        let key = ActionKey::Cart(ProductId::new("p1"));

        let guard = inflight.try_begin(key.clone());
        assert!(guard.is_some());
        assert!(inflight.try_begin(key.clone()).is_none());
        assert!(inflight.is_active(&key));

        drop(guard);
        assert!(!inflight.is_active(&key));
        assert!(inflight.try_begin(key).is_some());
    }

    #[test]
    fn keys_are_independent() {
        let inflight = InFlight::default();
        let _cart = inflight.try_begin(ActionKey::Cart(ProductId::new("p1")));
        assert!(inflight.try_begin(ActionKey::Cart(ProductId::new("p2"))).is_some());
        assert!(inflight.try_begin(ActionKey::Wishlist(ProductId::new("p1"))).is_some());
        assert!(inflight.try_begin(ActionKey::Checkout).is_some());
    }
}
