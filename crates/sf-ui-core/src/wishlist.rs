//! Explicit wishlist membership, one flag per product.
//!
//! Seeded from the rendered page and then only changed by successful server
//! responses. A trigger's CSS class is consulted only for products the state
//! has never seen.

use sf_api_types::ProductId;
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct WishlistState {
    members: HashMap<ProductId, bool>,
}

impl WishlistState {
    /// Record what the page rendered, without overriding known state.
    pub fn seed(&mut self, product_id: ProductId, member: bool) {
        self.members.entry(product_id).or_insert(member);
    }

    /// Membership for `product_id`, falling back to `hint` when unseen.
    pub fn is_member(&self, product_id: &ProductId, hint: bool) -> bool {
        self.members.get(product_id).copied().unwrap_or(hint)
    }

    pub fn known(&self, product_id: &ProductId) -> Option<bool> {
        self.members.get(product_id).copied()
    }

    pub fn set(&mut self, product_id: ProductId, member: bool) {
        self.members.insert(product_id, member);
    }
}
