use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const CART_ADD: &str = "/api/cart/add";
pub const CART_UPDATE: &str = "/api/cart/update";
pub const CART_REMOVE: &str = "/api/cart/remove";
pub const WISHLIST_ADD: &str = "/api/wishlist/add";
pub const WISHLIST_REMOVE: &str = "/api/wishlist/remove";
pub const CHECKOUT_COMPLETE: &str = "/api/checkout/complete";

// Path segment escaping: keep unreserved characters as-is.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartAddRequest {
    pub product_id: ProductId,
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartUpdateRequest {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// Body shared by cart removal and both wishlist endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductRequest {
    pub product_id: ProductId,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Envelope returned by every storefront endpoint.
///
/// Only `success` is guaranteed; the counts are present on the endpoints
/// that change them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cart_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wishlist_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActionResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    pub fn with_cart_count(mut self, count: u32) -> Self {
        self.cart_count = Some(count);
        self
    }

    pub fn with_wishlist_count(mut self, count: u32) -> Self {
        self.wishlist_count = Some(count);
        self
    }
}

/// Pages the storefront navigates to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Product(ProductId),
    Checkout,
    Wishlist,
    OrderSuccess,
}

impl Page {
    pub fn path(&self) -> String {
        match self {
            Page::Product(id) => format!("/product/{}", utf8_percent_encode(id.as_str(), SEGMENT)),
            Page::Checkout => "/checkout".to_owned(),
            Page::Wishlist => "/wishlist".to_owned(),
            Page::OrderSuccess => "/order-success".to_owned(),
        }
    }
}
