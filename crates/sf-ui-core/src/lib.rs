//! Storefront UI sync layer.
//!
//! Target-independent half of the storefront front-end: the models behind
//! badges, toasts and the quantity stepper, explicit wishlist membership,
//! in-flight guards, and the [`Storefront`] actions that talk to the backend
//! through [`StorefrontApi`] and report back through [`UiPort`].

pub mod badge;
pub mod config;
pub mod error;
pub mod inflight;
pub mod parse;
pub mod ports;
pub mod quantity;
pub mod storefront;
pub mod toast;
pub mod wishlist;

pub use badge::{BadgeCount, BadgeKind};
pub use config::StorefrontConfig;
pub use error::ApiError;
pub use inflight::ActionKey;
pub use ports::{Effect, StorefrontApi, UiPort};
pub use storefront::Storefront;
pub use toast::{Toast, ToastKind};
