//! Checkout module.
//!
//! Turns a cart into a plain-text order summary and a messaging-app deep
//! link carrying it. There is no payment step; the merchant receives the
//! message and takes it from there.

mod encoder;
mod link;
mod message;

pub use encoder::{
    Checkout, CheckoutEncoder, CheckoutSettings, DEFAULT_GREETING, DEFAULT_MESSAGING_HOST,
    DEFAULT_SOFT_LINK_LIMIT,
};
pub use link::normalize_destination;
