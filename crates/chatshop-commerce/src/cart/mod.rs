//! Shopping cart module.
//!
//! Contains the cart and its lines, the pricing breakdown, and the
//! persisted cart store.

mod cart;
mod pricing;
mod store;

pub use cart::{Cart, CartLine};
pub use pricing::{CartPricing, LinePricing};
pub use store::{CartStore, StoredLine, CART_STORAGE_KEY};
