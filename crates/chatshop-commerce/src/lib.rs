//! Storefront domain logic for Chatshop.
//!
//! Shoppers browse a fixed catalog, fill a cart, and check out by sending
//! an order summary through a messaging-app deep link:
//!
//! - **Catalog**: Products, validated product drafts, filters
//! - **Cart**: Cart lines, derived totals, and the persisted cart store
//! - **Checkout**: Order message and deep-link encoding
//!
//! # Example
//!
//! ```rust,ignore
//! use chatshop_commerce::prelude::*;
//! use chatshop_cache::Cache;
//!
//! let catalog = ProductCatalog::sample();
//! let mut store = CartStore::restore(&catalog, Cache::open_dir(".chatshop")?);
//!
//! store.add_by_id(ProductId::new(1), 1)?;
//! store.add_by_id(ProductId::new(3), 2)?;
//! println!("Total: {}", store.total_price()?);
//!
//! let checkout = store.checkout(&CheckoutEncoder::default())?;
//! println!("{}", checkout.link);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Locale, Money, PriceFormat};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Locale, Money, PriceFormat};

    // Catalog
    pub use crate::catalog::{Product, ProductCatalog, ProductDraft, ProductFilter};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartPricing, CartStore, LinePricing, StoredLine};

    // Checkout
    pub use crate::checkout::{Checkout, CheckoutEncoder, CheckoutSettings};
}
