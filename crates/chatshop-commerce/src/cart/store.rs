//! The shopper's cart session, persisted after every change.

use std::sync::Arc;

use chatshop_cache::{Cache, KvStore};
use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartLine, CartPricing};
use crate::catalog::{Product, ProductCatalog};
use crate::checkout::{Checkout, CheckoutEncoder};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// Key the cart is stored under.
pub const CART_STORAGE_KEY: &str = "cart";

/// Persisted form of a cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredLine {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// A cart bound to a catalog and a durable store.
///
/// Every mutator updates the in-memory cart first and then runs an explicit
/// save step. A failed save is logged and remembered, but the in-memory cart
/// is kept as is; call [`CartStore::save`] to retry.
///
/// # Example
///
/// ```rust,ignore
/// let catalog = ProductCatalog::sample();
/// let mut store = CartStore::restore(&catalog, Cache::open_dir(".chatshop")?);
///
/// store.add_by_id(ProductId::new(1), 1)?;
/// store.update_quantity(ProductId::new(1), 3);
///
/// let checkout = store.checkout(&CheckoutEncoder::default())?;
/// println!("{}", checkout.link);
/// ```
#[derive(Debug)]
pub struct CartStore<'c, S: KvStore> {
    catalog: &'c ProductCatalog,
    cache: Cache<S>,
    cart: Cart,
    last_save_failed: bool,
}

impl<'c, S: KvStore> CartStore<'c, S> {
    /// Start with an empty cart, ignoring anything already stored.
    pub fn new(catalog: &'c ProductCatalog, cache: Cache<S>) -> Self {
        Self {
            catalog,
            cache,
            cart: Cart::new(catalog.currency()),
            last_save_failed: false,
        }
    }

    /// Rebuild the cart from storage.
    ///
    /// Stored ids are re-resolved against the catalog; lines for products
    /// the catalog no longer has are dropped. A missing, unreadable, or
    /// corrupt entry yields an empty cart.
    pub fn restore(catalog: &'c ProductCatalog, cache: Cache<S>) -> Self {
        let cart = match cache.get::<Vec<StoredLine>>(CART_STORAGE_KEY) {
            Ok(Some(stored)) => rehydrate(catalog, &stored),
            Ok(None) => Cart::new(catalog.currency()),
            Err(e) => {
                tracing::warn!(error = %e, "stored cart unreadable, starting empty");
                Cart::new(catalog.currency())
            }
        };
        tracing::debug!(
            lines = cart.len(),
            items = cart.total_items(),
            "restored cart"
        );

        Self {
            catalog,
            cache,
            cart,
            last_save_failed: false,
        }
    }

    /// Add a catalog product; see [`Cart::add`] for quantity rules.
    ///
    /// The cart always references the catalog's own entry, so the product
    /// must exist in the catalog.
    pub fn add_to_cart(
        &mut self,
        product: &Product,
        quantity: i64,
    ) -> Result<&Cart, CommerceError> {
        self.add_by_id(product.id, quantity)
    }

    /// Add a product by id.
    pub fn add_by_id(&mut self, product_id: ProductId, quantity: i64) -> Result<&Cart, CommerceError> {
        let product: Arc<Product> = self
            .catalog
            .get(product_id)
            .ok_or(CommerceError::ProductNotFound(product_id))?;
        self.cart.add(product, quantity)?;
        tracing::debug!(%product_id, quantity, "added to cart");
        self.persist();
        Ok(&self.cart)
    }

    /// Set a line's quantity; zero or less removes it, unknown ids are
    /// ignored.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) -> &Cart {
        let changed = self.cart.set_quantity(product_id, quantity);
        tracing::debug!(%product_id, quantity, changed, "updated cart quantity");
        self.persist();
        &self.cart
    }

    /// Remove a line if present.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> &Cart {
        let removed = self.cart.remove(product_id);
        tracing::debug!(%product_id, removed, "removed from cart");
        self.persist();
        &self.cart
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) -> &Cart {
        self.cart.clear();
        tracing::debug!("cleared cart");
        self.persist();
        &self.cart
    }

    /// Encode the cart for checkout, then clear it.
    ///
    /// On an empty cart this fails with [`CommerceError::EmptyCart`] and
    /// nothing changes.
    pub fn checkout(&mut self, encoder: &CheckoutEncoder) -> Result<Checkout, CommerceError> {
        let checkout = encoder.encode(&self.cart)?;
        self.clear_cart();
        Ok(checkout)
    }

    /// Encode a one-product order for immediate purchase.
    ///
    /// The stored cart is neither read nor changed. Quantities below 1
    /// count as 1, as with [`Cart::add`].
    pub fn buy_now(
        &self,
        product_id: ProductId,
        quantity: i64,
        encoder: &CheckoutEncoder,
    ) -> Result<Checkout, CommerceError> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or(CommerceError::ProductNotFound(product_id))?;
        tracing::debug!(%product_id, quantity, "buy now");
        encoder.encode(&Cart::single(product, quantity))
    }

    /// Write the current cart to storage.
    pub fn save(&mut self) -> Result<(), CommerceError> {
        let result = self.cache.set(CART_STORAGE_KEY, &self.cart.to_stored());
        self.last_save_failed = result.is_err();
        result.map_err(CommerceError::from)
    }

    /// Whether the most recent save failed.
    pub fn last_save_failed(&self) -> bool {
        self.last_save_failed
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.cart.line(product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn total_items(&self) -> i64 {
        self.cart.total_items()
    }

    pub fn total_price(&self) -> Result<Money, CommerceError> {
        self.cart.total_price()
    }

    pub fn pricing(&self) -> Result<CartPricing, CommerceError> {
        self.cart.pricing()
    }

    pub fn catalog(&self) -> &'c ProductCatalog {
        self.catalog
    }

    /// Release the store, e.g. to reopen it in a later session.
    pub fn into_cache(self) -> Cache<S> {
        self.cache
    }

    fn persist(&mut self) {
        if let Err(e) = self.save() {
            tracing::warn!(error = %e, "failed to persist cart");
        }
    }
}

fn rehydrate(catalog: &ProductCatalog, stored: &[StoredLine]) -> Cart {
    let mut cart = Cart::new(catalog.currency());
    for entry in stored {
        if entry.quantity <= 0 {
            tracing::debug!(product_id = %entry.product_id, quantity = entry.quantity, "dropping empty stored line");
            continue;
        }
        let Some(product) = catalog.get(entry.product_id) else {
            tracing::debug!(product_id = %entry.product_id, "dropping stored line for unknown product");
            continue;
        };
        if let Err(e) = cart.add(product, entry.quantity) {
            tracing::debug!(product_id = %entry.product_id, error = %e, "dropping stored line");
        }
    }
    cart
}
