//! Cart and cart line types.

use std::sync::Arc;

use crate::cart::{CartPricing, LinePricing, StoredLine};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// A shopping cart.
///
/// Lines are unique by product id and kept in insertion order. Totals are
/// never stored; every accessor recomputes them from the lines.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart priced in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
        }
    }

    /// A cart holding just `quantity` of `product`, priced in the
    /// product's currency.
    pub fn single(product: Arc<Product>, quantity: i64) -> Self {
        let currency = product.price.currency;
        Self {
            lines: vec![CartLine::new(product, quantity)],
            currency,
        }
    }

    /// Add `quantity` of a product.
    ///
    /// If the product already has a line its quantity is incremented;
    /// otherwise a new line is appended. Quantities below 1 count as 1.
    ///
    /// Fails if the product is priced in another currency or the line
    /// quantity would overflow.
    pub fn add(&mut self, product: Arc<Product>, quantity: i64) -> Result<(), CommerceError> {
        if product.price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: product.price.currency.code().to_string(),
            });
        }

        let quantity = quantity.max(1);
        if let Some(line) = self.line_mut(product.id) {
            line.quantity = line
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            return Ok(());
        }

        self.lines.push(CartLine::new(product, quantity));
        Ok(())
    }

    /// Set a line's quantity.
    ///
    /// A quantity of zero or less removes the line. Returns `false` if no
    /// line exists for `product_id`.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(product_id);
        }
        match self.line_mut(product_id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove a line. Returns `false` if it was not present.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| l.product_id() != product_id);
        self.lines.len() < len_before
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all line quantities, saturating at `i64::MAX`.
    pub fn total_items(&self) -> i64 {
        self.lines
            .iter()
            .fold(0_i64, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Exact sum of `price * quantity` over all lines.
    pub fn total_price(&self) -> Result<Money, CommerceError> {
        let subtotals = self
            .lines
            .iter()
            .map(CartLine::subtotal)
            .collect::<Result<Vec<_>, _>>()?;
        Money::try_sum(subtotals.iter(), self.currency).ok_or(CommerceError::Overflow)
    }

    /// Per-line pricing breakdown plus totals.
    pub fn pricing(&self) -> Result<CartPricing, CommerceError> {
        let lines = self
            .lines
            .iter()
            .map(|line| {
                Ok(LinePricing {
                    product_id: line.product_id(),
                    name: line.product.name.clone(),
                    quantity: line.quantity,
                    unit_price: line.product.price,
                    subtotal: line.subtotal()?,
                })
            })
            .collect::<Result<Vec<_>, CommerceError>>()?;

        let total = Money::try_sum(lines.iter().map(|l| &l.subtotal), self.currency)
            .ok_or(CommerceError::Overflow)?;

        Ok(CartPricing {
            lines,
            total_items: self.total_items(),
            total,
        })
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id() == product_id)
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// The persisted form: `{productId, quantity}` pairs in cart order.
    pub fn to_stored(&self) -> Vec<StoredLine> {
        self.lines
            .iter()
            .map(|l| StoredLine {
                product_id: l.product_id(),
                quantity: l.quantity,
            })
            .collect()
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.product_id() == product_id)
    }
}

/// A product and how many of it the shopper wants.
///
/// The product is a shared reference into the catalog; quantity is always
/// at least 1.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    product: Arc<Product>,
    quantity: i64,
}

impl CartLine {
    fn new(product: Arc<Product>, quantity: i64) -> Self {
        Self {
            product,
            quantity: quantity.max(1),
        }
    }

    pub fn product(&self) -> &Arc<Product> {
        &self.product
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// `unit price * quantity`.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        self.product
            .price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}
