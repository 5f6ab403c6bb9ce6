//! Cart pricing breakdown.

use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartPricing {
    /// Per-line pricing, in cart order.
    pub lines: Vec<LinePricing>,
    /// Sum of all line quantities.
    pub total_items: i64,
    /// Sum of all line subtotals.
    pub total: Money,
}

impl CartPricing {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Pricing breakdown for a single cart line.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinePricing {
    pub product_id: ProductId,
    /// Product name at the time of pricing.
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    /// `unit_price * quantity`.
    pub subtotal: Money,
}
