//! Catalog filter combining the listing page's facets.

use crate::catalog::Product;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product filter. Unset facets match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductFilter {
    /// Only products in this category.
    pub category: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<Money>,
    /// Inclusive upper price bound.
    pub max_price: Option<Money>,
    /// Only featured products.
    pub featured_only: bool,
    /// Case-insensitive substring of name or description.
    pub text: Option<String>,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Restrict to an inclusive price range; either bound may be open.
    pub fn price_range(mut self, min: Option<Money>, max: Option<Money>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Restrict to featured products.
    pub fn featured(mut self) -> Self {
        self.featured_only = true;
        self
    }

    /// Restrict to products mentioning `query`.
    pub fn text(mut self, query: impl Into<String>) -> Self {
        self.text = Some(query.into());
        self
    }

    /// Check a single product against every set facet.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if !product.in_category(category) {
                return false;
            }
        }
        if let Some(min) = &self.min_price {
            if product.price.amount_cents < min.amount_cents {
                return false;
            }
        }
        if let Some(max) = &self.max_price {
            if product.price.amount_cents > max.amount_cents {
                return false;
            }
        }
        if self.featured_only && !product.featured {
            return false;
        }
        if let Some(query) = &self.text {
            let query = query.trim().to_lowercase();
            if !query.is_empty()
                && !product.name.to_lowercase().contains(&query)
                && !product.description.to_lowercase().contains(&query)
            {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::money::Currency;

    fn product(price_cents: i64, featured: bool) -> Product {
        Product {
            id: ProductId::new(1),
            name: "Bluetooth Speaker".to_string(),
            description: "Portable, long battery life".to_string(),
            price: Money::new(price_cents, Currency::EUR),
            image_url: "https://example.com/s.jpg".to_string(),
            category: "electronics".to_string(),
            featured,
        }
    }

    #[test]
    fn test_empty_filter_matches_all() {
        assert!(ProductFilter::new().matches(&product(12999, false)));
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let p = product(12999, false);
        let exact = Money::new(12999, Currency::EUR);
        assert!(ProductFilter::new()
            .price_range(Some(exact), Some(exact))
            .matches(&p));
        assert!(!ProductFilter::new()
            .price_range(Some(Money::new(13000, Currency::EUR)), None)
            .matches(&p));
        assert!(!ProductFilter::new()
            .price_range(None, Some(Money::new(12998, Currency::EUR)))
            .matches(&p));
    }

    #[test]
    fn test_category_and_featured() {
        let p = product(100, false);
        assert!(ProductFilter::new().category("electronics").matches(&p));
        assert!(!ProductFilter::new().category("Electronics").matches(&p));
        assert!(!ProductFilter::new().category("books").matches(&p));
        assert!(!ProductFilter::new().featured().matches(&p));
        assert!(ProductFilter::new().featured().matches(&product(100, true)));
    }

    #[test]
    fn test_text_matches_name_or_description() {
        let p = product(100, false);
        assert!(ProductFilter::new().text("speaker").matches(&p));
        assert!(ProductFilter::new().text("BATTERY").matches(&p));
        assert!(!ProductFilter::new().text("laptop").matches(&p));
        assert!(ProductFilter::new().text("  ").matches(&p));
    }
}
