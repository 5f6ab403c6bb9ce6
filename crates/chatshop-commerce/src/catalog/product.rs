//! Product and product-draft types.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are immutable once loaded; the catalog hands them out behind
/// `Arc` so carts can reference them without copying.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Unit price. Never negative.
    pub price: Money,
    /// URL of the product image.
    pub image_url: String,
    /// Category tag (e.g., "electronics").
    pub category: String,
    /// Shown on the landing page.
    pub featured: bool,
}

impl Product {
    /// Check whether this product is tagged exactly `category`.
    pub fn in_category(&self, category: &str) -> bool {
        self.category == category
    }
}

/// Validated input for creating or replacing a catalog entry.
///
/// This is also the on-disk shape of catalog files: a JSON array of drafts
/// with prices written as decimal numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub featured: bool,
}

impl ProductDraft {
    /// Check required fields and convert into a [`Product`].
    ///
    /// Name, description, and image URL must be non-blank; the price must
    /// be positive and representable in `currency`.
    pub fn validate(self, currency: Currency) -> Result<Product, CommerceError> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        if self.image_url.trim().is_empty() {
            missing.push("imageUrl");
        }
        if !missing.is_empty() {
            return Err(CommerceError::InvalidProduct(format!(
                "product {} is missing required fields: {}",
                self.id,
                missing.join(", ")
            )));
        }

        if self.price <= Decimal::ZERO {
            return Err(CommerceError::InvalidProduct(format!(
                "product {} must have a positive price, got {}",
                self.id, self.price
            )));
        }
        let price = Money::from_decimal(self.price, currency)?;

        Ok(Product {
            id: self.id,
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            image_url: self.image_url.trim().to_string(),
            category: self.category.trim().to_string(),
            featured: self.featured,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft {
            id: ProductId::new(1),
            name: "Smartphone Premium".to_string(),
            description: "Flagship phone".to_string(),
            price: Decimal::new(79999, 2),
            image_url: "https://example.com/phone.jpg".to_string(),
            category: "electronics".to_string(),
            featured: true,
        }
    }

    #[test]
    fn test_valid_draft() {
        let product = draft().validate(Currency::EUR).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price, Money::new(79999, Currency::EUR));
        assert!(product.featured);
    }

    #[test]
    fn test_draft_trims_fields() {
        let mut d = draft();
        d.name = "  Phone  ".to_string();
        d.category = " electronics ".to_string();
        let product = d.validate(Currency::EUR).unwrap();
        assert_eq!(product.name, "Phone");
        assert_eq!(product.category, "electronics");
    }

    #[test]
    fn test_draft_missing_fields() {
        let mut d = draft();
        d.name = " ".to_string();
        d.image_url = String::new();
        let err = d.validate(Currency::EUR).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("name"));
        assert!(msg.contains("imageUrl"));
        assert!(!msg.contains("description"));
    }

    #[test]
    fn test_draft_rejects_non_positive_price() {
        let mut d = draft();
        d.price = Decimal::ZERO;
        assert!(matches!(
            d.validate(Currency::EUR),
            Err(CommerceError::InvalidProduct(_))
        ));
    }

    #[test]
    fn test_draft_rejects_sub_cent_price() {
        let mut d = draft();
        d.price = Decimal::new(19999, 3);
        assert!(matches!(
            d.validate(Currency::EUR),
            Err(CommerceError::InvalidPrice(_))
        ));
    }

    #[test]
    fn test_draft_from_json() {
        let json = r#"{
            "id": 3,
            "name": "Wireless Headphones",
            "description": "Noise cancelling",
            "price": 249.99,
            "imageUrl": "https://example.com/h.jpg"
        }"#;
        let d: ProductDraft = serde_json::from_str(json).unwrap();
        assert_eq!(d.price, Decimal::new(24999, 2));
        assert!(!d.featured);
        assert_eq!(d.category, "");
    }

    #[test]
    fn test_in_category_is_exact() {
        let product = draft().validate(Currency::EUR).unwrap();
        assert!(product.in_category("electronics"));
        assert!(!product.in_category("Electronics"));
        assert!(!product.in_category(" electronics"));
        assert!(!product.in_category("books"));
    }
}
