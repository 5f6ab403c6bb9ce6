//! Read-only product catalog and its query functions.

use std::collections::HashSet;
use std::sync::Arc;

use crate::catalog::sample::sample_products;
use crate::catalog::{Product, ProductDraft, ProductFilter};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// The set of purchasable products.
///
/// Every query returns a freshly collected `Vec`; callers never get access
/// to the backing list. Products are shared as `Arc<Product>` so a cart can
/// point at catalog entries without copying them.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Vec<Arc<Product>>,
    currency: Currency,
}

impl ProductCatalog {
    /// Build a catalog from already-validated products.
    ///
    /// Fails on duplicate ids or when products are priced in different
    /// currencies. An empty list yields an empty catalog priced in
    /// `Currency::default()`.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CommerceError> {
        let currency = products
            .first()
            .map(|p| p.price.currency)
            .unwrap_or_default();

        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CommerceError::DuplicateProduct(product.id));
            }
            if product.price.currency != currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: currency.code().to_string(),
                    got: product.price.currency.code().to_string(),
                });
            }
            if product.price.is_negative() {
                return Err(CommerceError::InvalidPrice(format!(
                    "product {} has a negative price",
                    product.id
                )));
            }
        }

        Ok(Self {
            products: products.into_iter().map(Arc::new).collect(),
            currency,
        })
    }

    /// Validate drafts and build a catalog priced in `currency`.
    pub fn from_drafts(
        drafts: Vec<ProductDraft>,
        currency: Currency,
    ) -> Result<Self, CommerceError> {
        let products = drafts
            .into_iter()
            .map(|d| d.validate(currency))
            .collect::<Result<Vec<_>, _>>()?;
        let mut catalog = Self::from_products(products)?;
        catalog.currency = currency;
        Ok(catalog)
    }

    /// Parse a JSON array of drafts.
    pub fn from_json(json: &str, currency: Currency) -> Result<Self, CommerceError> {
        let drafts: Vec<ProductDraft> = serde_json::from_str(json)?;
        let catalog = Self::from_drafts(drafts, currency)?;
        tracing::debug!(products = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// The built-in demo catalog.
    pub fn sample() -> Self {
        Self {
            products: sample_products().into_iter().map(Arc::new).collect(),
            currency: Currency::EUR,
        }
    }

    /// Currency every product is priced in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<Arc<Product>> {
        self.products.iter().find(|p| p.id == id).cloned()
    }

    /// Check whether a product id exists.
    pub fn contains(&self, id: ProductId) -> bool {
        self.products.iter().any(|p| p.id == id)
    }

    /// All products in catalog order.
    pub fn all(&self) -> Vec<Arc<Product>> {
        self.products.clone()
    }

    /// Products tagged with `category`.
    pub fn by_category(&self, category: &str) -> Vec<Arc<Product>> {
        self.collect(|p| p.in_category(category))
    }

    /// Products priced within `[min, max]`.
    pub fn in_price_range(&self, min: Money, max: Money) -> Vec<Arc<Product>> {
        self.collect(|p| {
            p.price.amount_cents >= min.amount_cents && p.price.amount_cents <= max.amount_cents
        })
    }

    /// Distinct categories, in order of first appearance.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .filter(|p| seen.insert(p.category.as_str()))
            .map(|p| p.category.clone())
            .collect()
    }

    /// Products flagged as featured.
    pub fn featured(&self) -> Vec<Arc<Product>> {
        self.collect(|p| p.featured)
    }

    /// Products matching every facet of `filter`.
    pub fn search(&self, filter: &ProductFilter) -> Vec<Arc<Product>> {
        self.collect(|p| filter.matches(p))
    }

    fn collect(&self, pred: impl Fn(&Product) -> bool) -> Vec<Arc<Product>> {
        self.products
            .iter()
            .filter(|p| pred(p))
            .cloned()
            .collect()
    }
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: u64, category: &str, price_cents: i64, featured: bool) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            description: "A product".to_string(),
            price: Money::new(price_cents, Currency::EUR),
            image_url: format!("https://example.com/{id}.jpg"),
            category: category.to_string(),
            featured,
        }
    }

    fn catalog() -> ProductCatalog {
        ProductCatalog::from_products(vec![
            product(1, "audio", 1000, true),
            product(2, "video", 2000, false),
            product(3, "audio", 3000, false),
            product(4, "books", 4000, true),
        ])
        .unwrap()
    }

    #[test]
    fn test_get() {
        let catalog = catalog();
        assert_eq!(catalog.get(ProductId::new(3)).unwrap().price.amount_cents, 3000);
        assert!(catalog.get(ProductId::new(99)).is_none());
        assert!(catalog.contains(ProductId::new(1)));
    }

    #[test]
    fn test_by_category() {
        let ids: Vec<u64> = catalog()
            .by_category("audio")
            .iter()
            .map(|p| p.id.get())
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_in_price_range_inclusive() {
        let catalog = catalog();
        let ids: Vec<u64> = catalog
            .in_price_range(
                Money::new(2000, Currency::EUR),
                Money::new(3000, Currency::EUR),
            )
            .iter()
            .map(|p| p.id.get())
            .collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_categories_distinct_in_order() {
        assert_eq!(catalog().categories(), vec!["audio", "video", "books"]);
    }

    #[test]
    fn test_featured() {
        let ids: Vec<u64> = catalog().featured().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn test_search_combines_facets() {
        let filter = ProductFilter::new()
            .category("audio")
            .price_range(Some(Money::new(1500, Currency::EUR)), None);
        let ids: Vec<u64> = catalog().search(&filter).iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_queries_return_fresh_vectors() {
        let catalog = catalog();
        let mut all = catalog.all();
        all.clear();
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_shared_references() {
        let catalog = catalog();
        let a = catalog.get(ProductId::new(1)).unwrap();
        let b = catalog.get(ProductId::new(1)).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = ProductCatalog::from_products(vec![
            product(1, "audio", 1000, false),
            product(1, "video", 2000, false),
        ]);
        assert!(matches!(result, Err(CommerceError::DuplicateProduct(id)) if id.get() == 1));
    }

    #[test]
    fn test_mixed_currency_rejected() {
        let mut usd = product(2, "audio", 1000, false);
        usd.price = Money::new(1000, Currency::USD);
        let result = ProductCatalog::from_products(vec![product(1, "audio", 1000, false), usd]);
        assert!(matches!(result, Err(CommerceError::CurrencyMismatch { .. })));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": 10, "name": "Mug", "description": "Ceramic", "price": 9.5,
             "imageUrl": "https://example.com/mug.jpg", "category": "kitchen"},
            {"id": 11, "name": "Kettle", "description": "Electric", "price": "39.99",
             "imageUrl": "https://example.com/kettle.jpg", "category": "kitchen", "featured": true}
        ]"#;
        let catalog = ProductCatalog::from_json(json, Currency::USD).unwrap();
        assert_eq!(catalog.currency(), Currency::USD);
        assert_eq!(catalog.get(ProductId::new(10)).unwrap().price.amount_cents, 950);
        assert_eq!(catalog.featured().len(), 1);
    }

    #[test]
    fn test_from_drafts_propagates_validation() {
        let drafts = vec![ProductDraft {
            id: ProductId::new(1),
            name: String::new(),
            description: "x".to_string(),
            price: Decimal::ONE,
            image_url: "https://example.com/x.jpg".to_string(),
            category: String::new(),
            featured: false,
        }];
        assert!(matches!(
            ProductCatalog::from_drafts(drafts, Currency::EUR),
            Err(CommerceError::InvalidProduct(_))
        ));
    }

    #[test]
    fn test_sample_catalog() {
        let catalog = ProductCatalog::sample();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.currency(), Currency::EUR);
        assert_eq!(catalog.categories(), vec!["electronics"]);
        assert_eq!(catalog.featured().len(), 3);
        assert_eq!(
            catalog.get(ProductId::new(3)).unwrap().price,
            Money::new(24999, Currency::EUR)
        );
    }
}
