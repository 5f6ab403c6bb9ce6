//! Commerce error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in catalog, cart, and checkout operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Two catalog entries share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(ProductId),

    /// A product draft failed validation.
    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    /// A price could not be represented in the currency's minor units.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Checkout attempted with nothing in the cart.
    #[error("Your cart is empty; add a product before checking out")]
    EmptyCart,

    /// The total handed to the encoder disagrees with the cart lines.
    #[error("Order total mismatch: cart totals {expected}, got {got}")]
    TotalMismatch { expected: String, got: String },

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Cache error.
    #[error("Cache error: {0}")]
    CacheError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<chatshop_cache::CacheError> for CommerceError {
    fn from(e: chatshop_cache::CacheError) -> Self {
        CommerceError::CacheError(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
