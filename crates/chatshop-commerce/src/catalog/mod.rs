//! Product catalog module.
//!
//! Contains the product type, validated product drafts, filters, and the
//! read-only catalog with its query functions.

mod catalog;
mod filter;
mod product;
mod sample;

pub use catalog::ProductCatalog;
pub use filter::ProductFilter;
pub use product::{Product, ProductDraft};
