//! Typed key-value storage for Chatshop.
//!
//! Provides a small, ergonomic API for persisting data in a key-value store
//! with automatic JSON serialization. Two backends ship with the crate: an
//! in-memory [`MemoryStore`] and a directory-backed [`FileStore`].
//!
//! # Example
//!
//! ```rust,ignore
//! use chatshop_cache::Cache;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct StoredLine {
//!     product_id: u64,
//!     quantity: i64,
//! }
//!
//! let cache = Cache::open_dir(".chatshop")?;
//!
//! // Store a value
//! cache.set("cart", &lines)?;
//!
//! // Retrieve a value
//! let lines: Option<Vec<StoredLine>> = cache.get("cart")?;
//!
//! // Delete a value
//! cache.delete("cart")?;
//! ```

mod error;
mod kv;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use store::{FileStore, KvStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KvStore, MemoryStore};
}
