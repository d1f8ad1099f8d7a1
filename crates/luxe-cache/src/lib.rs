//! Key-value persistence for the Lumina Luxe storefront.
//!
//! Storefront logic only ever talks to the [`KeyValueStore`] capability. Two
//! backends ship here: [`MemoryStore`] for tests and ephemeral sessions, and
//! [`FileStore`], a single JSON document on disk.
//!
//! # Example
//!
//! ```rust
//! use luxe_cache::{Cache, MemoryStore};
//!
//! let cache = Cache::new(MemoryStore::new());
//!
//! // Store a value
//! cache.set_json("lumina-luxe-wishlist", &["1", "4"]).unwrap();
//!
//! // Retrieve a value
//! let ids: Option<Vec<String>> = cache.get_json("lumina-luxe-wishlist").unwrap();
//! assert_eq!(ids.unwrap(), vec!["1", "4"]);
//!
//! // Delete a value
//! cache.delete("lumina-luxe-wishlist").unwrap();
//! ```

mod error;
mod kv;
mod store;

pub use error::CacheError;
pub use kv::{Cache, KeyValueStore};
pub use store::{FileStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KeyValueStore, MemoryStore};
}
