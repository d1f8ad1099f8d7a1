//! Key-value capability and the typed JSON wrapper around it.

use crate::CacheError;
use serde::{de::DeserializeOwned, Serialize};

/// A flat string-to-string store.
///
/// Core logic depends only on this trait; concrete backends decide where the
/// bytes live.
pub trait KeyValueStore: Send + Sync {
    /// Get the raw value for a key, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store a raw value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Remove a key. Removing a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Check if a key exists.
    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get(key)?.is_some())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        (**self).delete(key)
    }
}

/// Type-safe cache over any [`KeyValueStore`].
///
/// Values are stored as JSON strings.
///
/// # Example
///
/// ```rust
/// use luxe_cache::{Cache, MemoryStore};
///
/// let cache = Cache::new(MemoryStore::new());
/// cache.set_json("ids", &vec!["1".to_string()]).unwrap();
/// let ids: Option<Vec<String>> = cache.get_json("ids").unwrap();
/// assert_eq!(ids, Some(vec!["1".to_string()]));
/// ```
pub struct Cache<S> {
    store: S,
}

impl<S: KeyValueStore> Cache<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get and decode a value.
    ///
    /// Returns `Ok(None)` if the key doesn't exist and
    /// `Err(CacheError::SerializeError)` if the stored text is not valid JSON
    /// for `T`. Callers pick their own fallback for the corrupt case.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Encode and store a value.
    pub fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw)
    }

    /// Delete a value.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    /// Check if a key exists.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store.exists(key)
    }
}

/// Helper to build cache keys with namespacing.
///
/// # Example
///
/// ```rust
/// let key = luxe_cache::cache_key!("lumina-luxe", "wishlist");
/// assert_eq!(key, "lumina-luxe-wishlist");
/// ```
#[macro_export]
macro_rules! cache_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push('-');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}
