//! Recently viewed and wishlist id lists, plus their persistence.

use luxe_cache::{cache_key, Cache, CacheError, KeyValueStore};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::ids::ProductId;

/// Most ids kept in the recently viewed list.
pub const RECENTLY_VIEWED_CAP: usize = 8;

/// Bounded, deduplicated, most-recent-first list of viewed products.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentlyViewed {
    ids: Vec<ProductId>,
}

impl RecentlyViewed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from stored ids, re-applying dedup and the cap.
    pub fn from_ids(ids: Vec<ProductId>) -> Self {
        let mut list = Self::new();
        for id in ids.into_iter().rev() {
            list.record(id);
        }
        list
    }

    /// Move `id` to the front, dropping any older copy and the overflow.
    pub fn record(&mut self, id: ProductId) {
        self.ids.retain(|existing| existing != &id);
        self.ids.insert(0, id);
        self.ids.truncate(RECENTLY_VIEWED_CAP);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Uncapped set of saved products, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wishlist {
    ids: Vec<ProductId>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids(ids: Vec<ProductId>) -> Self {
        let mut list = Self::new();
        for id in ids {
            if !list.contains(&id) {
                list.ids.push(id);
            }
        }
        list
    }

    /// Flip membership. Returns `true` if the id is now on the list.
    pub fn toggle(&mut self, id: &ProductId) -> bool {
        if let Some(pos) = self.ids.iter().position(|i| i == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.clone());
            true
        }
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Namespace shared by every storefront key.
pub const KEY_PREFIX: &str = "lumina-luxe";

/// Storage key for the recently viewed list.
pub fn recently_viewed_key() -> String {
    cache_key!(KEY_PREFIX, "recently-viewed")
}

/// Storage key for the wishlist.
pub fn wishlist_key() -> String {
    cache_key!(KEY_PREFIX, "wishlist")
}

/// A list of product ids stored as a JSON array under one key.
///
/// Reads never fail: a missing value is an empty list and a corrupt one is
/// logged and treated as empty. Write failures are logged and swallowed.
pub struct PersistedIds<'a, S: KeyValueStore> {
    cache: &'a Cache<S>,
    key: String,
}

impl<'a, S: KeyValueStore> PersistedIds<'a, S> {
    pub fn new(cache: &'a Cache<S>, key: impl Into<String>) -> Self {
        Self {
            cache,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn load(&self) -> Vec<ProductId> {
        match self.cache.get_json::<Vec<ProductId>>(&self.key) {
            Ok(Some(ids)) => {
                debug!(key = %self.key, count = ids.len(), "Loaded persisted ids");
                ids
            }
            Ok(None) => Vec::new(),
            Err(CacheError::SerializeError(e)) => {
                warn!(key = %self.key, error = %e, "Stored id list is corrupt, starting empty");
                Vec::new()
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read stored id list");
                Vec::new()
            }
        }
    }

    pub fn save(&self, ids: &[ProductId]) {
        if let Err(e) = self.cache.set_json(&self.key, ids) {
            warn!(key = %self.key, error = %e, "Failed to persist id list");
        }
    }

    pub fn clear(&self) {
        if let Err(e) = self.cache.delete(&self.key) {
            warn!(key = %self.key, error = %e, "Failed to delete id list");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luxe_cache::MemoryStore;

    fn id(s: &str) -> ProductId {
        ProductId::new(s)
    }

    #[test]
    fn test_keys() {
        assert_eq!(recently_viewed_key(), "lumina-luxe-recently-viewed");
        assert_eq!(wishlist_key(), "lumina-luxe-wishlist");
    }

    #[test]
    fn test_record_moves_to_front() {
        let mut recent = RecentlyViewed::new();
        recent.record(id("1"));
        recent.record(id("2"));
        recent.record(id("1"));
        assert_eq!(recent.ids(), &[id("1"), id("2")]);
    }

    #[test]
    fn test_record_caps_at_eight() {
        let mut recent = RecentlyViewed::new();
        for n in 0..20 {
            recent.record(id(&n.to_string()));
        }
        assert_eq!(recent.len(), RECENTLY_VIEWED_CAP);
        assert_eq!(recent.ids()[0], id("19"));
        assert_eq!(recent.ids()[7], id("12"));
    }

    #[test]
    fn test_from_ids_keeps_order_and_dedups() {
        let recent = RecentlyViewed::from_ids(vec![id("3"), id("1"), id("3"), id("2")]);
        assert_eq!(recent.ids(), &[id("3"), id("1"), id("2")]);
    }

    #[test]
    fn test_wishlist_toggle() {
        let mut wishlist = Wishlist::new();
        assert!(wishlist.toggle(&id("4")));
        assert!(wishlist.contains(&id("4")));
        assert!(!wishlist.toggle(&id("4")));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_persisted_roundtrip() {
        let cache = Cache::new(MemoryStore::new());
        let stored = PersistedIds::new(&cache, wishlist_key());
        stored.save(&[id("1"), id("5")]);
        assert_eq!(
            cache.store().get("lumina-luxe-wishlist").unwrap().as_deref(),
            Some(r#"["1","5"]"#)
        );
        assert_eq!(stored.load(), vec![id("1"), id("5")]);
    }

    #[test]
    fn test_missing_loads_empty() {
        let cache = Cache::new(MemoryStore::new());
        assert!(PersistedIds::new(&cache, wishlist_key()).load().is_empty());
    }

    #[test]
    fn test_corrupt_loads_empty() {
        let store = MemoryStore::new();
        store.set("lumina-luxe-recently-viewed", "{not json").unwrap();
        let cache = Cache::new(store);
        assert!(PersistedIds::new(&cache, recently_viewed_key()).load().is_empty());
    }

    #[test]
    fn test_clear_deletes_key() {
        let cache = Cache::new(MemoryStore::new());
        let stored = PersistedIds::new(&cache, recently_viewed_key());
        stored.save(&[id("1")]);
        stored.clear();
        assert!(!cache.exists("lumina-luxe-recently-viewed").unwrap());
    }
}
