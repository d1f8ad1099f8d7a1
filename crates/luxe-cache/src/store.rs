//! Concrete [`KeyValueStore`] backends.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::{CacheError, KeyValueStore};

/// Process-local store. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Check if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON document on disk.
///
/// The whole document is loaded on open and rewritten on every mutation
/// (temp file + rename). A missing file opens as empty; an unreadable or
/// corrupt file is logged and also opens as empty.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`, creating parent directories as needed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    CacheError::OpenError(format!("{}: {}", parent.display(), e))
                })?;
            }
        }

        let entries = load_document(&path);
        debug!(path = %path.display(), keys = entries.len(), "opened file store");

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), CacheError> {
        let body = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, body)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn load_document(path: &Path) -> BTreeMap<String, String> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "unreadable state file, starting empty");
            return BTreeMap::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "corrupt state file, starting empty");
            BTreeMap::new()
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let mut entries = self.entries.lock();
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut entries = self.entries.lock();
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn scratch_path(name: &str) -> PathBuf {
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir()
            .join(format!("luxe-cache-{}-{}-{}", std::process::id(), n, name))
            .join("state.json")
    }

    #[test]
    fn test_memory_store_set_get_delete() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.len(), 1);
        store.delete("a").unwrap();
        assert!(store.get("a").unwrap().is_none());
    }

    #[test]
    fn test_file_store_persists_across_open() {
        let path = scratch_path("persist");
        {
            let store = FileStore::open(&path).unwrap();
            store.set("wishlist", r#"["1","2"]"#).unwrap();
        }
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("wishlist").unwrap().as_deref(),
            Some(r#"["1","2"]"#)
        );
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let path = scratch_path("missing");
        let store = FileStore::open(&path).unwrap();
        assert!(store.get("anything").unwrap().is_none());
        assert!(!path.exists());
    }

    #[test]
    fn test_file_store_corrupt_file_is_empty() {
        let path = scratch_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "this is not json").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert!(store.get("wishlist").unwrap().is_none());

        store.set("wishlist", "[]").unwrap();
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("wishlist").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_store_delete() {
        let path = scratch_path("delete");
        let store = FileStore::open(&path).unwrap();
        store.set("k", "v").unwrap();
        store.delete("k").unwrap();
        let reopened = FileStore::open(&path).unwrap();
        assert!(reopened.get("k").unwrap().is_none());
    }
}
