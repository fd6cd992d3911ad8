//! Named caches owned by the host platform.
//!
//! The registry keeps a read-through cache of language lookups, addressed by
//! name through the [`CacheManager`]. Invalidation is always wholesale: the
//! cache is cleared rather than selectively updated, because partial
//! invalidation can leave stale entries behind when the registration set
//! changes size.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Name of the language registry's read-through cache.
pub const REGISTRY_CACHE_NAME: &str = "LanguageRegistry - Languages";

/// A named, string-keyed cache that is cleared wholesale.
#[derive(Debug)]
pub struct StringCache {
    name: String,
    entries: RwLock<HashMap<String, String>>,
}

impl StringCache {
    /// Create an empty cache with the given name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// The name this cache is registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a cached value.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.read().unwrap().get(key).cloned()
    }

    /// Store a value under `key`, replacing any previous value.
    pub fn set(&self, key: &str, value: &str) {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }

    /// Drop every entry so the next read re-queries the backing source.
    pub fn clear(&self) {
        let mut entries = self.entries.write().unwrap();
        let dropped = entries.len();
        entries.clear();
        debug!("Cleared cache '{}' ({} entries dropped)", self.name, dropped);
    }
}

/// A driver-private cache that is reset to uninitialized rather than cleared.
///
/// Resetting forces the owning driver to re-derive its contents on the next
/// read, which is how newly registered languages become visible to it.
pub trait ResettableCache: Send + Sync {
    /// Throw away the cached state entirely.
    fn reset(&self);

    /// Whether the cache currently holds derived state.
    fn is_initialized(&self) -> bool;
}

/// Process-wide registry of named caches.
#[derive(Debug, Default)]
pub struct CacheManager {
    caches: RwLock<HashMap<String, Arc<StringCache>>>,
}

impl CacheManager {
    /// Create an empty cache manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cache registered under `name`, creating it if necessary.
    pub fn get_or_create(&self, name: &str) -> Arc<StringCache> {
        let mut caches = self.caches.write().unwrap();
        caches
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(StringCache::new(name)))
            .clone()
    }

    /// Find the cache registered under `name`, if one exists.
    ///
    /// A missing cache is not an error; callers treat it as nothing to clear.
    pub fn find_cache_by_name(&self, name: &str) -> Option<Arc<StringCache>> {
        self.caches.read().unwrap().get(name).cloned()
    }
}
