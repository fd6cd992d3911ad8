//! Content databases configured for the process.
//!
//! Each database exposes the language codes configured as "known" for its
//! content. A database's storage driver may additionally keep a private
//! language-list cache; that cache must be reset when new languages are
//! registered so the next read re-derives the list.

use crate::host::cache::ResettableCache;
use std::sync::RwLock;
use tracing::debug;

/// Capability onto a content database.
pub trait ContentDatabase: Send + Sync {
    /// The database name (e.g. "master", "web").
    fn name(&self) -> &str;

    /// Language codes configured as known languages for this database.
    fn known_languages(&self) -> Vec<String>;

    /// The storage driver's private language-list cache, when it keeps one.
    ///
    /// Heterogeneous deployments may have databases whose drivers keep no
    /// such cache; those return `None` and are skipped silently.
    fn language_cache(&self) -> Option<&dyn ResettableCache>;
}

/// Driver-private language-list cache.
///
/// `None` means uninitialized: the driver derives the list on the next read.
#[derive(Debug, Default)]
pub struct DriverLanguageCache {
    languages: RwLock<Option<Vec<String>>>,
}

impl DriverLanguageCache {
    /// Create an uninitialized cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the cache with a derived language list.
    pub fn prime(&self, languages: &[&str]) {
        *self.languages.write().unwrap() =
            Some(languages.iter().map(|l| l.to_string()).collect());
    }

    /// The cached list, if the cache is initialized.
    pub fn cached(&self) -> Option<Vec<String>> {
        self.languages.read().unwrap().clone()
    }
}

impl ResettableCache for DriverLanguageCache {
    fn reset(&self) {
        *self.languages.write().unwrap() = None;
        debug!("Reset driver language cache to uninitialized");
    }

    fn is_initialized(&self) -> bool {
        self.languages.read().unwrap().is_some()
    }
}

/// In-memory content database used by the demo binary and tests.
pub struct InMemoryDatabase {
    name: String,
    languages: RwLock<Vec<String>>,
    cache: Option<DriverLanguageCache>,
}

impl InMemoryDatabase {
    /// Create a database whose driver keeps a language-list cache.
    pub fn new(name: &str, languages: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            languages: RwLock::new(languages.iter().map(|l| l.to_string()).collect()),
            cache: Some(DriverLanguageCache::new()),
        }
    }

    /// Create a database whose driver keeps no language-list cache.
    pub fn without_language_cache(name: &str, languages: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            languages: RwLock::new(languages.iter().map(|l| l.to_string()).collect()),
            cache: None,
        }
    }

    /// Add a language code to the database's known-language list.
    pub fn add_language(&self, code: &str) {
        self.languages.write().unwrap().push(code.to_string());
    }

    /// The driver cache, when this database was created with one.
    pub fn driver_cache(&self) -> Option<&DriverLanguageCache> {
        self.cache.as_ref()
    }
}

impl ContentDatabase for InMemoryDatabase {
    fn name(&self) -> &str {
        &self.name
    }

    fn known_languages(&self) -> Vec<String> {
        self.languages.read().unwrap().clone()
    }

    fn language_cache(&self) -> Option<&dyn ResettableCache> {
        self.cache.as_ref().map(|c| c as &dyn ResettableCache)
    }
}
