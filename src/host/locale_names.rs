//! The process-wide locale-name cache.
//!
//! The host runtime looks locale names up here on every request thread. An
//! entry is created lazily with placeholder names the first time a code is
//! looked up; the registration cycle then overwrites the placeholder fields
//! with synthesized names. Writes are plain field overwrites on existing
//! entries, so concurrent readers see either the old or the new name set,
//! never a torn structure.

use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};
use tracing::debug;

/// One entry in the locale-name cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleEntry {
    /// English-only name (e.g. "Dummy (Malaysia)")
    pub english_name: String,
    /// Native-script name
    pub native_name: String,
    /// UI-friendly name
    pub display_name: String,
}

impl LocaleEntry {
    /// Placeholder entry the host runtime seeds before any patching.
    fn placeholder(code: &str) -> Self {
        let name = format!("Unknown Locale ({})", code);
        Self {
            english_name: name.clone(),
            native_name: name.clone(),
            display_name: name,
        }
    }

    /// Whether this entry still carries the generic placeholder names.
    pub fn is_placeholder(&self) -> bool {
        self.display_name.starts_with("Unknown Locale (")
    }
}

/// Capability: overwrite the name fields of a locale entry.
///
/// The host-integration layer implements this with whatever mechanism its
/// platform requires; the core never touches entry internals directly.
pub trait LocaleNameWriter: Send + Sync {
    /// Overwrite the names cached for `code`.
    fn set_names(&self, code: &str, english: &str, native: &str, display: &str);
}

/// In-memory locale-name cache used by the demo binary and tests.
#[derive(Debug, Default)]
pub struct InMemoryLocaleNames {
    entries: RwLock<HashMap<String, LocaleEntry>>,
}

/// Process-wide cache instance (initialized lazily)
static LOCALE_NAMES: OnceLock<InMemoryLocaleNames> = OnceLock::new();

impl InMemoryLocaleNames {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the process-wide cache instance.
    pub fn global() -> &'static InMemoryLocaleNames {
        LOCALE_NAMES.get_or_init(InMemoryLocaleNames::new)
    }

    /// Look up the entry for `code`, seeding the placeholder on first lookup.
    pub fn get(&self, code: &str) -> LocaleEntry {
        self.entries
            .write()
            .unwrap()
            .entry(code.to_string())
            .or_insert_with(|| LocaleEntry::placeholder(code))
            .clone()
    }

    /// Look up the entry for `code` without seeding a placeholder.
    pub fn peek(&self, code: &str) -> Option<LocaleEntry> {
        self.entries.read().unwrap().get(code).cloned()
    }

    /// Number of entries currently cached.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }
}

impl LocaleNameWriter for InMemoryLocaleNames {
    fn set_names(&self, code: &str, english: &str, native: &str, display: &str) {
        let mut entries = self.entries.write().unwrap();
        let entry = entries
            .entry(code.to_string())
            .or_insert_with(|| LocaleEntry::placeholder(code));

        entry.english_name = english.to_string();
        entry.native_name = native.to_string();
        entry.display_name = display.to_string();
        let display_name = display;
        debug!("Installed locale names for '{}': {}", code, display_name);
    }
}
