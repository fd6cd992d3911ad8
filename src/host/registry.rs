//! The platform's language registry.
//!
//! The registry is the authoritative list of language codes considered
//! "known" for content purposes. Custom codes are marked registered here at
//! startup; marking is additive and idempotent.

use crate::locales::LocaleError;
use std::collections::HashSet;
use std::sync::RwLock;
use tracing::debug;

/// Capability onto the host's language registry.
///
/// The host-integration layer implements this with whatever mechanism its
/// platform requires; the core only depends on the two operations below.
pub trait LanguageRegistry: Send + Sync {
    /// Whether `code` is already marked as registered.
    fn language_registered(&self, code: &str) -> bool;

    /// Mark `code` as registered.
    ///
    /// Must be additive and idempotent. A failure here is fatal to the whole
    /// registration cycle.
    fn mark_language_as_registered(&self, code: &str) -> Result<(), LocaleError>;
}

/// In-memory language registry used by the demo binary and tests.
#[derive(Debug, Default)]
pub struct InMemoryLanguageRegistry {
    registered: RwLock<HashSet<String>>,
}

impl InMemoryLanguageRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with `codes` already marked registered.
    pub fn seeded(codes: &[&str]) -> Self {
        Self {
            registered: RwLock::new(codes.iter().map(|c| c.to_string()).collect()),
        }
    }

    /// Number of registered codes.
    pub fn registered_count(&self) -> usize {
        self.registered.read().unwrap().len()
    }
}

impl LanguageRegistry for InMemoryLanguageRegistry {
    fn language_registered(&self, code: &str) -> bool {
        self.registered.read().unwrap().contains(code)
    }

    fn mark_language_as_registered(&self, code: &str) -> Result<(), LocaleError> {
        self.registered.write().unwrap().insert(code.to_string());
        debug!("Marked language '{}' as registered", code);
        Ok(())
    }
}
