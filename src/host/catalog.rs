//! The operating environment's culture catalog.
//!
//! The catalog enumerates every locale code the environment knows natively
//! and supplies display/English/native names for base language subtags.
//! Locale codes used by content but absent from this catalog are the
//! "custom" locales that need synthesized display names.

use std::collections::HashMap;

/// Names of a base language subtag as the environment knows them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentLanguageNames {
    /// UI-friendly name (e.g. "English")
    pub display_name: String,
    /// English-only name (e.g. "German")
    pub english_name: String,
    /// Native-script name (e.g. "Deutsch")
    pub native_name: String,
}

impl ParentLanguageNames {
    /// Names reported by the environment.
    pub fn new(display_name: &str, english_name: &str, native_name: &str) -> Self {
        Self {
            display_name: display_name.to_string(),
            english_name: english_name.to_string(),
            native_name: native_name.to_string(),
        }
    }

    /// Degraded names: the raw language subtag fills all three fields.
    pub fn from_code(code: &str) -> Self {
        Self::new(code, code, code)
    }
}

/// Capability onto the environment's full culture catalog.
pub trait CultureCatalog: Send + Sync {
    /// Every locale code known to the environment.
    fn culture_names(&self) -> Vec<String>;

    /// Names of the base language `language`, or `None` when unknown.
    fn parent_names(&self, language: &str) -> Option<ParentLanguageNames>;
}

/// Locale codes the built-in catalog knows natively.
const BUILTIN_CULTURES: [&str; 21] = [
    "en", "en-us", "en-gb", "de", "de-de", "fr", "fr-fr", "es", "es-es", "it", "it-it", "nl",
    "nl-nl", "pt", "pt-br", "ja", "ja-jp", "zh", "zh-cn", "ar", "ar-ae",
];

/// Base language name rows: (code, display, english, native).
const BUILTIN_LANGUAGES: [(&str, &str, &str, &str); 10] = [
    ("en", "English", "English", "English"),
    ("de", "German", "German", "Deutsch"),
    ("fr", "French", "French", "français"),
    ("es", "Spanish", "Spanish", "español"),
    ("it", "Italian", "Italian", "italiano"),
    ("nl", "Dutch", "Dutch", "Nederlands"),
    ("pt", "Portuguese", "Portuguese", "português"),
    ("ja", "Japanese", "Japanese", "日本語"),
    ("zh", "Chinese", "Chinese", "中文"),
    ("ar", "Arabic", "Arabic", "العربية"),
];

/// Culture catalog backed by static tables, extensible for tests.
#[derive(Debug, Clone)]
pub struct BuiltinCultureCatalog {
    cultures: Vec<String>,
    languages: HashMap<String, ParentLanguageNames>,
}

impl BuiltinCultureCatalog {
    /// Catalog seeded with the built-in cultures and language names.
    pub fn new() -> Self {
        Self {
            cultures: BUILTIN_CULTURES.iter().map(|c| c.to_string()).collect(),
            languages: BUILTIN_LANGUAGES
                .iter()
                .map(|(code, display, english, native)| {
                    (
                        code.to_string(),
                        ParentLanguageNames::new(display, english, native),
                    )
                })
                .collect(),
        }
    }

    /// Catalog with no cultures and no language names.
    pub fn empty() -> Self {
        Self {
            cultures: Vec::new(),
            languages: HashMap::new(),
        }
    }

    /// Add a locale code to the catalog.
    pub fn with_culture(mut self, code: &str) -> Self {
        self.cultures.push(code.to_string());
        self
    }

    /// Add or replace the names of a base language.
    pub fn with_language(mut self, code: &str, display: &str, english: &str, native: &str) -> Self {
        self.languages
            .insert(code.to_string(), ParentLanguageNames::new(display, english, native));
        self
    }
}

impl Default for BuiltinCultureCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CultureCatalog for BuiltinCultureCatalog {
    fn culture_names(&self) -> Vec<String> {
        self.cultures.clone()
    }

    fn parent_names(&self, language: &str) -> Option<ParentLanguageNames> {
        self.languages.get(&language.to_lowercase()).cloned()
    }
}
