//! Language definitions: the set of custom language codes to register.
//!
//! Definitions are owned by configuration and consumed here as a read-only
//! sequence. They are read once per registration cycle; nothing in the
//! cycle mutates them.

use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{info, warn};

static LOCALE_CODE_REGEX: OnceLock<Regex> = OnceLock::new();

/// A single custom language definition from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguageDefinition {
    /// Locale code of form `language-REGION` (e.g. "du-my")
    pub name: String,
}

/// The full set of custom language definitions for this process.
#[derive(Debug, Clone, Default)]
pub struct LanguageDefinitions {
    definitions: Vec<LanguageDefinition>,
}

impl LanguageDefinitions {
    /// Load definitions from a JSON file.
    ///
    /// A missing file yields an empty set (a deployment may simply have no
    /// custom languages); an unreadable or unparsable file is a
    /// configuration error.
    ///
    /// # Arguments
    /// * `path` - Path to a JSON array of `{"name": "xx-yy"}` objects
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            info!("No language definitions file at '{}', nothing to register", path);
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read language definitions from {}", path))?;
        let definitions: Vec<LanguageDefinition> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse language definitions from {}", path))?;

        for definition in &definitions {
            if !Self::is_well_formed(&definition.name) {
                warn!(
                    "Language definition '{}' does not look like a lang-REGION code",
                    definition.name
                );
            }
        }

        info!("Loaded {} language definitions from '{}'", definitions.len(), path);
        Ok(Self { definitions })
    }

    /// Build a definition set from plain codes.
    pub fn from_codes(codes: &[&str]) -> Self {
        Self {
            definitions: codes
                .iter()
                .map(|code| LanguageDefinition {
                    name: code.to_string(),
                })
                .collect(),
        }
    }

    /// Whether `code` has the expected `lang-REGION` shape.
    pub fn is_well_formed(code: &str) -> bool {
        let regex = LOCALE_CODE_REGEX
            .get_or_init(|| Regex::new(r"^[A-Za-z]{2,8}(-[A-Za-z0-9]{2,8})+$").unwrap());
        regex.is_match(code)
    }

    /// Iterate over the definitions in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &LanguageDefinition> {
        self.definitions.iter()
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the set holds no definitions.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    // ==================== Helper Functions ====================

    /// Write a definitions file into a fresh temp dir
    fn write_definitions(contents: &str) -> (TempDir, String) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("languages.json");
        let mut file = std::fs::File::create(&path).expect("Failed to create file");
        file.write_all(contents.as_bytes()).expect("Failed to write");
        let path = path.to_str().unwrap().to_string();
        (temp_dir, path)
    }

    // ==================== Loading Tests ====================

    #[test]
    fn test_load_definitions_from_file() {
        let (_temp_dir, path) = write_definitions(r#"[{"name": "du-my"}, {"name": "xx-zz"}]"#);
        let definitions = LanguageDefinitions::load(&path).expect("Should load");

        assert_eq!(definitions.len(), 2);
        let codes: Vec<&str> = definitions.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(codes, vec!["du-my", "xx-zz"]);
    }

    #[test]
    fn test_load_missing_file_yields_empty_set() {
        let definitions =
            LanguageDefinitions::load("/non/existent/languages.json").expect("Should not fail");
        assert!(definitions.is_empty());
    }

    #[test]
    fn test_load_invalid_json_is_an_error() {
        let (_temp_dir, path) = write_definitions("not json at all");
        let result = LanguageDefinitions::load(&path);

        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("parse"));
    }

    #[test]
    fn test_load_accepts_ill_shaped_codes() {
        // Shape problems are warned about at load time but only rejected by
        // the patcher, which records them per-code.
        let (_temp_dir, path) = write_definitions(r#"[{"name": "noregion"}]"#);
        let definitions = LanguageDefinitions::load(&path).expect("Should load");

        assert_eq!(definitions.len(), 1);
    }

    // ==================== Shape Tests ====================

    #[test]
    fn test_well_formed_codes() {
        assert!(LanguageDefinitions::is_well_formed("du-my"));
        assert!(LanguageDefinitions::is_well_formed("en-US"));
        assert!(LanguageDefinitions::is_well_formed("es-419"));
    }

    #[test]
    fn test_ill_formed_codes() {
        assert!(!LanguageDefinitions::is_well_formed("noregion"));
        assert!(!LanguageDefinitions::is_well_formed("x-"));
        assert!(!LanguageDefinitions::is_well_formed(""));
        assert!(!LanguageDefinitions::is_well_formed("du_my"));
    }

    #[test]
    fn test_from_codes_preserves_order() {
        let definitions = LanguageDefinitions::from_codes(&["b-b", "a-a"]);
        let codes: Vec<&str> = definitions.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(codes, vec!["b-b", "a-a"]);
    }
}
