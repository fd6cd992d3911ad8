use crate::locales::NativeNameStrategy;
use anyhow::Result;

#[derive(Debug, Clone)]
pub struct Config {
    // Process role ("ContentAuthoring" / "ContentDelivery")
    pub role: Option<String>,

    // Databases
    pub authoring_database: String,
    pub delivery_database: String,
    pub alternate_delivery_database: Option<String>,

    // Custom language definitions
    pub definitions_file: String,

    // Locale naming
    pub native_name_strategy: NativeNameStrategy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            role: std::env::var("PROCESS_ROLE").ok(),

            authoring_database: std::env::var("AUTHORING_DATABASE")
                .unwrap_or_else(|_| "master".to_string()),
            delivery_database: std::env::var("DELIVERY_DATABASE")
                .unwrap_or_else(|_| "web".to_string()),
            alternate_delivery_database: std::env::var("ALTERNATE_DELIVERY_DATABASE")
                .ok()
                .filter(|name| !name.is_empty()),

            definitions_file: std::env::var("LANGUAGE_DEFINITIONS_FILE")
                .unwrap_or_else(|_| "languages.json".to_string()),

            native_name_strategy: std::env::var("NATIVE_NAME_STRATEGY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
        })
    }

    /// Delivery database name, preferring the explicitly configured alternate
    pub fn delivery_database_name(&self) -> String {
        match &self.alternate_delivery_database {
            Some(name) => name.clone(),
            None => self.delivery_database.clone(),
        }
    }
}
