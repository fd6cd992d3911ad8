//! Preview binary - runs a locale registration cycle against an in-memory
//! host and displays the patched entries, without a real content platform.
//!
//! Usage:
//!   cargo run --bin preview
//!
//! Optional environment variables:
//! - LANGUAGE_DEFINITIONS_FILE (defaults to languages.json)
//! - PROCESS_ROLE (defaults to unset, which falls back to the delivery database)
//! - AUTHORING_DATABASE / DELIVERY_DATABASE / ALTERNATE_DELIVERY_DATABASE
//! - NATIVE_NAME_STRATEGY ("mirror-english" or "region-native")

use anyhow::Result;
use custom_locales::host::{
    BuiltinCultureCatalog, CacheManager, InMemoryDatabase, InMemoryLanguageRegistry,
    InMemoryLocaleNames, REGISTRY_CACHE_NAME,
};
use custom_locales::locales::IsoRegionSource;
use custom_locales::{Config, CustomLocaleManager, HostServices, LanguageDefinitions};
use std::sync::Arc;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("custom_locales=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    // Seed the in-memory host the way a content deployment would look:
    // both databases carry the custom codes alongside a native one.
    let definitions = LanguageDefinitions::load(&config.definitions_file)?;
    let mut languages: Vec<String> = vec!["en".to_string(), "en-us".to_string()];
    if definitions.is_empty() {
        // No definitions configured: seed sample codes so the preview has
        // something to show.
        languages.extend(["du-my".to_string(), "de-ch".to_string()]);
    } else {
        languages.extend(definitions.iter().map(|d| d.name.clone()));
    }
    let language_refs: Vec<&str> = languages.iter().map(|l| l.as_str()).collect();

    let master = Arc::new(InMemoryDatabase::new("master", &language_refs));
    let web = Arc::new(InMemoryDatabase::new("web", &language_refs));
    master.driver_cache().unwrap().prime(&["en"]);
    web.driver_cache().unwrap().prime(&["en"]);

    let caches = Arc::new(CacheManager::new());
    caches
        .get_or_create(REGISTRY_CACHE_NAME)
        .set("en", "registered");

    let locale_names = Arc::new(InMemoryLocaleNames::new());
    let services = HostServices {
        registry: Arc::new(InMemoryLanguageRegistry::seeded(&["en"])),
        databases: vec![master, web],
        caches,
        catalog: Arc::new(BuiltinCultureCatalog::new()),
        locale_names: locale_names.clone(),
        regions: Arc::new(IsoRegionSource::new()),
    };

    info!("Running locale registration cycle");
    let manager = CustomLocaleManager::new(config, services);
    let report = manager.run_startup_cycle()?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    println!();

    // Show what locale-name lookups return after the cycle.
    for code in &report.patched {
        let entry = locale_names.get(code);
        println!("{}", code);
        println!("  display: {}", entry.display_name);
        println!("  english: {}", entry.english_name);
        println!("  native:  {}", entry.native_name);
    }

    Ok(())
}
