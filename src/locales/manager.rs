//! Custom locale manager: registers custom languages and patches the
//! process-wide locale-name cache.
//!
//! The registration cycle runs once, synchronously, at process startup:
//!
//! 1. every configured custom language is marked registered in the host
//!    registry,
//! 2. driver-private language caches and the registry read cache are
//!    invalidated so the registrations take effect,
//! 3. every custom locale configured for the active content database gets
//!    synthesized display/English/native names installed over its
//!    "Unknown Locale" placeholder.
//!
//! Step order matters: each step assumes the prior one completed.

use crate::config::Config;
use crate::host::{
    CacheManager, ContentDatabase, CultureCatalog, LanguageRegistry, LocaleNameWriter,
    ParentLanguageNames, REGISTRY_CACHE_NAME,
};
use crate::locales::definitions::LanguageDefinitions;
use crate::locales::error::LocaleError;
use crate::locales::region::{resolve_region_names, RegionInfoSource};
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// How the native name of a patched locale is composed.
///
/// The platform historically mirrors the English composition into the native
/// name instead of using the region's native name; both behaviors are
/// selectable so either can be reproduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum NativeNameStrategy {
    /// Native name repeats the English composition (observed behavior).
    #[default]
    MirrorEnglish,
    /// Native name composes the parent's and region's native names.
    UseRegionNative,
}

impl FromStr for NativeNameStrategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "mirror-english" => Ok(Self::MirrorEnglish),
            "region-native" => Ok(Self::UseRegionNative),
            other => Err(format!("unknown native name strategy: '{}'", other)),
        }
    }
}

/// Everything the registration cycle touches in the host platform.
pub struct HostServices {
    /// The platform's language registry
    pub registry: Arc<dyn LanguageRegistry>,
    /// Content databases configured for the process
    pub databases: Vec<Arc<dyn ContentDatabase>>,
    /// Named caches, including the registry read cache
    pub caches: Arc<CacheManager>,
    /// The environment's culture catalog
    pub catalog: Arc<dyn CultureCatalog>,
    /// The process-wide locale-name cache
    pub locale_names: Arc<dyn LocaleNameWriter>,
    /// Authoritative region information
    pub regions: Arc<dyn RegionInfoSource>,
}

/// Outcome of a registration cycle.
///
/// Consumed by logging, tests and the preview binary; the startup hook
/// ignores it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RegistrationReport {
    /// Codes newly marked registered this cycle
    pub registered: Vec<String>,
    /// Number of driver-private language caches reset
    pub driver_caches_reset: usize,
    /// Whether the registry read cache was found and cleared
    pub registry_cache_cleared: bool,
    /// Name of the content database the patcher resolved
    pub database: String,
    /// Custom locales whose names were installed
    pub patched: Vec<String>,
    /// Custom locales skipped because they lack a region subtag
    pub malformed: Vec<String>,
}

/// Registers custom languages and installs their locale names.
pub struct CustomLocaleManager {
    config: Config,
    services: HostServices,
}

impl CustomLocaleManager {
    /// Create a manager over the given configuration and host services.
    pub fn new(config: Config, services: HostServices) -> Self {
        Self { config, services }
    }

    /// Run the full startup cycle: register, invalidate, patch.
    ///
    /// Re-invocation is safe (the cycle is idempotent) but wasteful; the
    /// cycle is expected to run exactly once per process.
    pub fn run_startup_cycle(&self) -> Result<RegistrationReport> {
        let mut report = RegistrationReport::default();
        self.register_custom_languages_and_clear_cache(&mut report)?;
        self.build_and_initialize_culture_info_cache(&mut report)?;

        info!(
            "Locale cycle finished: {} registered, {} patched, {} malformed",
            report.registered.len(),
            report.patched.len(),
            report.malformed.len()
        );
        Ok(report)
    }

    /// Register all configured custom languages and invalidate stale caches.
    ///
    /// Steps, in order: mark every unregistered definition as registered
    /// (any failure here aborts the whole operation), reset each database
    /// driver's private language cache, then clear the registry read cache.
    pub fn register_custom_languages_and_clear_cache(
        &self,
        report: &mut RegistrationReport,
    ) -> Result<()> {
        let definitions = LanguageDefinitions::load(&self.config.definitions_file)?;
        self.register_definitions(&definitions, report)?;
        self.reset_driver_language_caches(report);
        self.clear_registry_cache(report);
        Ok(())
    }

    /// Synthesize and install locale names for every custom locale of the
    /// active content database.
    ///
    /// A locale code without a region subtag is recorded and skipped;
    /// processing continues with the remaining codes.
    pub fn build_and_initialize_culture_info_cache(
        &self,
        report: &mut RegistrationReport,
    ) -> Result<()> {
        let database = match self.resolve_active_database() {
            Some(database) => database,
            None => {
                error!("No content database resolved, skipping locale name patching");
                return Ok(());
            }
        };
        report.database = database.name().to_string();

        for code in self.custom_culture_names(database.as_ref()) {
            match self.initialize_custom_culture(&code) {
                Ok(()) => report.patched.push(code),
                Err(err) => {
                    error!("Skipping locale '{}': {}", code, err);
                    report.malformed.push(code);
                }
            }
        }
        Ok(())
    }

    /// Mark every definition not already registered. Any marking failure is
    /// fatal; partial registration is not tolerated.
    fn register_definitions(
        &self,
        definitions: &LanguageDefinitions,
        report: &mut RegistrationReport,
    ) -> Result<()> {
        for definition in definitions.iter() {
            if self.services.registry.language_registered(&definition.name) {
                debug!("Language '{}' already registered, skipping", definition.name);
                continue;
            }

            self.services
                .registry
                .mark_language_as_registered(&definition.name)
                .with_context(|| {
                    format!("Failed to register custom language '{}'", definition.name)
                })?;
            report.registered.push(definition.name.clone());
        }
        Ok(())
    }

    /// Reset each driver's private language cache so the next read picks up
    /// the newly registered codes. Databases without the capability are
    /// skipped silently.
    fn reset_driver_language_caches(&self, report: &mut RegistrationReport) {
        for database in &self.services.databases {
            match database.language_cache() {
                Some(cache) => {
                    cache.reset();
                    report.driver_caches_reset += 1;
                }
                None => debug!(
                    "Database '{}' has no driver language cache, nothing to reset",
                    database.name()
                ),
            }
        }
    }

    /// Clear the registry's read cache. A missing cache means nothing to clear.
    fn clear_registry_cache(&self, report: &mut RegistrationReport) {
        match self.services.caches.find_cache_by_name(REGISTRY_CACHE_NAME) {
            Some(cache) => {
                cache.clear();
                report.registry_cache_cleared = true;
            }
            None => debug!("Cache '{}' not present, nothing to clear", REGISTRY_CACHE_NAME),
        }
    }

    /// Database name preferred by the configured process role.
    fn active_database_name(&self) -> String {
        match self.config.role.as_deref() {
            Some(role) if role.eq_ignore_ascii_case("ContentDelivery") => {
                self.config.delivery_database_name()
            }
            Some(_) => self.config.authoring_database.clone(),
            None => {
                warn!("Process role not configured, falling back to the delivery database");
                self.config.delivery_database_name()
            }
        }
    }

    /// Resolve the active content database, falling back to the delivery
    /// database when the preferred name is not configured.
    fn resolve_active_database(&self) -> Option<Arc<dyn ContentDatabase>> {
        let preferred = self.active_database_name();
        if let Some(database) = self.find_database(&preferred) {
            return Some(database);
        }

        let fallback = self.config.delivery_database_name();
        if fallback != preferred {
            warn!(
                "Database '{}' is not configured, falling back to '{}'",
                preferred, fallback
            );
            if let Some(database) = self.find_database(&fallback) {
                return Some(database);
            }
        }
        None
    }

    fn find_database(&self, name: &str) -> Option<Arc<dyn ContentDatabase>> {
        self.services
            .databases
            .iter()
            .find(|database| database.name() == name)
            .cloned()
    }

    /// Language codes configured for `database` that the environment's
    /// culture catalog does not know, lower-cased for lookup stability.
    fn custom_culture_names(&self, database: &dyn ContentDatabase) -> Vec<String> {
        let native: HashSet<String> = self
            .services
            .catalog
            .culture_names()
            .iter()
            .map(|name| name.to_lowercase())
            .collect();

        database
            .known_languages()
            .iter()
            .filter(|language| !native.contains(&language.to_lowercase()))
            .map(|language| language.to_lowercase())
            .collect()
    }

    /// Compose and install the names for one custom locale.
    fn initialize_custom_culture(&self, code: &str) -> Result<(), LocaleError> {
        let (language, region) = code
            .split_once('-')
            .ok_or_else(|| LocaleError::MalformedLocaleCode(code.to_string()))?;

        let parent = self
            .services
            .catalog
            .parent_names(language)
            .unwrap_or_else(|| ParentLanguageNames::from_code(language));
        let region_names = resolve_region_names(self.services.regions.as_ref(), region);

        let display_name = format!("{} ({})", parent.display_name, region_names.display_name);
        let english_name = format!("{} ({})", parent.english_name, region_names.english_name);
        let native_name = match self.config.native_name_strategy {
            NativeNameStrategy::MirrorEnglish => english_name.clone(),
            NativeNameStrategy::UseRegionNative => {
                format!("{} ({})", parent.native_name, region_names.native_name)
            }
        };

        self.services
            .locale_names
            .set_names(code, &english_name, &native_name, &display_name);
        debug!("Installed names for custom locale '{}': {}", code, display_name);
        Ok(())
    }
}
