//! Startup hook that triggers the locale registration cycle.

use crate::locales::CustomLocaleManager;
use tracing::{error, info};

/// Pipeline processor invoked by the host at a fixed startup extension point.
///
/// The hook consumes no arguments and produces no value. Failures are logged
/// for operators; the process keeps serving with best-effort locale names
/// rather than failing to start.
pub struct RegisterLanguages;

impl RegisterLanguages {
    /// Run the registration cycle and log the outcome.
    pub fn process(manager: &CustomLocaleManager) {
        info!("Registering custom languages and patching locale names");
        match manager.run_startup_cycle() {
            Ok(report) => info!(
                "Registered {} custom languages, patched {} locales",
                report.registered.len(),
                report.patched.len()
            ),
            Err(e) => error!("Custom language registration failed: {:#}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{
        BuiltinCultureCatalog, CacheManager, InMemoryDatabase, InMemoryLanguageRegistry,
        InMemoryLocaleNames,
    };
    use crate::locales::{HostServices, IsoRegionSource, NativeNameStrategy};
    use crate::Config;
    use std::sync::Arc;

    #[test]
    fn test_process_runs_the_cycle_and_does_not_panic() {
        let config = Config {
            role: None,
            authoring_database: "master".to_string(),
            delivery_database: "web".to_string(),
            alternate_delivery_database: None,
            // Missing definitions file: an empty registration set.
            definitions_file: "/non/existent/languages.json".to_string(),
            native_name_strategy: NativeNameStrategy::MirrorEnglish,
        };
        let locale_names = Arc::new(InMemoryLocaleNames::new());
        let services = HostServices {
            registry: Arc::new(InMemoryLanguageRegistry::new()),
            databases: vec![Arc::new(InMemoryDatabase::new("web", &["en", "du-my"]))],
            caches: Arc::new(CacheManager::new()),
            catalog: Arc::new(BuiltinCultureCatalog::new()),
            locale_names: locale_names.clone(),
            regions: Arc::new(IsoRegionSource::new()),
        };
        let manager = CustomLocaleManager::new(config, services);

        RegisterLanguages::process(&manager);

        // The cycle ran: the database's custom locale was patched.
        assert!(locale_names.peek("du-my").is_some());
    }
}
