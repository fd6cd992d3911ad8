//! Custom locale registration and display-name override.
//!
//! Locales used by content but unknown to the operating environment show up
//! with a generic "Unknown Locale" display name. This module registers those
//! custom codes with the platform's language registry, invalidates the
//! caches that would otherwise serve stale language lists, and installs
//! human-readable display/English/native names into the process-wide
//! locale-name cache.
//!
//! # Architecture
//!
//! - `definitions`: the RegistrationSet of custom language codes, owned by
//!   configuration
//! - `region`: region-name resolution with a degrade-to-code fallback
//! - `manager`: the registration cycle itself (register, invalidate, patch)
//! - `error`: the typed error kinds the cycle records
//!
//! # Example
//!
//! ```rust,ignore
//! use custom_locales::{Config, CustomLocaleManager, HostServices};
//!
//! let manager = CustomLocaleManager::new(Config::from_env()?, services);
//! let report = manager.run_startup_cycle()?;
//! println!("patched {} locales", report.patched.len());
//! ```

mod definitions;
mod error;
mod manager;
mod region;

pub use definitions::{LanguageDefinition, LanguageDefinitions};
pub use error::LocaleError;
pub use manager::{
    CustomLocaleManager, HostServices, NativeNameStrategy, RegistrationReport,
};
pub use region::{resolve_region_names, IsoRegionSource, RegionInfoSource, RegionNames};
