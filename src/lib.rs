//! Custom locale support for a content platform.
//!
//! Content deployments use locale codes the operating environment has never
//! heard of (`du-my` and friends). Left alone, those locales render as
//! "Unknown Locale" everywhere a name is shown. This crate registers the
//! custom codes with the platform's language registry at startup, clears the
//! caches that would keep serving the pre-registration state, and installs
//! synthesized display/English/native names into the process-wide
//! locale-name cache.
//!
//! The core depends only on narrow capability traits (see [`host`]); the
//! in-memory host implementations back the demo binary and the tests.

pub mod config;
pub mod hooks;
pub mod host;
pub mod locales;

pub use config::Config;
pub use locales::{
    resolve_region_names, CustomLocaleManager, HostServices, LanguageDefinitions, LocaleError,
    NativeNameStrategy, RegionNames, RegistrationReport,
};
