//! Host-platform surface the registration cycle talks to.
//!
//! The core never reaches into host internals directly; it depends on the
//! narrow capability traits defined here. The in-memory implementations are
//! what the demo binary and the tests plug in; a real deployment substitutes
//! its own implementations of the same traits.
//!
//! # Capabilities
//!
//! - [`LanguageRegistry`]: query and mark registered language codes
//! - [`ContentDatabase`]: known-language lists plus an optional
//!   driver-private language cache
//! - [`CultureCatalog`]: the environment's native locale enumeration and
//!   base-language names
//! - [`LocaleNameWriter`]: overwrite the name fields of a cached locale entry
//! - [`CacheManager`] / [`ResettableCache`]: the cache surfaces invalidated
//!   by the cycle

mod cache;
mod catalog;
mod database;
mod locale_names;
mod registry;

pub use cache::{CacheManager, ResettableCache, StringCache, REGISTRY_CACHE_NAME};
pub use catalog::{BuiltinCultureCatalog, CultureCatalog, ParentLanguageNames};
pub use database::{ContentDatabase, DriverLanguageCache, InMemoryDatabase};
pub use locale_names::{InMemoryLocaleNames, LocaleEntry, LocaleNameWriter};
pub use registry::{InMemoryLanguageRegistry, LanguageRegistry};
