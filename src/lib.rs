//! Dictionary discovery and locale resolution.
//!
//! Finds installed language-resource bundles ("dictionaries") across the
//! configured search locations and on-disk format versions, and picks the one
//! that should serve a requested locale.
//!
//! ```text
//! locations -> build_catalog (format loaders) -> rank -> DictionaryFinder::load
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod loader;
pub mod locations;
pub mod resolver;
pub mod tag;

pub use catalog::{
    Backends, Catalog, Dictionary, DictionaryLocation, VariantKey, build_catalog, rank,
};
pub use config::{ENV_SEARCH_PATH, ENV_VARIANT_OVERRIDE, ResolverConfig};
pub use error::ResolveError;
pub use loader::{FormatLoader, FormatVersion, VersionedLoader, active_loaders};
pub use locations::{
    FixedLocations, HostPlatform, PATH_DELIMITER, PlatformLocations, search_locations,
    split_search_path,
};
pub use resolver::DictionaryFinder;
pub use tag::{LanguageTag, matches};
