//! Top-level dictionary lookup.
//!
//! [`DictionaryFinder`] ties the pieces together: it builds the search
//! locations, runs the active loaders into a catalog, ranks it, and walks the
//! ranking for the first dictionary whose tag the request accepts. Nothing is
//! cached; every call rescans.

use crate::catalog::{Dictionary, build_catalog, rank};
use crate::config::ResolverConfig;
use crate::error::ResolveError;
use crate::loader::{FormatLoader, active_loaders};
use crate::locations::{HostPlatform, PlatformLocations, search_locations};
use crate::tag::LanguageTag;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Requested private-use values that let the variant override apply.
const OVERRIDABLE_PRIVATE_USE: &[&str] = &["", "default", "fi_fi"];

pub struct DictionaryFinder {
    config: ResolverConfig,
    loaders: Vec<Box<dyn FormatLoader>>,
    platform: Box<dyn PlatformLocations>,
}

impl DictionaryFinder {
    pub fn new(
        config: ResolverConfig,
        loaders: Vec<Box<dyn FormatLoader>>,
        platform: Box<dyn PlatformLocations>,
    ) -> Self {
        Self {
            config,
            loaders,
            platform,
        }
    }

    /// Host platform locations and every loader compiled into this build.
    pub fn with_config(config: ResolverConfig) -> Self {
        Self::new(config, active_loaders(), Box::new(HostPlatform))
    }

    /// Configure from the process environment, read once here.
    pub fn from_env() -> Self {
        Self::with_config(ResolverConfig::from_env())
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Search locations for a lookup, highest priority first.
    pub fn locations(&self, path: Option<&Path>) -> Vec<PathBuf> {
        search_locations(path, &self.config, self.platform.as_ref())
    }

    /// Every discovered dictionary, in resolution order.
    pub fn find_all_available(&self, path: Option<&Path>) -> Vec<Dictionary> {
        let locations = self.locations(path);
        rank(build_catalog(&locations, &self.loaders))
    }

    /// Pick the dictionary for `language` (a BCP-47-like tag).
    pub fn load(&self, language: &str, path: Option<&Path>) -> Result<Dictionary, ResolveError> {
        let mut requested = LanguageTag::parse(language);

        let dictionaries = self.find_all_available(path);
        if dictionaries.is_empty() {
            return Err(ResolveError::NotFound);
        }

        if OVERRIDABLE_PRIVATE_USE.contains(&requested.private_use()) {
            if let Some(variant) = self.config.variant_override.as_deref() {
                debug!(%requested, variant, "applying variant override");
                requested.set_private_use(variant);
            }
        }

        match dictionaries
            .into_iter()
            .find(|dict| requested.matches(dict.language()))
        {
            Some(dict) => {
                debug!(
                    %requested,
                    selected = %dict.language(),
                    path = %dict.location().path.display(),
                    "resolved dictionary"
                );
                Ok(dict)
            }
            None => Err(ResolveError::NoMatch {
                requested: requested.to_string(),
            }),
        }
    }
}
