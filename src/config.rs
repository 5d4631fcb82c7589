//! Resolver configuration.
//!
//! Everything the resolver would otherwise read from the process environment
//! mid-call is captured here once, up front. Binaries call
//! [`ResolverConfig::from_env`] at startup; tests and embedders build the
//! config directly so nothing depends on ambient state during a lookup.

use std::env;
use std::env::VarError;
use std::ffi::OsString;

/// Delimited list of extra dictionary locations, searched before the
/// per-user and system directories.
pub const ENV_SEARCH_PATH: &str = "LINGODICT_PATH";
/// Private-use subtag to select when the caller did not ask for one.
pub const ENV_VARIANT_OVERRIDE: &str = "LINGODICT_VARIANT";

/// Default location list baked in by `build.rs`, if one was configured.
pub const BUILD_DEFAULT_PATH: Option<&str> = option_env!("LINGODICT_DEFAULT_PATH");

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Raw `LINGODICT_PATH` value, still delimited. Kept as an `OsString`
    /// so non-UTF-8 directory names survive.
    pub search_path: Option<OsString>,
    /// Raw `LINGODICT_VARIANT` value.
    pub variant_override: Option<String>,
    /// Lowest-priority location list, still delimited.
    pub default_path: Option<String>,
    /// When false only the caller-supplied path is searched.
    pub use_platform_locations: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            search_path: None,
            variant_override: None,
            default_path: None,
            use_platform_locations: true,
        }
    }
}

impl ResolverConfig {
    /// Snapshot the environment and the build-time default path.
    pub fn from_env() -> Self {
        Self {
            search_path: env::var_os(ENV_SEARCH_PATH).filter(|value| !value.is_empty()),
            variant_override: env_non_empty(ENV_VARIANT_OVERRIDE),
            default_path: BUILD_DEFAULT_PATH.map(str::to_string),
            use_platform_locations: true,
        }
    }

    /// A config that searches nothing but the explicit path given per call.
    pub fn isolated() -> Self {
        Self {
            use_platform_locations: false,
            ..Self::default()
        }
    }

    pub fn with_search_path(mut self, value: impl Into<OsString>) -> Self {
        self.search_path = Some(value.into());
        self
    }

    pub fn with_variant_override(mut self, value: impl Into<String>) -> Self {
        self.variant_override = Some(value.into());
        self
    }

    pub fn with_default_path(mut self, value: impl Into<String>) -> Self {
        self.default_path = Some(value.into());
        self
    }

    pub fn with_platform_locations(mut self, enabled: bool) -> Self {
        self.use_platform_locations = enabled;
        self
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        Ok(_) => None,
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(os)) => Some(os.to_string_lossy().into_owned()),
    }
}
