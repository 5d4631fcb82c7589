//! Ordered search locations for installed dictionaries.
//!
//! Locations are returned highest priority first. Duplicates are kept;
//! scanning the same directory twice only re-offers keys the catalog already
//! holds. Platform lookups that fail (no home directory, missing registry key)
//! contribute nothing rather than failing the search.

use crate::config::ResolverConfig;
use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::trace;

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

/// Directory name shared by the per-user and system locations.
pub const PRODUCT_DIR: &str = "lingodict";

#[cfg(windows)]
pub const PATH_DELIMITER: char = ';';
#[cfg(not(windows))]
pub const PATH_DELIMITER: char = ':';

/// Source of the well-known per-user and system dictionary directories.
pub trait PlatformLocations: Send + Sync {
    /// Per-user directories, in priority order.
    fn user_locations(&self) -> Vec<PathBuf>;
    /// System-wide directories, in priority order.
    fn system_locations(&self) -> Vec<PathBuf>;
}

/// Locations of the platform this crate was built for.
#[derive(Clone, Copy, Debug, Default)]
pub struct HostPlatform;

#[cfg(not(any(unix, windows)))]
impl PlatformLocations for HostPlatform {
    fn user_locations(&self) -> Vec<PathBuf> {
        Vec::new()
    }

    fn system_locations(&self) -> Vec<PathBuf> {
        Vec::new()
    }
}

/// Fixed directory lists, for embedding and tests.
#[derive(Clone, Debug, Default)]
pub struct FixedLocations {
    pub user: Vec<PathBuf>,
    pub system: Vec<PathBuf>,
}

impl PlatformLocations for FixedLocations {
    fn user_locations(&self) -> Vec<PathBuf> {
        self.user.clone()
    }

    fn system_locations(&self) -> Vec<PathBuf> {
        self.system.clone()
    }
}

/// Build the location list for one lookup.
///
/// Order: the explicit path, each `LINGODICT_PATH` element, per-user
/// directories, system directories, then the build-time default list.
pub fn search_locations(
    explicit: Option<&Path>,
    config: &ResolverConfig,
    platform: &dyn PlatformLocations,
) -> Vec<PathBuf> {
    let mut locations = Vec::new();
    if let Some(path) = explicit.filter(|p| !p.as_os_str().is_empty()) {
        locations.push(path.to_path_buf());
    }

    if config.use_platform_locations {
        if let Some(raw) = config.search_path.as_deref() {
            locations.extend(split_search_path(raw));
        }
        locations.extend(platform.user_locations());
        locations.extend(platform.system_locations());
        if let Some(raw) = config.default_path.as_deref() {
            locations.extend(split_search_path(raw));
        }
    }

    trace!(count = locations.len(), ?locations, "resolved search locations");
    locations
}

/// Split a delimited path list, keeping order and dropping empty elements.
pub fn split_search_path(value: impl AsRef<OsStr>) -> Vec<PathBuf> {
    env::split_paths(value.as_ref())
        .filter(|path| !path.as_os_str().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed() -> FixedLocations {
        FixedLocations {
            user: vec![PathBuf::from("/home/u/.lingodict")],
            system: vec![PathBuf::from("/etc/lingodict")],
        }
    }

    #[test]
    fn explicit_path_comes_first_and_default_last() {
        let config = ResolverConfig::default()
            .with_search_path(format!("/env/a{PATH_DELIMITER}/env/b"))
            .with_default_path("/usr/share/lingodict");
        let locations = search_locations(Some(Path::new("/explicit")), &config, &fixed());
        let expected: Vec<PathBuf> = [
            "/explicit",
            "/env/a",
            "/env/b",
            "/home/u/.lingodict",
            "/etc/lingodict",
            "/usr/share/lingodict",
        ]
        .iter()
        .map(PathBuf::from)
        .collect();
        assert_eq!(locations, expected);
    }

    #[test]
    fn empty_explicit_path_is_ignored() {
        let locations = search_locations(Some(Path::new("")), &ResolverConfig::default(), &fixed());
        assert_eq!(locations.first(), Some(&PathBuf::from("/home/u/.lingodict")));
    }

    #[test]
    fn isolated_config_only_searches_explicit_path() {
        let config = ResolverConfig::isolated().with_search_path("/env/a");
        let locations = search_locations(Some(Path::new("/explicit")), &config, &fixed());
        assert_eq!(locations, vec![PathBuf::from("/explicit")]);
    }

    #[test]
    fn split_keeps_order_and_duplicates() {
        let raw = format!("/b{d}/a{d}{d}/b", d = PATH_DELIMITER);
        assert_eq!(
            split_search_path(&raw),
            vec![PathBuf::from("/b"), PathBuf::from("/a"), PathBuf::from("/b")]
        );
        assert!(split_search_path("").is_empty());
    }
}
