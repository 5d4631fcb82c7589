//! Format loaders.
//!
//! Each on-disk format version has a loader that knows how to find its
//! dictionaries under one search location and offer them to the shared
//! catalog. Which versions are active is decided at build time through cargo
//! features; the active set is handed to the catalog builder rather than
//! consulted inline.

pub mod index;
pub mod versioned;

pub use index::IndexFile;
pub use versioned::{FormatVersion, VersionedLoader};

use crate::catalog::Catalog;
use std::path::Path;

/// Scans one location for dictionaries of a single on-disk format.
pub trait FormatLoader: Send + Sync {
    fn format_version(&self) -> u32;

    /// Offer every dictionary found under `location` to `catalog`.
    ///
    /// A missing or unreadable location leaves the catalog untouched; it is
    /// never an error.
    fn collect_variants(&self, location: &Path, catalog: &mut Catalog);
}

/// Loaders compiled into this build, newest format first.
pub fn active_loaders() -> Vec<Box<dyn FormatLoader>> {
    #[allow(unused_mut)]
    let mut loaders: Vec<Box<dyn FormatLoader>> = Vec::new();
    #[cfg(feature = "format-v5")]
    loaders.push(Box::new(VersionedLoader::new(FormatVersion::V5)));
    #[cfg(feature = "format-v4")]
    loaders.push(Box::new(VersionedLoader::new(FormatVersion::V4)));
    #[cfg(feature = "format-v3")]
    loaders.push(Box::new(VersionedLoader::new(FormatVersion::V3)));
    loaders
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_loaders_are_newest_first() {
        let versions: Vec<u32> = active_loaders()
            .iter()
            .map(|loader| loader.format_version())
            .collect();
        let mut sorted = versions.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(versions, sorted);
    }

    #[cfg(all(feature = "format-v5", feature = "format-v4", feature = "format-v3"))]
    #[test]
    fn default_build_enables_every_format() {
        let versions: Vec<u32> = active_loaders()
            .iter()
            .map(|loader| loader.format_version())
            .collect();
        assert_eq!(versions, vec![5, 4, 3]);
    }
}
