//! Dictionary catalog wiring.
//!
//! A catalog is the merged result of running every active format loader over
//! every search location. Keys are unique and the first location to offer a
//! key keeps it, so location order is priority order. `rank` turns a catalog
//! into the list the resolver walks.

pub mod model;
pub mod rank;

pub use model::{
    Backends, Catalog, Dictionary, DictionaryLocation, STANDARD_KEY_SUFFIX, VariantKey,
};
pub use rank::rank;

use crate::loader::FormatLoader;
use std::path::PathBuf;
use tracing::debug;

/// Scan `locations` in order with each loader in order, merging into one
/// catalog.
pub fn build_catalog(locations: &[PathBuf], loaders: &[Box<dyn FormatLoader>]) -> Catalog {
    let mut catalog = Catalog::new();
    for location in locations {
        for loader in loaders {
            loader.collect_variants(location, &mut catalog);
        }
    }
    debug!(
        locations = locations.len(),
        loaders = loaders.len(),
        entries = catalog.len(),
        "built dictionary catalog"
    );
    catalog
}
