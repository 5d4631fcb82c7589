//! Loader for the versioned `mor-<variant>` directory layout.
//!
//! Every supported format version shares one layout:
//!
//! ```text
//! <location>/<version>/mor-<variant>/index.txt
//! ```
//!
//! and differs only in the version directory and the backends assumed when
//! `index.txt` does not name them.

use super::FormatLoader;
use super::index::{INDEX_FILE_NAME, IndexFile};
use crate::catalog::{Backends, Catalog, Dictionary, DictionaryLocation, VariantKey};
use crate::tag::LanguageTag;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

const VARIANT_DIR_PREFIX: &str = "mor-";
/// Variant directory name that marks the preferred dictionary of a language.
pub const DEFAULT_VARIANT: &str = "default";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatVersion {
    V3,
    V4,
    V5,
}

impl FormatVersion {
    pub fn number(self) -> u32 {
        match self {
            FormatVersion::V3 => 3,
            FormatVersion::V4 => 4,
            FormatVersion::V5 => 5,
        }
    }

    pub fn directory_name(self) -> &'static str {
        match self {
            FormatVersion::V3 => "3",
            FormatVersion::V4 => "4",
            FormatVersion::V5 => "5",
        }
    }

    fn default_backends(self) -> Backends {
        let (transducer, grammar) = match self {
            FormatVersion::V5 => ("finite-state", "none"),
            FormatVersion::V4 => ("weighted-transducer", "constraint-grammar"),
            FormatVersion::V3 => ("weighted-transducer", "none"),
        };
        Backends {
            morphology: transducer.to_string(),
            speller: transducer.to_string(),
            suggestion: transducer.to_string(),
            hyphenator: "analyzer".to_string(),
            grammar: grammar.to_string(),
        }
    }
}

impl TryFrom<u32> for FormatVersion {
    type Error = anyhow::Error;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            3 => Ok(FormatVersion::V3),
            4 => Ok(FormatVersion::V4),
            5 => Ok(FormatVersion::V5),
            other => anyhow::bail!("unsupported dictionary format version: {other}"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct VersionedLoader {
    version: FormatVersion,
}

impl VersionedLoader {
    pub fn new(version: FormatVersion) -> Self {
        Self { version }
    }

    /// `mor-*` directories under `<location>/<version>`, sorted by name.
    fn variant_dirs(&self, location: &Path) -> Vec<(String, PathBuf)> {
        let root = location.join(self.version.directory_name());
        let entries = match fs::read_dir(&root) {
            Ok(entries) => entries,
            Err(err) => {
                trace!(path = %root.display(), %err, "format directory not readable");
                return Vec::new();
            }
        };

        let mut dirs: Vec<(String, PathBuf)> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| {
                let name = entry.file_name().into_string().ok()?;
                let variant = name.strip_prefix(VARIANT_DIR_PREFIX)?;
                if variant.is_empty() {
                    return None;
                }
                Some((variant.to_string(), entry.path()))
            })
            .collect();
        dirs.sort();
        dirs
    }

    fn dictionary_from_dir(&self, variant: &str, dir: &Path) -> Result<Dictionary> {
        let index = IndexFile::load(&dir.join(INDEX_FILE_NAME))
            .with_context(|| format!("loading dictionary variant '{variant}'"))?;

        let mut language = LanguageTag::parse(&index.language_code);
        language.set_private_use(variant);

        let defaults = self.version.default_backends();
        let backends = Backends {
            morphology: index.morphology_backend.unwrap_or(defaults.morphology),
            speller: index.speller_backend.unwrap_or(defaults.speller),
            suggestion: index.suggestion_backend.unwrap_or(defaults.suggestion),
            hyphenator: index.hyphenator_backend.unwrap_or(defaults.hyphenator),
            grammar: index.grammar_backend.unwrap_or(defaults.grammar),
        };
        let description = index.description.unwrap_or_else(|| language.to_string());

        Ok(Dictionary::new(
            language,
            description,
            DictionaryLocation {
                path: dir.to_path_buf(),
                format_version: self.version.number(),
                backends,
            },
        ))
    }
}

impl FormatLoader for VersionedLoader {
    fn format_version(&self) -> u32 {
        self.version.number()
    }

    fn collect_variants(&self, location: &Path, catalog: &mut Catalog) {
        for (variant, dir) in self.variant_dirs(location) {
            let mut dict = match self.dictionary_from_dir(&variant, &dir) {
                Ok(dict) => dict,
                Err(err) => {
                    debug!(path = %dir.display(), "skipping dictionary: {err:#}");
                    continue;
                }
            };
            if dict.language().language().is_empty() {
                debug!(path = %dir.display(), "skipping dictionary with empty language");
                continue;
            }

            let key = VariantKey::for_tag(dict.language());
            if catalog.contains_key(&key) {
                trace!(%key, path = %dir.display(), "variant already provided by a higher-priority location");
                continue;
            }
            if dict.language().private_use() == DEFAULT_VARIANT
                && !catalog.has_default_for_language(dict.language().language())
            {
                dict.set_default(true);
            }
            trace!(%key, path = %dir.display(), "found dictionary");
            catalog.insert_if_absent(key, dict);
        }
    }
}
