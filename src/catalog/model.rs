use crate::tag::LanguageTag;
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;
use std::path::PathBuf;

/// Key suffix that marks the "standard" variant of a language.
pub const STANDARD_KEY_SUFFIX: &str = "-x-standard";

/// Unique catalog key for one dictionary variant.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct VariantKey(pub String);

impl VariantKey {
    /// Key a dictionary by its full tag, independent of on-disk format.
    pub fn for_tag(tag: &LanguageTag) -> Self {
        Self(tag.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_standard(&self) -> bool {
        self.0.ends_with(STANDARD_KEY_SUFFIX)
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Backend names a loader recorded for a dictionary. Opaque to resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Backends {
    pub morphology: String,
    pub speller: String,
    pub suggestion: String,
    pub hyphenator: String,
    pub grammar: String,
}

/// Where and in which format a dictionary was found.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DictionaryLocation {
    pub path: PathBuf,
    pub format_version: u32,
    pub backends: Backends,
}

/// One discovered dictionary variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Dictionary {
    language: LanguageTag,
    is_default: bool,
    description: String,
    location: DictionaryLocation,
}

impl Dictionary {
    pub fn new(
        language: LanguageTag,
        description: impl Into<String>,
        location: DictionaryLocation,
    ) -> Self {
        Self {
            language,
            is_default: false,
            description: description.into(),
            location,
        }
    }

    pub fn language(&self) -> &LanguageTag {
        &self.language
    }

    /// Preferred dictionary for its language when no variant is requested.
    pub fn is_default(&self) -> bool {
        self.is_default
    }

    pub fn set_default(&mut self, is_default: bool) {
        self.is_default = is_default;
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> &DictionaryLocation {
        &self.location
    }
}

/// All variants discovered in one scan, keyed by [`VariantKey`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<VariantKey, Dictionary>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unless the key is already taken; the first writer wins.
    ///
    /// Dictionaries without a language are refused. Returns whether the entry
    /// was stored.
    pub fn insert_if_absent(&mut self, key: VariantKey, dictionary: Dictionary) -> bool {
        if dictionary.language().language().is_empty() {
            return false;
        }
        match self.entries.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(dictionary);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn get(&self, key: &VariantKey) -> Option<&Dictionary> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &VariantKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Whether any entry for `language` is flagged default.
    pub fn has_default_for_language(&self, language: &str) -> bool {
        self.entries
            .values()
            .any(|dict| dict.is_default() && dict.language().language() == language)
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&VariantKey, &Dictionary)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Catalog {
    type Item = (VariantKey, Dictionary);
    type IntoIter = std::collections::btree_map::IntoIter<VariantKey, Dictionary>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
