//! Priority order for catalog entries.
//!
//! Defaults go first, then standard variants of languages that have no
//! default, then everything else in key order. Both front groups are built by
//! prepending while walking keys in ascending order, so within them later keys
//! end up ahead of earlier ones.

use super::{Catalog, Dictionary};
use std::collections::VecDeque;

pub fn rank(catalog: Catalog) -> Vec<Dictionary> {
    let mut ranked = VecDeque::with_capacity(catalog.len());
    let standard_without_default: Vec<bool> = catalog
        .iter()
        .map(|(key, dict)| {
            key.is_standard() && !catalog.has_default_for_language(dict.language().language())
        })
        .collect();

    for ((_, dict), promote_standard) in catalog.into_iter().zip(standard_without_default) {
        if dict.is_default() || promote_standard {
            ranked.push_front(dict);
        } else {
            ranked.push_back(dict);
        }
    }
    ranked.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Backends, DictionaryLocation, VariantKey};
    use crate::tag::LanguageTag;
    use std::path::PathBuf;

    fn entry(catalog: &mut Catalog, tag: &str, is_default: bool) {
        let language = LanguageTag::parse(tag);
        let mut dict = Dictionary::new(
            language.clone(),
            tag,
            DictionaryLocation {
                path: PathBuf::from(format!("/dicts/5/mor-{tag}")),
                format_version: 5,
                backends: Backends::default(),
            },
        );
        dict.set_default(is_default);
        assert!(catalog.insert_if_absent(VariantKey::for_tag(&language), dict));
    }

    fn order(ranked: &[Dictionary]) -> Vec<String> {
        ranked.iter().map(|d| d.language().to_string()).collect()
    }

    #[test]
    fn defaults_are_prepended_in_reverse_key_order() {
        let mut catalog = Catalog::new();
        entry(&mut catalog, "fi-x-a", true);
        entry(&mut catalog, "fi-x-b", true);
        entry(&mut catalog, "fi-x-standard", false);

        assert_eq!(
            order(&rank(catalog)),
            vec!["fi-x-b", "fi-x-a", "fi-x-standard"]
        );
    }

    #[test]
    fn standard_is_promoted_only_without_default() {
        let mut catalog = Catalog::new();
        entry(&mut catalog, "fi-x-old", false);
        entry(&mut catalog, "fi-x-standard", false);
        entry(&mut catalog, "sv-x-default", true);
        entry(&mut catalog, "sv-x-medical", false);
        entry(&mut catalog, "sv-x-standard", false);

        assert_eq!(
            order(&rank(catalog)),
            vec![
                "sv-x-default",
                "fi-x-standard",
                "fi-x-old",
                "sv-x-medical",
                "sv-x-standard",
            ]
        );
    }

    #[test]
    fn plain_entries_keep_ascending_key_order() {
        let mut catalog = Catalog::new();
        entry(&mut catalog, "sv-x-b", false);
        entry(&mut catalog, "fi-x-z", false);
        entry(&mut catalog, "fi-x-a", false);

        assert_eq!(order(&rank(catalog)), vec!["fi-x-a", "fi-x-z", "sv-x-b"]);
    }

    #[test]
    fn empty_catalog_ranks_empty() {
        assert!(rank(Catalog::new()).is_empty());
    }
}
