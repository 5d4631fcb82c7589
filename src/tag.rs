//! Locale tags and the matching predicate used to pick a dictionary.
//!
//! Tags carry only the three subtags dictionary selection cares about:
//! language, script and private use. Region and variant subtags are parsed
//! past and dropped. Matching is exact on language and script; only the
//! private-use subtag has fallback rules.

use serde::Serialize;
use std::fmt;

/// Private-use value that accepts a dictionary with no private use at all.
pub const STANDARD_PRIVATE_USE: &str = "standard";

const PRIVATE_USE_SEPARATOR: &str = "-x-";

#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LanguageTag {
    language: String,
    script: String,
    private_use: String,
}

impl LanguageTag {
    pub fn new(language: &str, script: &str, private_use: &str) -> Self {
        Self {
            language: language.to_ascii_lowercase(),
            script: title_case(script),
            private_use: normalize_private_use(private_use),
        }
    }

    /// Parse a BCP-47-like tag (`fi`, `fi-Latn`, `fi-x-custom`) or a POSIX
    /// locale name (`fi_FI.UTF-8`).
    ///
    /// Parsing never fails: an empty or garbled string yields a tag with an
    /// empty language, which matches nothing.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let (main, private_use) = match find_ignore_case(raw, PRIVATE_USE_SEPARATOR) {
            Some(idx) => (&raw[..idx], &raw[idx + PRIVATE_USE_SEPARATOR.len()..]),
            None => (raw, ""),
        };
        let main = main.split(['.', '@']).next().unwrap_or_default();

        let mut subtags = main.split(['-', '_']).filter(|s| !s.is_empty());
        let language = subtags.next().unwrap_or_default();
        let script = subtags
            .find(|s| s.len() == 4 && s.chars().all(|c| c.is_ascii_alphabetic()))
            .unwrap_or_default();
        Self::new(language, script, private_use)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn script(&self) -> &str {
        &self.script
    }

    pub fn private_use(&self) -> &str {
        &self.private_use
    }

    pub fn set_private_use(&mut self, private_use: &str) {
        self.private_use = normalize_private_use(private_use);
    }

    /// Whether this (requested) tag accepts the `available` tag.
    pub fn matches(&self, available: &LanguageTag) -> bool {
        matches(self, available)
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if !self.script.is_empty() {
            write!(f, "-{}", self.script)?;
        }
        if !self.private_use.is_empty() {
            write!(f, "{PRIVATE_USE_SEPARATOR}{}", self.private_use)?;
        }
        Ok(())
    }
}

/// Decide whether a dictionary tagged `available` satisfies `requested`.
///
/// Rules, first hit wins:
/// 1. languages differ: no match;
/// 2. scripts differ: no match (an empty script only matches an empty one);
/// 3. requested private use is `standard` and available has none: match;
/// 4. requested private use is set and differs from available's: no match;
/// 5. otherwise: match.
pub fn matches(requested: &LanguageTag, available: &LanguageTag) -> bool {
    if requested.language != available.language {
        return false;
    }
    // TODO: expand a missing script into the language's default script.
    if requested.script != available.script {
        return false;
    }
    if requested.private_use == STANDARD_PRIVATE_USE && available.private_use.is_empty() {
        return true;
    }
    if !requested.private_use.is_empty() && requested.private_use != available.private_use {
        return false;
    }
    true
}

/// Private-use subtags are stored lowercase and joined without separators.
fn normalize_private_use(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn title_case(script: &str) -> String {
    script
        .chars()
        .enumerate()
        .map(|(idx, c)| {
            if idx == 0 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack.to_ascii_lowercase().find(needle)
}
