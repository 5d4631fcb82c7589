//! `index.txt` descriptor parsing.
//!
//! The file is a list of `Key: value` lines. Blank lines and `#` comments are
//! skipped, unknown keys are ignored, and the last occurrence of a key wins.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

pub const INDEX_FILE_NAME: &str = "index.txt";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IndexFile {
    pub language_code: String,
    pub description: Option<String>,
    pub morphology_backend: Option<String>,
    pub speller_backend: Option<String>,
    pub suggestion_backend: Option<String>,
    pub hyphenator_backend: Option<String>,
    pub grammar_backend: Option<String>,
}

impl IndexFile {
    pub fn load(path: &Path) -> Result<Self> {
        let data =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::parse(&data).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn parse(input: &str) -> Result<Self> {
        let mut index = IndexFile::default();
        for (idx, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once(':') else {
                bail!("line {} is not a 'Key: value' pair", idx + 1);
            };
            let value = value.trim().to_string();
            match key.trim() {
                "Language-Code" => index.language_code = value,
                "Description" => index.description = Some(value),
                "Morphology-Backend" => index.morphology_backend = Some(value),
                "Speller-Backend" => index.speller_backend = Some(value),
                "Suggestion-Backend" => index.suggestion_backend = Some(value),
                "Hyphenator-Backend" => index.hyphenator_backend = Some(value),
                "Grammar-Backend" => index.grammar_backend = Some(value),
                _ => {}
            }
        }

        if index.language_code.is_empty() {
            bail!("missing Language-Code");
        }
        Ok(index)
    }
}
