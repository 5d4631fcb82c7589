#![allow(dead_code)]

use anyhow::{Context, Result};
use lingodict::{
    DictionaryFinder, FixedLocations, FormatLoader, FormatVersion, ResolverConfig,
    VersionedLoader,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// A throwaway dictionary location; removed with the TempDir on drop.
pub struct DictTree {
    dir: TempDir,
}

impl DictTree {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new().context("failed to allocate dictionary dir")?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Install `<root>/<version>/mor-<variant>/index.txt`.
    pub fn install(&self, version: u32, variant: &str, language_code: &str) -> Result<PathBuf> {
        self.install_with_index(
            version,
            variant,
            &format!("Language-Code: {language_code}\nDescription: {language_code} {variant}\n"),
        )
    }

    pub fn install_with_index(&self, version: u32, variant: &str, index: &str) -> Result<PathBuf> {
        write_variant(self.path(), version, variant, index)
    }

    /// Like `install`, but rooted at `<root>/<subdir>`; returns that root.
    pub fn install_in(
        &self,
        subdir: impl AsRef<Path>,
        version: u32,
        variant: &str,
        language_code: &str,
    ) -> Result<PathBuf> {
        let root = self.path().join(subdir);
        write_variant(
            &root,
            version,
            variant,
            &format!("Language-Code: {language_code}\n"),
        )?;
        Ok(root)
    }
}

fn write_variant(root: &Path, version: u32, variant: &str, index: &str) -> Result<PathBuf> {
    let dir = root.join(version.to_string()).join(format!("mor-{variant}"));
    fs::create_dir_all(&dir).with_context(|| format!("failed to create {}", dir.display()))?;
    fs::write(dir.join("index.txt"), index)
        .with_context(|| format!("failed to write index in {}", dir.display()))?;
    Ok(dir)
}

pub fn all_loaders() -> Vec<Box<dyn FormatLoader>> {
    vec![
        Box::new(VersionedLoader::new(FormatVersion::V5)),
        Box::new(VersionedLoader::new(FormatVersion::V4)),
        Box::new(VersionedLoader::new(FormatVersion::V3)),
    ]
}

/// Finder whose only platform location is `user`, plus whatever `config`
/// adds.
pub fn finder_for(config: ResolverConfig, user: &[&Path]) -> DictionaryFinder {
    DictionaryFinder::new(
        config,
        all_loaders(),
        Box::new(FixedLocations {
            user: user.iter().map(|p| p.to_path_buf()).collect(),
            system: Vec::new(),
        }),
    )
}
