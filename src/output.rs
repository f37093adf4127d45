//! Output directory writes.
//!
//! Every generated file lives under one output root. Writes overwrite in
//! place; [`OutputDir::prune_stale`] removes shop directories left behind by
//! shops that disappeared from the data, and [`OutputDir::clean`] wipes the
//! root entirely when a fresh start is requested.

use crate::{log, render::SHOPS_DIR};
use anyhow::{Context, Result};
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

/// Writer rooted at the site output directory.
#[derive(Debug, Clone)]
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Remove the whole output directory if it exists.
    pub fn clean(&self) -> Result<()> {
        if self.root.exists() {
            fs::remove_dir_all(&self.root).with_context(|| {
                format!("Failed to clear output directory: {}", self.root.display())
            })?;
            log!("clean"; "removed {}", self.root.display());
        }
        Ok(())
    }

    /// Write `contents` to `rel_path`, creating parents and overwriting.
    pub fn write(&self, rel_path: &Path, contents: &str) -> Result<PathBuf> {
        let path = self.root.join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Delete directories under `shops/` that are not in `keep`.
    ///
    /// Returns the names removed. Plain files under `shops/` are left alone.
    pub fn prune_stale<'a>(&self, keep: impl IntoIterator<Item = &'a str>) -> Result<Vec<String>> {
        let shops_dir = self.root.join(SHOPS_DIR);
        if !shops_dir.is_dir() {
            return Ok(Vec::new());
        }

        let keep: HashSet<&str> = keep.into_iter().collect();
        let entries = fs::read_dir(&shops_dir)
            .with_context(|| format!("Failed to read {}", shops_dir.display()))?;

        let mut removed = Vec::new();
        for entry in entries {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if !entry.file_type()?.is_dir() || keep.contains(name.as_str()) {
                continue;
            }
            fs::remove_dir_all(entry.path())
                .with_context(|| format!("Failed to remove {}", entry.path().display()))?;
            log!("prune"; "{}/{}", SHOPS_DIR, name);
            removed.push(name);
        }

        removed.sort();
        Ok(removed)
    }
}
