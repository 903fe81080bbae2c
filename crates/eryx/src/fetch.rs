//! Package tree acquisition boundary.
//!
//! The analysis core never downloads anything; it asks a fetch collaborator
//! for "a local directory containing a package's source tree, or nothing".
//! Registry lookup, archive extraction, and cache population live behind
//! this trait, outside the crate.

use std::{ffi::OsStr, fs, path::PathBuf};

use anyhow::Result;
use log::debug;

/// Collaborator producing materialized package source trees.
pub trait PackageFetcher {
    /// The root of a local source tree for `package`, or `None` when the
    /// package cannot be materialized. An `Err` aborts the whole analysis.
    fn fetch(&self, package: &str) -> Result<Option<PathBuf>>;
}

impl<F> PackageFetcher for F
where
    F: Fn(&str) -> Result<Option<PathBuf>>,
{
    fn fetch(&self, package: &str) -> Result<Option<PathBuf>> {
        self(package)
    }
}

/// Fetcher over an already-populated local cache directory.
///
/// The cache layout is the one the download layer produces: one
/// `<name>-<version>/` directory per extracted source distribution (or a
/// bare `<name>/` directory). An exact-name directory wins; otherwise the
/// lexicographically greatest versioned match is used as a deterministic
/// "latest".
#[derive(Debug, Clone)]
pub struct DirectoryFetcher {
    packages_dir: PathBuf,
}

impl DirectoryFetcher {
    pub fn new(packages_dir: impl Into<PathBuf>) -> Self {
        Self {
            packages_dir: packages_dir.into(),
        }
    }
}

impl PackageFetcher for DirectoryFetcher {
    fn fetch(&self, package: &str) -> Result<Option<PathBuf>> {
        let exact = self.packages_dir.join(package);
        if exact.is_dir() {
            return Ok(Some(exact));
        }

        let Ok(entries) = fs::read_dir(&self.packages_dir) else {
            debug!(
                "package cache {} is not readable",
                self.packages_dir.display()
            );
            return Ok(None);
        };

        let prefix = format!("{package}-");
        let mut best: Option<PathBuf> = None;
        let mut best_name = String::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let Some(name) = path.file_name().and_then(OsStr::to_str) else {
                continue;
            };
            if name.starts_with(&prefix) && name > best_name.as_str() {
                best_name = name.to_string();
                best = Some(path);
            }
        }

        if best.is_none() {
            debug!("no cached tree for {package}");
        }
        Ok(best)
    }
}
