//! Configuration loading for eryx.
//!
//! Configuration comes from an `eryx.toml` file (explicit path, or the
//! current directory), falling back to defaults when none exists.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::stdlib::IgnoreSet;

/// Python 3 minor version used for stdlib classification when unconfigured.
pub const DEFAULT_PYTHON_VERSION: u8 = 10;

const CONFIG_FILE_NAME: &str = "eryx.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root directory containing materialized package source trees.
    /// When unset, a platform cache directory is used.
    pub packages_dir: Option<PathBuf>,

    /// Module names treated as non-external in addition to the standard
    /// library, e.g. packages the caller never wants analyzed.
    pub ignore: Vec<String>,

    /// Python 3 minor version for stdlib classification (e.g. 10 for 3.10).
    pub python_version: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            packages_dir: None,
            ignore: Vec::new(),
            python_version: DEFAULT_PYTHON_VERSION,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Load from an explicit path when given, else from `./eryx.toml` when
    /// present, else defaults. An unreadable or invalid file is an error in
    /// both cases; only absence falls back.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let local = Path::new(CONFIG_FILE_NAME);
        if local.is_file() {
            return Self::load(local);
        }
        Ok(Self::default())
    }

    /// The ignore policy derived from this configuration.
    pub fn ignore_set(&self) -> IgnoreSet {
        IgnoreSet::new(self.python_version, self.ignore.iter().cloned())
    }
}
