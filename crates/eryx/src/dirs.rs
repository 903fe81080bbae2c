//! Platform directory resolution.

use std::path::PathBuf;

use anyhow::{Context, Result};
use etcetera::BaseStrategy;

/// Default root for materialized package source trees when no `packages_dir`
/// is configured: `<platform cache dir>/eryx/packages`.
pub fn default_packages_dir() -> Result<PathBuf> {
    let strategy =
        etcetera::choose_base_strategy().context("could not determine a cache directory")?;
    Ok(strategy.cache_dir().join("eryx").join("packages"))
}
