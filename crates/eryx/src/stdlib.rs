//! Standard library detection and the ignore policy applied to imports.
//!
//! This module is the single source of truth for deciding whether an imported
//! name refers to something external that is worth analyzing.

use rustc_hash::FxHashSet;

use ruff_python_stdlib::sys;

/// Check if a module name represents a Python standard library module
///
/// This uses ruff's comprehensive stdlib database and handles both direct
/// matches and submodules (e.g., both "os" and "os.path" are recognized).
///
/// # Arguments
/// * `module_name` - The module name to check
/// * `python_version` - The Python 3 minor version (e.g., 10 for Python 3.10)
pub fn is_stdlib_module(module_name: &str, python_version: u8) -> bool {
    // Special case for __future__ which is always a stdlib module
    // but not included in ruff's is_known_standard_library
    if module_name == "__future__" {
        return true;
    }

    // Check direct match using ruff_python_stdlib
    if sys::is_known_standard_library(python_version, module_name) {
        return true;
    }

    // Check if it's a submodule of a stdlib module
    if let Some(top_level) = module_name.split('.').next() {
        sys::is_known_standard_library(python_version, top_level)
    } else {
        false
    }
}

/// The set of module names treated as non-external during import extraction:
/// the standard library for a given Python version plus explicitly ignored
/// names supplied by configuration.
///
/// Kept as an externally constructed value rather than a process-wide
/// constant so extraction stays a pure function of its inputs.
#[derive(Debug, Clone)]
pub struct IgnoreSet {
    python_version: u8,
    ignored: FxHashSet<String>,
}

impl IgnoreSet {
    /// Build an ignore set for `python_version` with extra ignored names.
    pub fn new(python_version: u8, ignored: impl IntoIterator<Item = String>) -> Self {
        Self {
            python_version,
            ignored: ignored.into_iter().collect(),
        }
    }

    /// Whether `module` (possibly dotted) should be excluded from analysis.
    /// Only the first path segment is considered.
    pub fn contains(&self, module: &str) -> bool {
        let top_level = module.split('.').next().unwrap_or(module);
        self.ignored.contains(top_level) || is_stdlib_module(top_level, self.python_version)
    }
}
