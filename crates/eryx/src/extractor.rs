//! Reference extraction from a single Python source file: the set of
//! externally imported package names, and the call sites naming imported
//! symbols.

use std::{fs, path::Path};

use indexmap::IndexSet;
use ruff_python_ast::ModModule;
use ruff_python_parser::parse_module;

use crate::{
    error::ExtractError,
    stdlib::IgnoreSet,
    types::Reference,
    visitors::{CallCollector, ImportBindingCollector, ImportCollector},
};

/// Read and parse a Python file, returning the source text alongside the
/// syntax tree. This is the only place a file-level failure is fatal.
pub fn parse_python_file(path: &Path) -> Result<(String, ModModule), ExtractError> {
    let source = fs::read_to_string(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let module = parse_module(&source)
        .map_err(|source| ExtractError::Parse {
            path: path.to_path_buf(),
            source,
        })?
        .into_syntax();
    Ok((source, module))
}

/// Extract the set of externally imported top-level package names from a
/// file, minus everything the ignore policy classifies as non-external.
pub fn extract_imports(path: &Path, ignore: &IgnoreSet) -> Result<IndexSet<String>, ExtractError> {
    let (_, module) = parse_python_file(path)?;
    Ok(extract_imports_from_module(&module, ignore))
}

/// Pure form of [`extract_imports`] over an already parsed module.
pub fn extract_imports_from_module(module: &ModModule, ignore: &IgnoreSet) -> IndexSet<String> {
    ImportCollector::collect(module)
        .into_iter()
        .filter(|name| !ignore.contains(name))
        .collect()
}

/// Find every call site referencing an imported symbol in a file.
///
/// Duplicates across repeated call sites are preserved; the order is the
/// AST traversal order.
pub fn find_references(path: &Path) -> Result<Vec<Reference>, ExtractError> {
    let (_, module) = parse_python_file(path)?;
    Ok(find_references_in_module(&module))
}

/// Pure form of [`find_references`] over an already parsed module.
pub fn find_references_in_module(module: &ModModule) -> Vec<Reference> {
    let bindings = ImportBindingCollector::collect(module);
    CallCollector::collect(module, &bindings)
}
