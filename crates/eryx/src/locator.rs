//! Definition location inside a materialized package source tree.
//!
//! Given a package root and a `(module, symbol)` pair, the locator finds the
//! best-available snippet of the symbol's defining source. Resolution runs
//! in priority order: entry-point alias chasing, exact syntactic match, then
//! a textual fallback for definitions an exact match cannot capture
//! (decorated factories, C-extension stubs, metaprogrammed attributes).
//! Failures on individual files degrade to "no match in this file".

use std::{
    fs,
    path::{Path, PathBuf},
};

use cow_utils::CowUtils;
use log::debug;
use ruff_python_parser::parse_module;
use walkdir::WalkDir;

use crate::{
    types::Snippet,
    visitors::{AliasCollector, DefinitionFinder},
};

/// Lines of context kept on each side of a heuristic match.
const CONTEXT_LINES: usize = 10;

/// Locate the definition of `symbol` from `module` under `package_root`.
///
/// Returns `None` when neither exact nor heuristic search produces anything;
/// that is an expected outcome, not an error. Identical arguments against an
/// unmodified tree yield byte-identical snippets.
pub fn locate_definition(package_root: &Path, module: &str, symbol: &str) -> Option<Snippet> {
    let module_dir = resolve_module_dir(package_root, module);

    // An entry-point re-export names the defining module directly, so it
    // takes priority over walking the tree.
    if let Some(dir) = &module_dir
        && let Some(snippet) = resolve_via_entry_point(package_root, dir, symbol)
    {
        return Some(snippet);
    }

    let search_root = module_dir.as_deref().unwrap_or(package_root);
    debug!(
        "searching for {symbol} under {}",
        search_root.display()
    );

    if let Some(snippet) = exact_search(package_root, search_root, symbol) {
        return Some(snippet);
    }
    heuristic_search(package_root, search_root, symbol)
}

/// Candidate directory for a dotted module path: `root/src/<module>` when a
/// `src` layout is present, else `root/<module>`. `None` means the search
/// degrades to scanning the whole package root.
fn resolve_module_dir(package_root: &Path, module: &str) -> Option<PathBuf> {
    let relative = module.cow_replace(".", "/");

    let src_candidate = package_root.join("src").join(relative.as_ref());
    if src_candidate.is_dir() {
        return Some(src_candidate);
    }

    let flat_candidate = package_root.join(relative.as_ref());
    flat_candidate.is_dir().then_some(flat_candidate)
}

/// Chase one level of re-export through the module's `__init__.py`: a
/// `from X import Y [as Z]` whose bound name equals `symbol` points the
/// direct definition search at `X`'s file for `Y` instead.
fn resolve_via_entry_point(package_root: &Path, module_dir: &Path, symbol: &str) -> Option<Snippet> {
    let init_file = module_dir.join("__init__.py");
    let source = match fs::read_to_string(&init_file) {
        Ok(source) => source,
        Err(err) => {
            debug!("no readable entry point at {}: {err}", init_file.display());
            return None;
        }
    };
    let Ok(parsed) = parse_module(&source) else {
        debug!("failed to parse entry point {}", init_file.display());
        return None;
    };
    let entry_point = parsed.into_syntax();

    for alias in AliasCollector::collect(&entry_point) {
        if alias.public_name != symbol {
            continue;
        }
        let defining_file = module_dir
            .join(alias.defining_module.cow_replace(".", "/").as_ref())
            .with_extension("py");
        debug!(
            "entry point aliases {symbol} -> {}.{}",
            alias.defining_module, alias.defining_name
        );
        if let Some(source_text) = exact_match_in_file(&defining_file, &alias.defining_name) {
            return Some(Snippet {
                source_text,
                origin_file: relative_to(package_root, &defining_file),
                via_alias: true,
            });
        }
    }
    None
}

/// Walk every Python file under `search_root` and return the first exact
/// syntactic match for `symbol`.
fn exact_search(package_root: &Path, search_root: &Path, symbol: &str) -> Option<Snippet> {
    for path in python_files(search_root) {
        if let Some(source_text) = exact_match_in_file(&path, symbol) {
            return Some(Snippet {
                source_text,
                origin_file: relative_to(package_root, &path),
                via_alias: false,
            });
        }
    }
    None
}

/// Exact-match extraction for one file: the verbatim source span of the
/// first function definition or assignment binding `symbol`, nested body
/// included. Read and parse failures are a non-match.
fn exact_match_in_file(path: &Path, symbol: &str) -> Option<String> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            debug!("skipping unreadable {}: {err}", path.display());
            return None;
        }
    };
    let Ok(parsed) = parse_module(&source) else {
        debug!("skipping unparsable {}", path.display());
        return None;
    };
    let range = DefinitionFinder::find(&parsed.into_syntax(), symbol)?;
    Some(source[range].to_string())
}

/// Last-resort textual search: the first line containing `def <symbol>`,
/// `<symbol> = `, or `class <symbol>` wins, returned with up to
/// [`CONTEXT_LINES`] lines of context on each side. Trades precision for
/// recall on definitions exact matching cannot see.
fn heuristic_search(package_root: &Path, search_root: &Path, symbol: &str) -> Option<Snippet> {
    let patterns = [
        format!("def {symbol}"),
        format!("{symbol} = "),
        format!("class {symbol}"),
    ];

    for path in python_files(search_root) {
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                debug!("skipping unreadable {}: {err}", path.display());
                continue;
            }
        };
        if let Some(source_text) = pattern_window(&content, &patterns) {
            return Some(Snippet {
                source_text,
                origin_file: relative_to(package_root, &path),
                via_alias: false,
            });
        }
    }
    None
}

/// Context window around the first line matching any pattern, clipped to
/// file bounds.
fn pattern_window(content: &str, patterns: &[String]) -> Option<String> {
    let lines: Vec<&str> = content.lines().collect();
    for (index, line) in lines.iter().enumerate() {
        if patterns.iter().any(|pattern| line.contains(pattern.as_str())) {
            let start = index.saturating_sub(CONTEXT_LINES);
            let end = (index + CONTEXT_LINES + 1).min(lines.len());
            return Some(lines[start..end].join("\n"));
        }
    }
    None
}

/// All `.py` files under `root` in deterministic sorted walk order.
/// Traversal errors (dangling links, permission problems) are skipped.
fn python_files(root: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| {
            entry.file_type().is_file()
                && entry.path().extension().is_some_and(|ext| ext == "py")
        })
        .map(|entry| entry.into_path())
}

fn relative_to(package_root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(package_root).unwrap_or(path).to_path_buf()
}
