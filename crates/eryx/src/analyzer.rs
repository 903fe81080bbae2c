//! Analysis orchestration: reference extraction, fetch delegation, and
//! definition resolution assembled into one result.

use std::path::Path;

use anyhow::Result;
use indexmap::IndexMap;
use log::{debug, warn};
use rustc_hash::FxHashSet;

use crate::{
    config::Config,
    extractor,
    fetch::PackageFetcher,
    locator,
    types::AnalysisResult,
};

/// Analyzes Python files to find and extract relevant code from their
/// dependencies.
#[derive(Debug)]
pub struct DependencyAnalyzer {
    config: Config,
}

impl DependencyAnalyzer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Analyze one Python file: for each externally imported package with a
    /// fetchable source tree, resolve every referenced symbol to an
    /// annotated snippet.
    ///
    /// Only two conditions abort the analysis: the file itself cannot be
    /// read or parsed, or the fetcher returns an error. Unfetchable packages
    /// and unresolved symbols are silently omitted, and a package with zero
    /// resolved symbols gets no entry at all.
    pub fn analyze_file(
        &self,
        path: &Path,
        fetcher: &impl PackageFetcher,
    ) -> Result<AnalysisResult> {
        let (_, module) = extractor::parse_python_file(path)?;
        let ignore = self.config.ignore_set();
        let imports = extractor::extract_imports_from_module(&module, &ignore);
        let references = extractor::find_references_in_module(&module);

        let mut results = AnalysisResult::new();
        // Resolution for a given (module, symbol) pair happens at most once.
        let mut resolved: FxHashSet<(String, String)> = FxHashSet::default();

        for package in &imports {
            debug!("analyzing package {package}");

            let Some(package_root) = fetcher.fetch(package)? else {
                debug!("no source tree for {package}, skipping");
                continue;
            };

            let mut snippets: IndexMap<String, String> = IndexMap::new();
            for reference in references.iter().filter(|r| &r.module == package) {
                if !resolved.insert((reference.module.clone(), reference.symbol.clone())) {
                    continue;
                }
                match locator::locate_definition(&package_root, &reference.module, &reference.symbol)
                {
                    Some(snippet) => {
                        snippets.insert(
                            reference.symbol.clone(),
                            snippet.annotated(&reference.symbol),
                        );
                    }
                    None => debug!("no definition found for {}", reference.qualified_name),
                }
            }

            if snippets.is_empty() {
                warn!("no snippets found for {package}");
            } else {
                results.insert(package.clone(), snippets);
            }
        }

        Ok(results)
    }
}

/// Convenience entry point using default configuration.
pub fn analyze(path: &Path, fetcher: &impl PackageFetcher) -> Result<AnalysisResult> {
    DependencyAnalyzer::new(Config::default()).analyze_file(path, fetcher)
}

#[cfg(test)]
mod tests {
    use std::{
        fs,
        path::PathBuf,
    };

    use tempfile::TempDir;

    use super::*;

    fn write(root: &Path, relative: &str, content: &str) -> PathBuf {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_unfetchable_package_omitted_entirely() {
        let dir = TempDir::new().unwrap();
        let source = write(
            dir.path(),
            "app.py",
            "import ghostpkg\nghostpkg.run()\n",
        );

        let fetcher = |_: &str| -> Result<Option<PathBuf>> { Ok(None) };
        let results = analyze(&source, &fetcher).unwrap();
        assert!(results.is_empty());
        assert!(!results.contains_key("ghostpkg"));
    }

    #[test]
    fn test_package_with_no_resolved_symbols_omitted() {
        let dir = TempDir::new().unwrap();
        let source = write(dir.path(), "app.py", "import mypkg\nmypkg.vanish()\n");
        let tree = dir.path().join("trees/mypkg-1.0");
        write(&tree, "mypkg/core.py", "def unrelated():\n    pass\n");

        let fetcher = move |_: &str| -> Result<Option<PathBuf>> { Ok(Some(tree.clone())) };
        let results = analyze(&source, &fetcher).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_fetcher_error_propagates() {
        let dir = TempDir::new().unwrap();
        let source = write(dir.path(), "app.py", "import mypkg\nmypkg.run()\n");

        let fetcher =
            |_: &str| -> Result<Option<PathBuf>> { Err(anyhow::anyhow!("registry unreachable")) };
        assert!(analyze(&source, &fetcher).is_err());
    }

    #[test]
    fn test_repeated_references_resolved_once() {
        let dir = TempDir::new().unwrap();
        let source = write(
            dir.path(),
            "app.py",
            "import mypkg\nmypkg.run()\nmypkg.run()\nmypkg.run()\n",
        );
        let tree = dir.path().join("trees/mypkg-1.0");
        write(&tree, "mypkg/core.py", "def run():\n    return 1\n");

        let fetcher = move |_: &str| -> Result<Option<PathBuf>> { Ok(Some(tree.clone())) };
        let results = analyze(&source, &fetcher).unwrap();
        assert_eq!(results["mypkg"].len(), 1);
        assert!(results["mypkg"]["run"].contains("def run"));
    }
}
