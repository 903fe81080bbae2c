#![allow(clippy::disallowed_methods)]

use std::fs;

use eryx::{
    analyzer::DependencyAnalyzer,
    config::Config,
    fetch::DirectoryFetcher,
};
use tempfile::TempDir;

/// End-to-end scenario: a file calling `pytimeparse.parse(...)`, where the
/// cached package tree re-exports `parse` from its `timeparse` module.
#[test]
fn test_alias_resolved_through_package_entry_point() {
    let temp_dir = TempDir::new().unwrap();
    let packages_dir = temp_dir.path().join("package_sources");
    let tree = packages_dir.join("pytimeparse-1.1.8");

    fs::create_dir_all(tree.join("pytimeparse")).unwrap();
    fs::write(
        tree.join("pytimeparse/__init__.py"),
        "from .timeparse import timeparse as parse\n",
    )
    .unwrap();
    fs::write(
        tree.join("pytimeparse/timeparse.py"),
        "def timeparse(sval, granularity='seconds'):\n    return 42\n",
    )
    .unwrap();

    let source_file = temp_dir.path().join("app.py");
    fs::write(
        &source_file,
        "import pytimeparse\ndef f():\n    return pytimeparse.parse('1h 30m')\n",
    )
    .unwrap();

    let analyzer = DependencyAnalyzer::new(Config::default());
    let fetcher = DirectoryFetcher::new(&packages_dir);
    let results = analyzer.analyze_file(&source_file, &fetcher).unwrap();

    assert_eq!(results.len(), 1, "expected exactly one analyzed package");
    let snippets = &results["pytimeparse"];
    assert_eq!(snippets.len(), 1);

    let snippet = &snippets["parse"];
    assert!(
        snippet.contains("def timeparse(sval, granularity='seconds'):"),
        "snippet should contain the aliased definition, got:\n{snippet}"
    );
    assert!(
        snippet.contains("# Found in pytimeparse/timeparse.py"),
        "origin should point at the resolved file, not the entry point"
    );
    assert!(
        snippet.contains("# (imported as parse in __init__.py)"),
        "alias provenance note should be present"
    );
}

#[test]
fn test_from_import_direct_call() {
    let temp_dir = TempDir::new().unwrap();
    let packages_dir = temp_dir.path().join("package_sources");
    let tree = packages_dir.join("pytimeparse-1.1.8");

    fs::create_dir_all(tree.join("pytimeparse")).unwrap();
    fs::write(tree.join("pytimeparse/__init__.py"), "").unwrap();
    fs::write(
        tree.join("pytimeparse/timeparse.py"),
        "def parse(sval):\n    return sval\n",
    )
    .unwrap();

    let source_file = temp_dir.path().join("app.py");
    fs::write(
        &source_file,
        "from pytimeparse import parse\n\ndef parse_number():\n    return parse('1h 30m')\n",
    )
    .unwrap();

    let analyzer = DependencyAnalyzer::new(Config::default());
    let fetcher = DirectoryFetcher::new(&packages_dir);
    let results = analyzer.analyze_file(&source_file, &fetcher).unwrap();

    assert!(results.contains_key("pytimeparse"));
    assert!(results["pytimeparse"]["parse"].contains("def parse(sval):"));
}

#[test]
fn test_missing_package_absent_from_result() {
    let temp_dir = TempDir::new().unwrap();
    let packages_dir = temp_dir.path().join("package_sources");
    fs::create_dir_all(&packages_dir).unwrap();

    let source_file = temp_dir.path().join("app.py");
    fs::write(&source_file, "import ghostpkg\nghostpkg.run()\n").unwrap();

    let analyzer = DependencyAnalyzer::new(Config::default());
    let fetcher = DirectoryFetcher::new(&packages_dir);
    let results = analyzer.analyze_file(&source_file, &fetcher).unwrap();

    assert!(
        !results.contains_key("ghostpkg"),
        "unfetchable packages must be completely absent, not empty"
    );
    assert!(results.is_empty());
}

#[test]
fn test_stdlib_and_ignored_modules_produce_no_results() {
    let temp_dir = TempDir::new().unwrap();
    let packages_dir = temp_dir.path().join("package_sources");
    fs::create_dir_all(&packages_dir).unwrap();

    let source_file = temp_dir.path().join("app.py");
    fs::write(
        &source_file,
        r#"
import requests
import json

def fetch_data():
    response = requests.get('https://api.example.com/data')
    return json.loads(response.text)
"#,
    )
    .unwrap();

    let config = Config {
        ignore: vec!["requests".to_string()],
        ..Default::default()
    };
    let analyzer = DependencyAnalyzer::new(config);
    let fetcher = DirectoryFetcher::new(&packages_dir);
    let results = analyzer.analyze_file(&source_file, &fetcher).unwrap();

    assert!(results.is_empty(), "expected no results for ignored modules");
}

#[test]
fn test_parse_error_aborts_analysis() {
    let temp_dir = TempDir::new().unwrap();
    let packages_dir = temp_dir.path().join("package_sources");
    fs::create_dir_all(&packages_dir).unwrap();

    let source_file = temp_dir.path().join("broken.py");
    fs::write(&source_file, "def broken(:\n").unwrap();

    let analyzer = DependencyAnalyzer::new(Config::default());
    let fetcher = DirectoryFetcher::new(&packages_dir);
    let error = analyzer.analyze_file(&source_file, &fetcher).unwrap_err();

    assert!(
        error.to_string().contains("broken.py"),
        "parse failure should name the file, got: {error}"
    );
}

#[test]
fn test_src_layout_package() {
    let temp_dir = TempDir::new().unwrap();
    let packages_dir = temp_dir.path().join("package_sources");
    let tree = packages_dir.join("srcpkg-0.3.0");

    fs::create_dir_all(tree.join("src/srcpkg")).unwrap();
    fs::write(tree.join("src/srcpkg/__init__.py"), "").unwrap();
    fs::write(
        tree.join("src/srcpkg/engine.py"),
        "def ignite(fuel):\n    return fuel > 0\n",
    )
    .unwrap();

    let source_file = temp_dir.path().join("app.py");
    fs::write(&source_file, "import srcpkg\nsrcpkg.ignite(3)\n").unwrap();

    let analyzer = DependencyAnalyzer::new(Config::default());
    let fetcher = DirectoryFetcher::new(&packages_dir);
    let results = analyzer.analyze_file(&source_file, &fetcher).unwrap();

    let snippet = &results["srcpkg"]["ignite"];
    assert!(snippet.contains("# Found in src/srcpkg/engine.py"));
    assert!(snippet.contains("def ignite(fuel):"));
}
