//! Core data types shared across extraction and definition location.

use std::path::PathBuf;

use indexmap::IndexMap;

/// Final analysis result: package name -> (symbol name -> annotated snippet text).
///
/// Packages for which no tree could be fetched, and packages that yielded no
/// resolved symbols, are absent from the map rather than present with an
/// empty entry.
pub type AnalysisResult = IndexMap<String, IndexMap<String, String>>;

/// One observed call site naming an externally imported symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// The imported package name the call is attributed to.
    pub module: String,
    /// The called name (locally bound name for direct calls, attribute name
    /// for `module.attr(...)` calls).
    pub symbol: String,
    /// Full dotted path recorded for the binding, e.g. `pytimeparse.parse`.
    pub qualified_name: String,
}

/// A re-export discovered in a package entry-point file, mapping a public
/// name to the module and name where the definition actually lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRecord {
    /// The locally bound (public-facing) name.
    pub public_name: String,
    /// Dotted module path the name is imported from, leading dots stripped.
    pub defining_module: String,
    /// The original name inside the defining module.
    pub defining_name: String,
}

/// Extracted source text for one resolved symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    /// Verbatim source text of the definition (or heuristic context window).
    pub source_text: String,
    /// Path of the file the text came from, relative to the package root.
    pub origin_file: PathBuf,
    /// Whether the definition was reached through an entry-point re-export.
    pub via_alias: bool,
}

impl Snippet {
    /// Render the snippet with its provenance header, the format consumed by
    /// downstream code generation.
    pub fn annotated(&self, public_name: &str) -> String {
        let origin = self.origin_file.display();
        if self.via_alias {
            format!(
                "# Found in {origin}\n# (imported as {public_name} in __init__.py)\n{}",
                self.source_text
            )
        } else {
            format!("# Found in {origin}\n{}", self.source_text)
        }
    }
}
