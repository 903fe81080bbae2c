//! Import collection visitor that gathers the top-level package names a
//! module imports, at any nesting depth.

use indexmap::IndexSet;
use ruff_python_ast::{
    ModModule, Stmt,
    visitor::{Visitor, walk_stmt},
};

/// Visitor that collects the first path segment of every absolute import.
///
/// `import a.b.c` contributes `a`; `from x.y import z` contributes `x`.
/// Relative imports never name an external package and are skipped.
#[derive(Debug, Default)]
pub struct ImportCollector {
    imports: IndexSet<String>,
}

impl ImportCollector {
    /// Collect imported top-level names from a parsed module, in first-seen
    /// order.
    pub fn collect(module: &ModModule) -> IndexSet<String> {
        let mut collector = Self::default();
        collector.visit_body(&module.body);
        collector.imports
    }

    fn record(&mut self, dotted_name: &str) {
        if let Some(top_level) = dotted_name.split('.').next()
            && !top_level.is_empty()
        {
            self.imports.insert(top_level.to_string());
        }
    }
}

impl<'a> Visitor<'a> for ImportCollector {
    fn visit_stmt(&mut self, stmt: &'a Stmt) {
        match stmt {
            Stmt::Import(import_stmt) => {
                for alias in &import_stmt.names {
                    self.record(alias.name.as_str());
                }
            }
            Stmt::ImportFrom(import_from) => {
                if import_from.level == 0
                    && let Some(module) = &import_from.module
                {
                    self.record(module.as_str());
                }
            }
            _ => {}
        }

        walk_stmt(self, stmt);
    }
}
