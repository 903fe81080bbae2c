//! Exact-match definition lookup inside a parsed module.

use ruff_python_ast::{
    Expr, ModModule, Stmt,
    visitor::{Visitor, walk_stmt},
};
use ruff_text_size::{Ranged, TextRange};

/// Visitor that finds the source range of the first statement defining a
/// symbol: a function definition (sync or async, methods included) or an
/// assignment whose target name matches.
///
/// The first match in traversal order wins, which keeps results
/// deterministic for identical input.
#[derive(Debug)]
pub struct DefinitionFinder<'a> {
    symbol: &'a str,
    found: Option<TextRange>,
}

impl<'a> DefinitionFinder<'a> {
    /// Return the source range of `symbol`'s defining statement, if any.
    pub fn find(module: &ModModule, symbol: &'a str) -> Option<TextRange> {
        let mut finder = Self {
            symbol,
            found: None,
        };
        finder.visit_body(&module.body);
        finder.found
    }
}

impl<'a, 'b> Visitor<'b> for DefinitionFinder<'a> {
    fn visit_stmt(&mut self, stmt: &'b Stmt) {
        if self.found.is_some() {
            return;
        }

        match stmt {
            // Covers async defs too: ruff represents them as FunctionDef
            // with the is_async flag.
            Stmt::FunctionDef(func) => {
                if func.name.as_str() == self.symbol {
                    self.found = Some(func.range());
                    return;
                }
            }
            Stmt::Assign(assign) => {
                for target in &assign.targets {
                    if let Expr::Name(name) = target
                        && name.id.as_str() == self.symbol
                    {
                        self.found = Some(assign.range());
                        return;
                    }
                }
            }
            _ => {}
        }

        walk_stmt(self, stmt);
    }
}
