//! Re-export collection from a package entry-point file.

use ruff_python_ast::{
    ModModule, Stmt,
    visitor::{Visitor, walk_stmt},
};

use crate::types::AliasRecord;

/// Visitor that collects `from X import Y [as Z]` statements from an
/// `__init__.py`, recording the locally bound name together with the module
/// and name where the definition lives.
///
/// Relative and absolute forms both count; ruff already separates the
/// leading dots (the import level) from the module path, so
/// `from .timeparse import timeparse as parse` records defining module
/// `timeparse`. Star imports and `from . import x` forms carry no module
/// path to resolve and are skipped.
#[derive(Debug, Default)]
pub struct AliasCollector {
    aliases: Vec<AliasRecord>,
}

impl AliasCollector {
    /// Collect re-export records from a parsed entry-point module, in
    /// traversal order.
    pub fn collect(module: &ModModule) -> Vec<AliasRecord> {
        let mut collector = Self::default();
        collector.visit_body(&module.body);
        collector.aliases
    }
}

impl<'a> Visitor<'a> for AliasCollector {
    fn visit_stmt(&mut self, stmt: &'a Stmt) {
        if let Stmt::ImportFrom(import_from) = stmt
            && let Some(module) = &import_from.module
        {
            for alias in &import_from.names {
                if alias.name.as_str() == "*" {
                    continue;
                }
                let public_name = alias
                    .asname
                    .as_ref()
                    .map_or_else(|| alias.name.to_string(), ToString::to_string);
                self.aliases.push(AliasRecord {
                    public_name,
                    defining_module: module.to_string(),
                    defining_name: alias.name.to_string(),
                });
            }
        }

        walk_stmt(self, stmt);
    }
}
