//! Call-site collection: maps locally bound import names to their qualified
//! paths, then records every call expression that resolves to one of them.

use ruff_python_ast::{
    Expr, ModModule, Stmt,
    visitor::{Visitor, walk_expr, walk_stmt},
};
use rustc_hash::FxHashMap;

use crate::types::Reference;

/// First traversal: build the map from locally bound name to the qualified
/// dotted path it originates from.
///
/// `import foo` binds `foo` -> `foo`; `import foo as f` binds `f` -> `foo`;
/// `from x import y as z` binds `z` -> `x.y`. Aliasing via `as` is thereby
/// preserved under the locally bound name.
#[derive(Debug, Default)]
pub struct ImportBindingCollector {
    bindings: FxHashMap<String, String>,
}

impl ImportBindingCollector {
    pub fn collect(module: &ModModule) -> FxHashMap<String, String> {
        let mut collector = Self::default();
        collector.visit_body(&module.body);
        collector.bindings
    }
}

impl<'a> Visitor<'a> for ImportBindingCollector {
    fn visit_stmt(&mut self, stmt: &'a Stmt) {
        match stmt {
            Stmt::Import(import_stmt) => {
                for alias in &import_stmt.names {
                    let qualified = alias.name.to_string();
                    let bound = alias
                        .asname
                        .as_ref()
                        .map_or_else(|| qualified.clone(), ToString::to_string);
                    self.bindings.insert(bound, qualified);
                }
            }
            Stmt::ImportFrom(import_from) => {
                if import_from.level == 0
                    && let Some(module) = &import_from.module
                {
                    for alias in &import_from.names {
                        let bound = alias
                            .asname
                            .as_ref()
                            .map_or_else(|| alias.name.to_string(), ToString::to_string);
                        self.bindings
                            .insert(bound, format!("{}.{}", module.as_str(), alias.name));
                    }
                }
            }
            _ => {}
        }

        walk_stmt(self, stmt);
    }
}

/// Second traversal: record every call expression whose callee is a bound
/// import, either directly (`parse(...)`) or one attribute deep
/// (`pytimeparse.parse(...)`). Deeper attribute chains are not supported and
/// are ignored, as are calls on names with no recorded binding.
#[derive(Debug)]
pub struct CallCollector<'a> {
    bindings: &'a FxHashMap<String, String>,
    references: Vec<Reference>,
}

impl<'a> CallCollector<'a> {
    pub fn collect(module: &ModModule, bindings: &'a FxHashMap<String, String>) -> Vec<Reference> {
        let mut collector = Self {
            bindings,
            references: Vec::new(),
        };
        collector.visit_body(&module.body);
        collector.references
    }

    fn record_call(&mut self, func: &Expr) {
        match func {
            // Direct call of a bound name, e.g. parse('1h')
            Expr::Name(name) => {
                if let Some(qualified) = self.bindings.get(name.id.as_str()) {
                    let module = qualified.split('.').next().unwrap_or(qualified);
                    self.references.push(Reference {
                        module: module.to_string(),
                        symbol: name.id.to_string(),
                        qualified_name: qualified.clone(),
                    });
                }
            }
            // One-level attribute call on a bound name, e.g. pytimeparse.parse('1h')
            Expr::Attribute(attr) => {
                if let Expr::Name(object) = &*attr.value
                    && self.bindings.contains_key(object.id.as_str())
                {
                    self.references.push(Reference {
                        module: object.id.to_string(),
                        symbol: attr.attr.to_string(),
                        qualified_name: format!("{}.{}", object.id, attr.attr),
                    });
                }
            }
            _ => {}
        }
    }
}

impl<'a, 'b> Visitor<'b> for CallCollector<'a> {
    fn visit_expr(&mut self, expr: &'b Expr) {
        if let Expr::Call(call) = expr {
            self.record_call(&call.func);
        }

        walk_expr(self, expr);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ruff_python_parser::parse_module;

    use super::*;

    fn references(code: &str) -> Vec<Reference> {
        let module = parse_module(code).unwrap().into_syntax();
        let bindings = ImportBindingCollector::collect(&module);
        CallCollector::collect(&module, &bindings)
    }

    #[test]
    fn test_direct_call_of_from_import() {
        let refs = references("from pytimeparse import parse\nparse('1h 30m')\n");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].module, "pytimeparse");
        assert_eq!(refs[0].symbol, "parse");
        assert_eq!(refs[0].qualified_name, "pytimeparse.parse");
    }

    #[test]
    fn test_direct_call_of_aliased_plain_import() {
        let refs = references("import pytimeparse as tp_alias\ntp_alias('x')\n");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].module, "pytimeparse");
        assert_eq!(refs[0].symbol, "tp_alias");
        assert_eq!(refs[0].qualified_name, "pytimeparse");
    }

    #[test]
    fn test_aliased_from_import_preserves_original_path() {
        let refs = references("from foo import bar as baz\nbaz()\n");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].module, "foo");
        assert_eq!(refs[0].symbol, "baz");
        assert_eq!(refs[0].qualified_name, "foo.bar");
    }

    #[test]
    fn test_attribute_call_on_module_object() {
        let refs = references("import pytimeparse\npytimeparse.parse('1h')\n");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].module, "pytimeparse");
        assert_eq!(refs[0].symbol, "parse");
        assert_eq!(refs[0].qualified_name, "pytimeparse.parse");
    }

    #[test]
    fn test_deep_attribute_chain_ignored() {
        let refs = references("import pkg\npkg.sub.fn()\n");
        assert!(refs.is_empty());
    }

    #[test]
    fn test_unbound_names_ignored() {
        let refs = references("def local():\n    pass\nlocal()\nother()\n");
        assert!(refs.is_empty());
    }

    #[test]
    fn test_repeated_calls_produce_duplicates() {
        let refs = references("from foo import bar\nbar()\nbar()\n");
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0], refs[1]);
    }

    #[test]
    fn test_calls_inside_function_bodies() {
        let code = r#"
import pytimeparse

def f():
    return pytimeparse.parse('1h 30m')
"#;
        let refs = references(code);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].symbol, "parse");
    }
}
