// Code structure analyzer
// Single pre-order walk collecting imports, functions and classes

use super::{node_text, parse_python, CodeSyntaxError};
use crate::{ClassInfo, CodeStructure, FunctionInfo};
use tree_sitter::Node;

pub struct CodeStructureAnalyzer;

impl CodeStructureAnalyzer {
    /// Parse and analyze python source
    pub fn analyze(source: &str) -> Result<CodeStructure, CodeSyntaxError> {
        let tree = parse_python(source)?;
        let mut structure = CodeStructure::default();
        Self::visit(tree.root_node(), source, &mut structure);
        Ok(structure)
    }

    fn visit(node: Node, source: &str, out: &mut CodeStructure) {
        match node.kind() {
            "import_statement" => {
                let mut cursor = node.walk();
                for name in node.children_by_field_name("name", &mut cursor) {
                    out.imports.push(imported_module(name, source));
                }
            }
            "import_from_statement" => {
                let module = node
                    .child_by_field_name("module_name")
                    .map(|m| dotted(m, source))
                    .unwrap_or_default();
                out.imports.push(join_from_import(&module, &first_imported_name(node, source)));
            }
            "future_import_statement" => {
                out.imports
                    .push(join_from_import("__future__", &first_imported_name(node, source)));
            }
            "function_definition" => {
                if let Some(name) = node.child_by_field_name("name") {
                    out.functions.push(FunctionInfo {
                        name: node_text(name, source).to_string(),
                        arity: node
                            .child_by_field_name("parameters")
                            .map(positional_arity)
                            .unwrap_or(0),
                        line_number: node.start_position().row + 1,
                    });
                }
            }
            "class_definition" => {
                if let Some(name) = node.child_by_field_name("name") {
                    out.classes.push(ClassInfo {
                        name: node_text(name, source).to_string(),
                        method_count: node
                            .child_by_field_name("body")
                            .map(direct_method_count)
                            .unwrap_or(0),
                        line_number: node.start_position().row + 1,
                    });
                }
            }
            _ => {}
        }

        let mut cursor = node.walk();
        let children: Vec<_> = node.named_children(&mut cursor).collect();
        for child in children {
            Self::visit(child, source, out);
        }
    }
}

// `import a.b as c` records a.b
fn imported_module(name: Node, source: &str) -> String {
    match name.kind() {
        "aliased_import" => name
            .child_by_field_name("name")
            .map(|n| dotted(n, source))
            .unwrap_or_default(),
        _ => dotted(name, source),
    }
}

// Only the first imported symbol of a from-import is recorded.
fn first_imported_name(node: Node, source: &str) -> String {
    let mut cursor = node.walk();
    let first = node.children_by_field_name("name", &mut cursor).next();
    match first {
        Some(name) => imported_module(name, source),
        None => {
            let mut cursor = node.walk();
            let wildcard = node
                .named_children(&mut cursor)
                .any(|child| child.kind() == "wildcard_import");
            if wildcard {
                "*".to_string()
            } else {
                String::new()
            }
        }
    }
}

// `from . import x` -> `.x`, `from .pkg import x` -> `.pkg.x`
fn join_from_import(module: &str, name: &str) -> String {
    if module.ends_with('.') {
        format!("{}{}", module, name)
    } else {
        format!("{}.{}", module, name)
    }
}

fn dotted(node: Node, source: &str) -> String {
    node_text(node, source)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

// Positional parameters only: stops at *args, a bare `*` or **kwargs
fn positional_arity(params: Node) -> usize {
    let mut count = 0;
    let mut cursor = params.walk();
    for param in params.children(&mut cursor) {
        match param.kind() {
            "identifier" | "default_parameter" | "typed_default_parameter" => count += 1,
            "typed_parameter" => {
                let is_plain = param
                    .named_child(0)
                    .map(|n| n.kind() == "identifier")
                    .unwrap_or(false);
                if !is_plain {
                    break;
                }
                count += 1;
            }
            "list_splat_pattern" | "dictionary_splat_pattern" | "keyword_separator" | "*" => break,
            _ => {}
        }
    }
    count
}

fn direct_method_count(body: Node) -> usize {
    let mut cursor = body.walk();
    let count = body
        .named_children(&mut cursor)
        .filter(|member| match member.kind() {
            "function_definition" => true,
            "decorated_definition" => member
                .child_by_field_name("definition")
                .map(|d| d.kind() == "function_definition")
                .unwrap_or(false),
            _ => false,
        })
        .count();
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imports_and_function() {
        let s = CodeStructureAnalyzer::analyze("import os\nimport sys\ndef f(a,b): pass").unwrap();
        assert_eq!(s.imports, vec!["os", "sys"]);
        assert_eq!(s.functions.len(), 1);
        assert_eq!(s.functions[0].name, "f");
        assert_eq!(s.functions[0].arity, 2);
        assert_eq!(s.functions[0].line_number, 3);
        assert_eq!(s.complexity, 0);
    }

    #[test]
    fn test_from_import_records_first_name_only() {
        let s = CodeStructureAnalyzer::analyze(
            "from os.path import join, exists\nfrom . import sibling\nfrom .pkg import mod as m\nfrom typing import *\n",
        )
        .unwrap();
        assert_eq!(s.imports, vec!["os.path.join", ".sibling", ".pkg.mod", "typing.*"]);
    }

    #[test]
    fn test_aliases_and_multi_import() {
        let s = CodeStructureAnalyzer::analyze("import numpy as np, os.path\n").unwrap();
        assert_eq!(s.imports, vec!["numpy", "os.path"]);
    }

    #[test]
    fn test_arity_counts_positional_only() {
        let src = "def g(self, a: int, b=1, c: str = 'x', *args, d, **kw):\n    pass\n\ndef h(a, *, b):\n    pass\n";
        let s = CodeStructureAnalyzer::analyze(src).unwrap();
        assert_eq!(s.functions[0].arity, 4);
        assert_eq!(s.functions[1].arity, 1);
        assert_eq!(s.functions[1].line_number, 4);
    }

    #[test]
    fn test_class_method_count() {
        let src = "class A(Base):\n    x = 1\n\n    def m(self):\n        def inner():\n            pass\n\n    @staticmethod\n    def s():\n        pass\n";
        let s = CodeStructureAnalyzer::analyze(src).unwrap();
        assert_eq!(s.classes.len(), 1);
        assert_eq!(s.classes[0].name, "A");
        assert_eq!(s.classes[0].method_count, 2);
        assert_eq!(s.classes[0].line_number, 1);
        // nested functions are still functions
        let names: Vec<_> = s.functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["m", "inner", "s"]);
    }

    #[test]
    fn test_nested_entries_in_source_order() {
        let src = "def outer():\n    import json\n    def inner():\n        pass\n\nimport os\n\nasync def later():\n    pass\n";
        let s = CodeStructureAnalyzer::analyze(src).unwrap();
        assert_eq!(s.imports, vec!["json", "os"]);
        let names: Vec<_> = s.functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["outer", "inner", "later"]);
    }

    #[test]
    fn test_invalid_code_fails() {
        assert!(CodeStructureAnalyzer::analyze("def broken(:\n").is_err());
    }
}
