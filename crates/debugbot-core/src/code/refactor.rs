// Code refactoring transforms
// Both transforms re-parse the source first and fail on invalid python

use super::printer::{render_module, render_statement};
use super::{parse_python, CodeSyntaxError};
use std::collections::BTreeSet;
use std::str::FromStr;
use thiserror::Error;
use tree_sitter::Node;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported refactor type: {0}")]
pub struct UnsupportedOperation(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefactorError {
    #[error("Code formatting failed: {0}")]
    Format(#[source] CodeSyntaxError),

    #[error("Import optimization failed: {0}")]
    OptimizeImports(#[source] CodeSyntaxError),

    #[error(transparent)]
    Unsupported(#[from] UnsupportedOperation),
}

/// Available refactorings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefactorKind {
    Format,
    OptimizeImports,
}

impl FromStr for RefactorKind {
    type Err = UnsupportedOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "format" => Ok(Self::Format),
            "optimize_imports" => Ok(Self::OptimizeImports),
            other => Err(UnsupportedOperation(other.to_string())),
        }
    }
}

pub struct CodeRefactorer;

impl CodeRefactorer {
    /// Dispatch on a refactor type identifier
    pub fn refactor(source: &str, refactor_type: &str) -> Result<String, RefactorError> {
        let kind: RefactorKind = refactor_type.parse()?;
        Self::apply(source, kind)
    }

    pub fn apply(source: &str, kind: RefactorKind) -> Result<String, RefactorError> {
        match kind {
            RefactorKind::Format => Self::format(source),
            RefactorKind::OptimizeImports => Self::optimize_imports(source),
        }
    }

    /// Re-emit the source through the canonical printer
    pub fn format(source: &str) -> Result<String, RefactorError> {
        let tree = parse_python(source).map_err(RefactorError::Format)?;
        Ok(render_module(tree.root_node(), source))
    }

    /// Sorted, deduplicated import block followed by the source minus import lines.
    ///
    /// Removal is line based: a parenthesised import spread over several lines
    /// only loses its first line.
    pub fn optimize_imports(source: &str) -> Result<String, RefactorError> {
        let tree = parse_python(source).map_err(RefactorError::OptimizeImports)?;

        let mut imports = BTreeSet::new();
        collect_imports(tree.root_node(), source, &mut imports);

        let rest = source.split('\n').filter(|line| {
            let trimmed = line.trim();
            !(trimmed.starts_with("import ") || trimmed.starts_with("from "))
        });

        let lines: Vec<&str> = imports
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(""))
            .chain(rest)
            .collect();
        Ok(lines.join("\n"))
    }
}

fn collect_imports(node: Node, source: &str, out: &mut BTreeSet<String>) {
    if matches!(
        node.kind(),
        "import_statement" | "import_from_statement" | "future_import_statement"
    ) {
        out.insert(render_statement(node, source));
        return;
    }
    let mut cursor = node.walk();
    let children: Vec<_> = node.named_children(&mut cursor).collect();
    for child in children {
        collect_imports(child, source, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimize_imports_dedup_and_sort() {
        let src = "import sys\nimport os\nimport sys\n\nprint(os, sys)";
        let out = CodeRefactorer::optimize_imports(src).unwrap();
        assert_eq!(out, "import os\nimport sys\n\n\nprint(os, sys)");
    }

    #[test]
    fn test_nested_imports_hoisted() {
        let src = "def f():\n    from json import loads\n    return loads";
        let out = CodeRefactorer::optimize_imports(src).unwrap();
        assert_eq!(out, "from json import loads\n\ndef f():\n    return loads");
    }

    #[test]
    fn test_unsupported_refactor_type() {
        let err = CodeRefactorer::refactor("x = 1", "rename").unwrap_err();
        assert_eq!(err, RefactorError::Unsupported(UnsupportedOperation("rename".into())));
        assert_eq!(err.to_string(), "Unsupported refactor type: rename");
    }

    #[test]
    fn test_invalid_source_wrapped() {
        let err = CodeRefactorer::refactor("def (:", "format").unwrap_err();
        assert!(matches!(err, RefactorError::Format(_)));
        let err = CodeRefactorer::refactor("def (:", "optimize_imports").unwrap_err();
        assert!(err.to_string().starts_with("Import optimization failed"));
    }

    #[test]
    fn test_dispatch_format() {
        let out = CodeRefactorer::refactor("x=1", "format").unwrap();
        assert_eq!(out, "x = 1");
    }
}
