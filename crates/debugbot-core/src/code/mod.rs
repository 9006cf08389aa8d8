//! Python source analysis on top of tree-sitter
//!
//! tree-sitter always produces a tree, even for broken input, so a parse only
//! counts as successful when the tree carries no ERROR or MISSING node.

pub mod printer;
pub mod refactor;
pub mod structure;

use thiserror::Error;
use tree_sitter::{Node, Parser, Tree};

/// Source that is not valid Python
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Syntax error in code: {message} (line {line}, column {column})")]
pub struct CodeSyntaxError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl CodeSyntaxError {
    fn at(node: Node, message: impl Into<String>) -> Self {
        let pos = node.start_position();
        Self {
            line: pos.row + 1,
            column: pos.column + 1,
            message: message.into(),
        }
    }

    fn unplaced(message: impl Into<String>) -> Self {
        Self {
            line: 0,
            column: 0,
            message: message.into(),
        }
    }
}

/// Parse python source, rejecting trees with syntax errors
pub fn parse_python(source: &str) -> Result<Tree, CodeSyntaxError> {
    let language: tree_sitter::Language = tree_sitter_python::LANGUAGE.into();
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| CodeSyntaxError::unplaced(format!("Failed to set language: {e}")))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| CodeSyntaxError::unplaced("Failed to parse source code"))?;

    let root = tree.root_node();
    if root.has_error() {
        return Err(first_error(root, source)
            .unwrap_or_else(|| CodeSyntaxError::at(root, "invalid syntax")));
    }
    Ok(tree)
}

// pre-order search for the first ERROR / MISSING node
fn first_error(node: Node, source: &str) -> Option<CodeSyntaxError> {
    if node.is_missing() {
        return Some(CodeSyntaxError::at(node, format!("missing '{}'", node.kind())));
    }
    if node.is_error() {
        let snippet: String = node_text(node, source).chars().take(40).collect();
        return Some(CodeSyntaxError::at(
            node,
            format!("invalid syntax near '{}'", snippet.trim()),
        ));
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children.into_iter().find_map(|child| first_error(child, source))
}

pub(crate) fn node_text<'a>(node: Node, source: &'a str) -> &'a str {
    source.get(node.byte_range()).unwrap_or("")
}
