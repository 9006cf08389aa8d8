//! Canonical python printer
//!
//! Re-emits a parsed tree one statement per line with four-space indentation
//! and fixed token spacing. Comments, blank lines, line continuations and
//! parenthesised line breaks from the input are not preserved.

use super::node_text;
use tree_sitter::Node;

const INDENT: &str = "    ";

/// Render a whole module
pub fn render_module(root: Node, source: &str) -> String {
    let mut lines = Vec::new();
    render_block(root, source, 0, &mut lines);
    lines.join("\n")
}

/// Render a single statement on one line (used for import statements)
pub fn render_statement(node: Node, source: &str) -> String {
    let mut tokens = Vec::new();
    collect_tokens(node, source, &mut tokens);
    join_tokens(&tokens)
}

fn render_block(block: Node, source: &str, depth: usize, lines: &mut Vec<String>) {
    let mut cursor = block.walk();
    let statements: Vec<_> = block
        .named_children(&mut cursor)
        .filter(|n| !is_extra(n.kind()))
        .collect();
    for statement in statements {
        render_node(statement, source, depth, lines);
    }
}

fn render_node(node: Node, source: &str, depth: usize, lines: &mut Vec<String>) {
    // blank line before definitions, except at the very top
    if matches!(
        node.kind(),
        "function_definition" | "class_definition" | "decorated_definition"
    ) && !lines.is_empty()
        && !is_definition_head(lines)
    {
        lines.push(String::new());
    }

    let mut header = Vec::new();
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    for child in children {
        if child.kind() == "block" {
            flush_line(&mut header, depth, lines);
            render_block(child, source, depth + 1, lines);
        } else if child.kind() == "decorator" {
            let mut tokens = Vec::new();
            collect_tokens(child, source, &mut tokens);
            lines.push(format!("{}{}", INDENT.repeat(depth), join_tokens(&tokens)));
        } else if opens_block(child) {
            // elif / else / except / finally / case clauses and decorated targets
            flush_line(&mut header, depth, lines);
            render_node(child, source, depth, lines);
        } else {
            collect_tokens(child, source, &mut header);
        }
    }
    flush_line(&mut header, depth, lines);
}

// a decorator line directly above keeps the definition attached to it
fn is_definition_head(lines: &[String]) -> bool {
    lines
        .last()
        .map(|l| l.trim_start().starts_with('@'))
        .unwrap_or(false)
}

fn opens_block(node: Node) -> bool {
    if node.kind() == "function_definition" || node.kind() == "class_definition" {
        return true;
    }
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).any(|c| c.kind() == "block");
    found
}

fn flush_line(tokens: &mut Vec<Token>, depth: usize, lines: &mut Vec<String>) {
    if tokens.is_empty() {
        return;
    }
    lines.push(format!("{}{}", INDENT.repeat(depth), join_tokens(tokens)));
    tokens.clear();
}

fn is_extra(kind: &str) -> bool {
    matches!(kind, "comment" | "line_continuation")
}

#[derive(Debug, Clone)]
struct Token {
    text: String,
    kind: &'static str,
    parent: &'static str,
}

fn collect_tokens(node: Node, source: &str, out: &mut Vec<Token>) {
    if is_extra(node.kind()) {
        return;
    }
    if node.kind() == "string" || node.child_count() == 0 {
        let raw = node_text(node, source);
        let text = if node.kind() == "string" {
            normalize_quotes(raw)
        } else {
            raw.to_string()
        };
        out.push(Token {
            text,
            kind: node.kind(),
            parent: node.parent().map(|p| p.kind()).unwrap_or(""),
        });
        return;
    }

    let strip_parens = node.kind() == "import_from_statement";
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    for child in children {
        if strip_parens && matches!(child.kind(), "(" | ")") {
            continue;
        }
        collect_tokens(child, source, out);
    }
}

// Plain double-quoted strings become single-quoted when that needs no escaping
fn normalize_quotes(raw: &str) -> String {
    let is_simple = raw.len() >= 2
        && raw.starts_with('"')
        && raw.ends_with('"')
        && !raw.starts_with("\"\"\"");
    if !is_simple {
        return raw.to_string();
    }
    let inner = &raw[1..raw.len() - 1];
    if inner.contains('\'') || inner.contains('\\') || inner.contains('"') {
        return raw.to_string();
    }
    format!("'{}'", inner)
}

fn join_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    let mut prev: Option<&Token> = None;
    for token in tokens {
        if let Some(p) = prev {
            if needs_space(p, token) {
                out.push(' ');
            }
        }
        out.push_str(&token.text);
        prev = Some(token);
    }
    out
}

fn needs_space(prev: &Token, cur: &Token) -> bool {
    // relative import dots: `from .. import x`, `from .pkg import x`
    if cur.parent == "import_prefix" {
        return prev.parent != "import_prefix";
    }
    if prev.parent == "import_prefix" {
        return cur.text == "import";
    }

    // `1 .real` would lex as a float without the space
    if cur.text == "." && prev.kind == "integer" {
        return true;
    }
    // `y[1:2, ::3]`
    if cur.text == ":" && cur.parent == "slice" && prev.text == "," {
        return true;
    }
    if matches!(prev.text.as_str(), "(" | "[" | "{" | ".") {
        return false;
    }
    if prev.text == "@" && prev.parent == "decorator" {
        return false;
    }
    if matches!(cur.text.as_str(), ")" | "]" | "}" | "," | ":" | ";" | ".") {
        return false;
    }
    if matches!(cur.text.as_str(), "(" | "[") {
        return !is_operand_end(prev);
    }
    // keyword arguments and untyped defaults: f(a=1), def f(a=1)
    if (prev.text == "=" && is_tight_assignment(prev.parent))
        || (cur.text == "=" && is_tight_assignment(cur.parent))
    {
        return false;
    }
    if prev.parent == "unary_operator" && matches!(prev.text.as_str(), "-" | "+" | "~") {
        return false;
    }
    if matches!(prev.text.as_str(), "*" | "**") && is_splat(prev.parent) {
        return false;
    }
    if prev.text == ":" && prev.parent == "slice" {
        return false;
    }
    true
}

fn is_operand_end(token: &Token) -> bool {
    matches!(token.kind, "identifier" | "string" | ")" | "]" | "}")
}

fn is_tight_assignment(parent: &str) -> bool {
    matches!(parent, "keyword_argument" | "default_parameter")
}

// `*` / `**` outside arithmetic: call splats, parameters, targets and case patterns
fn is_splat(parent: &str) -> bool {
    parent != "binary_operator"
}
