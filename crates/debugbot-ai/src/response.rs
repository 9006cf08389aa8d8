//! Post-processing of the model's free-text reply
//!
//! Three independent passes over the same lines: suggestions, fenced code
//! snippets and salient context lines. Rule order inside each pass is
//! observable in the output and must not change.

use serde::{Deserialize, Serialize};

const SUGGESTION_KEYWORDS: [&str; 6] = ["suggest", "recommend", "consider", "could", "should", "try"];
const CONTEXT_KEYWORDS: [&str; 5] = ["important", "key", "critical", "note", "recommendation"];
const BULLETS: [char; 3] = ['•', '-', '*'];
const FENCE: &str = "```";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSnippet {
    pub code: String,
    pub language: String,
}

/// What the caller gets back for every analysis request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiResponse {
    pub content: String,
    #[serde(default)]
    pub suggestions: Option<Vec<String>>,
    #[serde(default)]
    pub code_snippets: Option<Vec<CodeSnippet>>,
    #[serde(default)]
    pub chat_context: Option<String>,
}

impl AiResponse {
    /// Build the structured response from raw model text
    pub fn from_model_text(content: String) -> Self {
        let suggestions = extract_suggestions(&content);
        let code_snippets = extract_code_snippets(&content);
        let chat_context = extract_chat_context(&content);
        Self {
            content,
            suggestions: Some(suggestions),
            code_snippets: Some(code_snippets),
            chat_context,
        }
    }
}

/// Numbered items, then bullets, then keyword lines; first matching rule wins
pub fn extract_suggestions(content: &str) -> Vec<String> {
    let mut suggestions = Vec::new();
    for line in content.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut chars = line.chars();
        let first = chars.next();
        let second = chars.next();

        // "1. text" -> "text"; needs something after the marker
        if first.is_some_and(|c| c.is_ascii_digit())
            && second == Some('.')
            && line.chars().count() > 2
        {
            suggestions.push(line[2..].trim().to_string());
            continue;
        }

        if let Some(rest) = line.strip_prefix(BULLETS) {
            suggestions.push(rest.trim().to_string());
            continue;
        }

        let lower = line.to_lowercase();
        if SUGGESTION_KEYWORDS.iter().any(|k| lower.contains(k)) {
            suggestions.push(line.to_string());
        }
    }
    suggestions
}

/// Fenced blocks; an unterminated block at the end is still emitted
pub fn extract_code_snippets(content: &str) -> Vec<CodeSnippet> {
    let mut snippets = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut language: Option<String> = None;
    let mut in_block = false;

    for line in content.split('\n') {
        if let Some(spec) = line.strip_prefix(FENCE) {
            if in_block {
                if !current.is_empty() {
                    snippets.push(snippet(&current, language.take()));
                }
                current.clear();
                language = None;
                in_block = false;
            } else {
                in_block = true;
                let spec = spec.trim();
                if !spec.is_empty() {
                    language = Some(spec.to_lowercase());
                }
            }
            continue;
        }

        if in_block {
            current.push(line);
        }
    }

    if !current.is_empty() {
        snippets.push(snippet(&current, language));
    }
    snippets
}

fn snippet(lines: &[&str], language: Option<String>) -> CodeSnippet {
    CodeSnippet {
        code: lines.join("\n"),
        language: language.unwrap_or_else(|| "text".to_string()),
    }
}

/// Lines worth carrying into a follow-up conversation
pub fn extract_chat_context(content: &str) -> Option<String> {
    let key_points: Vec<&str> = content
        .split('\n')
        .filter(|line| {
            let lower = line.to_lowercase();
            CONTEXT_KEYWORDS.iter().any(|k| lower.contains(k))
        })
        .map(str::trim)
        .collect();

    if key_points.is_empty() {
        None
    } else {
        Some(key_points.join("\n"))
    }
}
