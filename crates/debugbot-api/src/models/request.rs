use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
pub struct CodeAnalysisRequest {
    pub code: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub user_prompt: Option<String>,
}

/// Logs arrive either as one blob or as individual lines
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum LogsInput {
    Text(String),
    Lines(Vec<String>),
}

impl LogsInput {
    pub fn into_text(self) -> String {
        match self {
            LogsInput::Text(text) => text,
            LogsInput::Lines(lines) => lines.join("\n"),
        }
    }
}

/// Free-form context from the editor: a sentence, a list of hints or key/value pairs
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ContextInput {
    Text(String),
    Items(Vec<String>),
    Fields(BTreeMap<String, serde_json::Value>),
}

impl ContextInput {
    pub fn render(&self) -> String {
        match self {
            ContextInput::Text(text) => text.clone(),
            ContextInput::Items(items) => items.join(", "),
            ContextInput::Fields(fields) => fields
                .iter()
                .map(|(key, value)| match value {
                    serde_json::Value::String(s) => format!("{}: {}", key, s),
                    other => format!("{}: {}", key, other),
                })
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

#[derive(Deserialize)]
pub struct LogAnalysisRequest {
    pub logs: LogsInput,
    #[serde(default)]
    pub context: Option<ContextInput>,
    #[serde(default)]
    pub user_prompt: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default = "default_log_type", rename = "type")]
    pub log_type: String,
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_log_type() -> String {
    "terminal_logs".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

#[derive(Deserialize)]
pub struct RefactorRequest {
    pub code: String,
    pub refactor_type: String,
}

#[derive(Deserialize)]
pub struct StructureRequest {
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_request_defaults() {
        let req: LogAnalysisRequest = serde_json::from_str(r#"{"logs": "ERROR x"}"#).unwrap();
        assert_eq!(req.logs, LogsInput::Text("ERROR x".to_string()));
        assert_eq!(req.log_type, "terminal_logs");
        assert_eq!(req.format, "text");
        assert!(req.context.is_none());
        assert!(req.code.is_none());
    }

    #[test]
    fn test_logs_as_lines() {
        let req: LogAnalysisRequest =
            serde_json::from_str(r#"{"logs": ["INFO a", "ERROR b"], "type": "browser_console"}"#)
                .unwrap();
        assert_eq!(req.log_type, "browser_console");
        assert_eq!(req.logs.into_text(), "INFO a\nERROR b");
    }

    #[test]
    fn test_context_shapes() {
        let text: ContextInput = serde_json::from_str(r#""flask app""#).unwrap();
        assert_eq!(text.render(), "flask app");

        let items: ContextInput = serde_json::from_str(r#"["python 3.12", "linux"]"#).unwrap();
        assert_eq!(items.render(), "python 3.12, linux");

        let fields: ContextInput =
            serde_json::from_str(r#"{"runtime": "node", "port": 8080}"#).unwrap();
        assert_eq!(fields.render(), "port: 8080, runtime: node");
    }
}
