// Service settings loaded from the environment (.env is read in main)

use std::time::Duration;

use debugbot_ai::{AiConfig, LlmProvider};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Missing required setting: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub project_name: String,
    pub api_v1_str: String,
    pub bind_addr: String,
    /// When set, analysis routes require a matching X-API-Key header
    pub api_key: Option<String>,
    pub ai: AiConfig,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = AiConfig::default();

        let provider = match get("DEBUGBOT_LLM_PROVIDER") {
            None => LlmProvider::Gemini,
            Some(value) => match value.to_lowercase().as_str() {
                "gemini" => LlmProvider::Gemini,
                "ollama" => LlmProvider::Ollama,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "DEBUGBOT_LLM_PROVIDER",
                        value,
                    });
                }
            },
        };

        let gemini_api_key = get("GEMINI_API_KEY").unwrap_or_default();
        if provider == LlmProvider::Gemini && gemini_api_key.is_empty() {
            return Err(ConfigError::Missing("GEMINI_API_KEY"));
        }

        let request_timeout = match get("DEBUGBOT_REQUEST_TIMEOUT_SECS") {
            None => defaults.request_timeout,
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "DEBUGBOT_REQUEST_TIMEOUT_SECS",
                        value,
                    });
                }
            },
        };

        let read_log_files = match get("DEBUGBOT_READ_LOG_FILES") {
            None => defaults.read_log_files,
            Some(value) => parse_bool(&value).ok_or(ConfigError::Invalid {
                key: "DEBUGBOT_READ_LOG_FILES",
                value,
            })?,
        };

        let ai = AiConfig {
            provider,
            gemini_api_key,
            gemini_model: get("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            ollama_url: get("OLLAMA_URL").unwrap_or(defaults.ollama_url),
            ollama_model: get("OLLAMA_MODEL").unwrap_or(defaults.ollama_model),
            request_timeout,
            read_log_files,
        };

        Ok(Self {
            project_name: get("PROJECT_NAME").unwrap_or_else(|| "VS Code Debug Bot".to_string()),
            api_v1_str: normalize_prefix(&get("API_V1_STR").unwrap_or_else(|| "/api/v1".to_string())),
            bind_addr: get("DEBUGBOT_BIND_ADDR").unwrap_or_else(|| "127.0.0.1:8000".to_string()),
            api_key: get("DEBUGBOT_API_KEY"),
            ai,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// "/api/v1/" and "api/v1" both become "/api/v1"
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    format!("/{}", trimmed)
}
