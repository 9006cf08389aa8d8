// AI service
// Orchestrates: Validate -> Enrich (with fallback) -> Prompt -> Model -> Post-process

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::enrich::{AnalysisPipeline, ContextEnricher};
use crate::gemini_client::GeminiClient;
use crate::llm_client::{LlmClient, LlmError};
use crate::ollama_client::OllamaClient;
use crate::prompt::{code_analysis_prompt, log_analysis_prompt};
use crate::response::AiResponse;

const EXCERPT_CHARS: usize = 120;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No response from AI model")]
    UpstreamEmpty,

    #[error("AI model call failed: {0}")]
    UpstreamError(#[source] LlmError),
}

impl From<LlmError> for ServiceError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::EmptyResponse => ServiceError::UpstreamEmpty,
            other => ServiceError::UpstreamError(other),
        }
    }
}

/// LLM Provider selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LlmProvider {
    #[default]
    Gemini,
    Ollama,
}

// AI service configuration
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub provider: LlmProvider,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub ollama_url: String,
    pub ollama_model: String,
    pub request_timeout: Duration,
    pub read_log_files: bool,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: LlmProvider::Gemini,
            gemini_api_key: String::new(),
            gemini_model: "gemini-pro".to_string(),
            ollama_url: "http://localhost:11434".to_string(),
            ollama_model: "llama3.2:3b".to_string(),
            request_timeout: Duration::from_secs(60),
            read_log_files: true,
        }
    }
}

/// Code analysis request
#[derive(Debug, Clone, Default)]
pub struct CodeAnalysis {
    pub code: String,
    pub context: Option<String>,
    pub user_prompt: Option<String>,
}

/// Log analysis request; `logs` may also be a path to a log file
#[derive(Debug, Clone)]
pub struct LogAnalysis {
    pub logs: String,
    pub context: Option<String>,
    pub user_prompt: Option<String>,
    pub code: Option<String>,
    pub format: String,
}

impl LogAnalysis {
    pub fn new(logs: impl Into<String>) -> Self {
        Self {
            logs: logs.into(),
            context: None,
            user_prompt: None,
            code: None,
            format: "text".to_string(),
        }
    }
}

// main AI service
pub struct AiService {
    client: Arc<dyn LlmClient>,
    enricher: Box<dyn ContextEnricher>,
    read_log_files: bool,
}

impl AiService {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self {
            client,
            enricher: Box::new(AnalysisPipeline::new()),
            read_log_files: true,
        }
    }

    /// Build the service and its model client from configuration.
    /// The credential is read once here and reused for every request.
    pub fn from_config(config: &AiConfig) -> Result<Self, LlmError> {
        let client: Arc<dyn LlmClient> = match config.provider {
            LlmProvider::Gemini => Arc::new(GeminiClient::new(
                config.gemini_api_key.clone(),
                config.gemini_model.clone(),
                config.request_timeout,
            )?),
            LlmProvider::Ollama => Arc::new(OllamaClient::new(
                config.ollama_url.clone(),
                config.ollama_model.clone(),
                config.request_timeout,
            )?),
        };
        Ok(Self::new(client).with_log_files(config.read_log_files))
    }

    pub fn with_enricher(mut self, enricher: Box<dyn ContextEnricher>) -> Self {
        self.enricher = enricher;
        self
    }

    pub fn with_log_files(mut self, enabled: bool) -> Self {
        self.read_log_files = enabled;
        self
    }

    pub fn provider(&self) -> &str {
        self.client.provider()
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }

    pub async fn analyze_code(&self, request: CodeAnalysis) -> Result<AiResponse, ServiceError> {
        if request.code.trim().is_empty() {
            return Err(ServiceError::InvalidInput("Code must not be empty".to_string()));
        }
        info!(
            code_len = request.code.len(),
            has_context = request.context.is_some(),
            has_user_prompt = request.user_prompt.is_some(),
            "Code analysis request"
        );

        let context = match self
            .enricher
            .enrich_code(&request.code, request.context.as_deref())
        {
            Ok(enriched) => Some(enriched),
            Err(e) => {
                warn!(
                    stage = "code_enrichment",
                    error = %e,
                    excerpt = %excerpt(&request.code),
                    "Code analysis failed, falling back to raw context"
                );
                request.context.clone()
            }
        };

        let prompt = code_analysis_prompt(
            &request.code,
            context.as_deref(),
            request.user_prompt.as_deref(),
        );
        self.complete(&prompt, "code_analysis").await
    }

    pub async fn analyze_logs(&self, request: LogAnalysis) -> Result<AiResponse, ServiceError> {
        let logs = if self.read_log_files {
            resolve_log_source(&request.logs).await
        } else {
            request.logs.clone()
        };
        if logs.trim().is_empty() {
            return Err(ServiceError::InvalidInput("Logs must not be empty".to_string()));
        }
        info!(
            logs_len = logs.len(),
            log_format = %request.format,
            has_context = request.context.is_some(),
            has_code = request.code.is_some(),
            "Log analysis request"
        );

        let context = match self
            .enricher
            .enrich_logs(&logs, &request.format, request.context.as_deref())
        {
            Ok(enriched) => Some(enriched),
            Err(e) => {
                warn!(
                    stage = "log_enrichment",
                    error = %e,
                    excerpt = %excerpt(&logs),
                    "Log analysis failed, falling back to raw context"
                );
                request.context.clone()
            }
        };

        let prompt = log_analysis_prompt(
            &logs,
            context.as_deref(),
            request.user_prompt.as_deref(),
            request.code.as_deref(),
        );
        self.complete(&prompt, "log_analysis").await
    }

    async fn complete(&self, prompt: &str, stage: &'static str) -> Result<AiResponse, ServiceError> {
        debug!(stage, prompt_len = prompt.len(), provider = self.client.provider(), "Calling model");

        let text = self.client.generate(prompt).await.map_err(|e| {
            error!(
                stage,
                provider = self.client.provider(),
                error = %e,
                excerpt = %excerpt(prompt),
                "Model call failed"
            );
            ServiceError::from(e)
        })?;

        if text.trim().is_empty() {
            error!(stage, provider = self.client.provider(), "Model returned empty content");
            return Err(ServiceError::UpstreamEmpty);
        }

        let response = AiResponse::from_model_text(text);
        info!(
            stage,
            suggestions = response.suggestions.as_ref().map_or(0, Vec::len),
            snippets = response.code_snippets.as_ref().map_or(0, Vec::len),
            "Model response processed"
        );
        Ok(response)
    }
}

// A single-line value naming an existing non-empty file is replaced by the
// file's text. Read failures count as no content.
async fn resolve_log_source(logs: &str) -> String {
    let candidate = logs.trim();
    if candidate.is_empty() || candidate.contains('\n') {
        return logs.to_string();
    }

    let path = Path::new(candidate);
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() && meta.len() > 0 => match tokio::fs::read(path).await {
            Ok(bytes) => {
                info!(path = %path.display(), bytes = bytes.len(), "Reading logs from file");
                String::from_utf8_lossy(&bytes).into_owned()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read log file");
                String::new()
            }
        },
        _ => logs.to_string(),
    }
}

/// First characters of an input, for log lines
pub fn excerpt(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
