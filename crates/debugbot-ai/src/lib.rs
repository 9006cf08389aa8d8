// Debug Bot AI layer - prompt building, model clients and response post-processing

pub mod enrich;
pub mod gemini_client;
pub mod llm_client;
pub mod ollama_client;
pub mod prompt;
pub mod response;
pub mod service;

pub use enrich::{AnalysisPipeline, ContextEnricher, PipelineError};
pub use gemini_client::GeminiClient;
pub use llm_client::{LlmClient, LlmError};
pub use ollama_client::OllamaClient;
pub use response::{AiResponse, CodeSnippet};
pub use service::{
    AiConfig, AiService, CodeAnalysis, LlmProvider, LogAnalysis, ServiceError,
};
