// Context enrichment
// Runs the core pipeline and turns its result into prompt context

use debugbot_core::{
    CodeRefactorer, CodeStructureAnalyzer, CodeSyntaxError, LogAnalyzer, LogParseError,
    RefactorError,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Code analysis failed: {0}")]
    Code(#[from] CodeSyntaxError),

    #[error(transparent)]
    Refactor(#[from] RefactorError),

    #[error(transparent)]
    Logs(#[from] LogParseError),

    #[error("Failed to serialize analysis: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Builds the enriched context blob for a request.
/// Any error here is recovered by the caller, never shown to the user.
pub trait ContextEnricher: Send + Sync {
    fn enrich_code(&self, code: &str, context: Option<&str>) -> Result<String, PipelineError>;

    fn enrich_logs(
        &self,
        logs: &str,
        format: &str,
        context: Option<&str>,
    ) -> Result<String, PipelineError>;
}

/// Default enricher backed by the core analyzers
pub struct AnalysisPipeline {
    log_analyzer: LogAnalyzer,
}

impl AnalysisPipeline {
    pub fn new() -> Self {
        Self {
            log_analyzer: LogAnalyzer::new(),
        }
    }
}

impl Default for AnalysisPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextEnricher for AnalysisPipeline {
    fn enrich_code(&self, code: &str, context: Option<&str>) -> Result<String, PipelineError> {
        let structure = CodeStructureAnalyzer::analyze(code)?;
        let optimized = CodeRefactorer::optimize_imports(code)?;

        let enriched = format!(
            "Code structure analysis:\n{}\n\nCode with optimized imports:\n```\n{}\n```",
            serde_json::to_string_pretty(&structure)?,
            optimized
        );
        Ok(with_caller_context(enriched, context))
    }

    fn enrich_logs(
        &self,
        logs: &str,
        format: &str,
        context: Option<&str>,
    ) -> Result<String, PipelineError> {
        let analysis = self.log_analyzer.analyze(format, logs)?;

        let enriched = format!(
            "Log analysis:\n{}",
            serde_json::to_string_pretty(&analysis)?
        );
        Ok(with_caller_context(enriched, context))
    }
}

fn with_caller_context(enriched: String, context: Option<&str>) -> String {
    match context.filter(|c| !c.trim().is_empty()) {
        Some(c) => format!("{}\n\nAdditional context: {}", enriched, c),
        None => enriched,
    }
}
