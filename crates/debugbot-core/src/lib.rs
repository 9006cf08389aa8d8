//! Core types for the debug bot
//! this crate holds the pre-processing pipeline that runs before anything is sent to the model:
//! log parsing, error extraction, summarization and python code analysis.
pub mod code;
pub mod extractor;
pub mod parser;
pub mod summary;

pub use code::refactor::{CodeRefactorer, RefactorError, RefactorKind, UnsupportedOperation};
pub use code::structure::CodeStructureAnalyzer;
pub use code::CodeSyntaxError;
pub use extractor::ErrorExtractor;
pub use parser::{LogParseError, LogParser, ParserRegistry, PlainTextParser};
pub use summary::{LogAnalyzer, LogSummarizer};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// LOG LEVEL //

/// Coarse severity of a log line, detected by keyword

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]

pub enum LogLevel {
    Error,
    Warning,
    Info,
    Unknown,
}

impl LogLevel {
    /// All levels in detection priority order
    pub const ALL: [LogLevel; 4] = [Self::Error, Self::Warning, Self::Info, Self::Unknown];

    /// Detect the level of a raw line (case-insensitive, first keyword wins)
    pub fn detect(line: &str) -> Self {
        let upper = line.to_uppercase();
        if upper.contains("ERROR") {
            Self::Error
        } else if upper.contains("WARNING") {
            Self::Warning
        } else if upper.contains("INFO") {
            Self::Info
        } else {
            Self::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Unknown => "UNKNOWN",
        }
    }
}

// parsed log entry

// one entry per non-blank input line

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(default)]
    pub timestamp: Option<String>, // YYYY-MM-DD HH:MM:SS when the line carries one

    pub content: String, // trimmed raw line

    pub level: LogLevel,
}

// Error records

/// Which signature table entry produced an error record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]

pub enum ErrorType {
    Python,     // traceback block ending in <Name>Error: message
    Javascript, // TypeError / ReferenceError / SyntaxError line
    Api,        // 4xx/5xx status line
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Javascript => "javascript",
            Self::Api => "api",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub error_type: ErrorType,
    pub message: String, // full matched span
    pub line_number: Option<u32>,
    pub suggestion: String,
}

// Summary / timeline

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub time: String,
    pub event: String,
    pub level: LogLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogSummary {
    pub total_logs: usize,
    pub level_distribution: BTreeMap<LogLevel, usize>,
    pub error_rate: f64,
}

/// Everything the log path knows about a request's logs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogAnalysisResult {
    pub total_entries: usize,
    pub error_count: usize,
    pub errors: Vec<ErrorRecord>,
    pub timeline: Vec<TimelineEvent>,
    pub summary: LogSummary,
}

// Code structure

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionInfo {
    pub name: String,
    pub arity: usize,
    pub line_number: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInfo {
    pub name: String,
    pub method_count: usize,
    pub line_number: usize,
}

/// Entries are listed in source order (depth-first), so nested imports and
/// functions appear where they are written. Async defs are functions,
/// positional-only parameters count toward arity and relative from-imports
/// keep their dots (`from . import z` -> `.z`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeStructure {
    pub imports: Vec<String>,
    pub functions: Vec<FunctionInfo>,
    pub classes: Vec<ClassInfo>,
    pub complexity: u32, // reserved, always 0
}
