//! log parser registry - split raw log text into structured entries

pub mod text;

pub use text::PlainTextParser;

use crate::LogEntry;
use std::collections::HashMap;
use thiserror::Error;

//parse error type
#[derive(Debug, Error)]
#[error("Log parsing failed: {message}")]
pub struct LogParseError {
    pub message: String,
}

impl LogParseError {
    pub fn new(msg: &str) -> Self {
        Self { message: msg.to_string() }
    }
}

// Parser trait - every log format implements this

pub trait LogParser: Send + Sync {
    fn name(&self) -> &'static str;
    fn parse(&self, raw: &str) -> Result<Vec<LogEntry>, LogParseError>;
}

// Registry to hold all parsers

pub struct ParserRegistry {
    parsers: HashMap<String, Box<dyn LogParser>>,
}

impl ParserRegistry {
    pub fn new() -> Self {
        Self { parsers: HashMap::new() }
    }

    /// Registry with every built-in format registered
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(PlainTextParser::new()));
        registry
    }

    // register a parser
    pub fn register(&mut self, parser: Box<dyn LogParser>) {
        self.parsers.insert(parser.name().to_string(), parser);
    }

    // Get parser by name
    pub fn get(&self, name: &str) -> Option<&dyn LogParser> {
        self.parsers.get(name).map(|p| p.as_ref())
    }

    //parse using specified format
    pub fn parse(&self, format: &str, raw: &str) -> Result<Vec<LogEntry>, LogParseError> {
        match self.get(format) {
            Some(parser) => parser.parse(raw),
            None => Err(LogParseError::new(&format!("Unknown format: {}", format))),
        }
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
