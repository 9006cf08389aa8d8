// Plain text log parser (terminal output, application logs)

use super::{LogParseError, LogParser};
use crate::{LogEntry, LogLevel};
use regex::Regex;

pub struct PlainTextParser {
    // 2024-02-08 10:30:00 anywhere in the line
    timestamp_pattern: Regex,
}

impl PlainTextParser {
    pub fn new() -> Self {
        Self {
            timestamp_pattern: Regex::new(r"\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}").unwrap(),
        }
    }

    fn parse_line(&self, line: &str) -> LogEntry {
        LogEntry {
            timestamp: self
                .timestamp_pattern
                .find(line)
                .map(|m| m.as_str().to_string()),
            content: line.trim().to_string(),
            level: LogLevel::detect(line),
        }
    }
}

impl Default for PlainTextParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LogParser for PlainTextParser {
    fn name(&self) -> &'static str {
        "text"
    }

    fn parse(&self, raw: &str) -> Result<Vec<LogEntry>, LogParseError> {
        Ok(raw
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .map(|line| self.parse_line(line))
            .collect())
    }
}
