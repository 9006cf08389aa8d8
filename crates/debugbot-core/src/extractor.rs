//! Error signature extraction
//!
//! The pattern table is ordered: every python match is emitted before any
//! javascript match, which come before api matches. Output is NOT sorted by
//! position across patterns.

use crate::{ErrorRecord, ErrorType};
use regex::Regex;

pub struct ErrorExtractor {
    patterns: Vec<(ErrorType, Regex)>,
    line_number: Regex,
}

impl ErrorExtractor {
    pub fn new() -> Self {
        Self {
            patterns: vec![
                // Traceback block up to the first <Name>Error: line
                (
                    ErrorType::Python,
                    Regex::new(r"Traceback \(most recent call last\):[\s\S]+?\n\w+Error: .+").unwrap(),
                ),
                (
                    ErrorType::Javascript,
                    Regex::new(r"(?:TypeError|ReferenceError|SyntaxError):.+").unwrap(),
                ),
                (
                    ErrorType::Api,
                    Regex::new(r"(?:4\d{2}|5\d{2}) (?:Error|NOT_FOUND|BAD_REQUEST):.+").unwrap(),
                ),
            ],
            line_number: Regex::new(r"line (\d+)").unwrap(),
        }
    }

    /// Scan raw log text for known error signatures
    pub fn extract(&self, logs: &str) -> Vec<ErrorRecord> {
        let mut errors = Vec::new();
        for (error_type, pattern) in &self.patterns {
            for m in pattern.find_iter(logs) {
                let text = m.as_str();
                errors.push(ErrorRecord {
                    error_type: *error_type,
                    message: text.to_string(),
                    line_number: self.extract_line_number(text),
                    suggestion: suggestion_for(text).to_string(),
                });
            }
        }
        errors
    }

    fn extract_line_number(&self, text: &str) -> Option<u32> {
        self.line_number
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }
}

impl Default for ErrorExtractor {
    fn default() -> Self {
        Self::new()
    }
}

// keyword lookup on the matched text, independent of which pattern matched
fn suggestion_for(text: &str) -> &'static str {
    if text.contains("ImportError") {
        "Check if the required package is installed and accessible"
    } else if text.contains("SyntaxError") {
        "Review the code syntax at the indicated line"
    } else if text.contains("TypeError") {
        "Verify the data types of the variables being used"
    } else {
        "Review the error message and surrounding code context"
    }
}
