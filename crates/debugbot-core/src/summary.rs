// Log summarization
// Parse -> Extract errors -> Summarize, the whole log path of the pipeline

use crate::extractor::ErrorExtractor;
use crate::parser::{LogParseError, ParserRegistry};
use crate::{LogAnalysisResult, LogEntry, LogLevel, LogSummary, TimelineEvent};
use std::collections::BTreeMap;
use tracing::debug;

pub struct LogSummarizer;

impl LogSummarizer {
    /// Level histogram and error rate; every level is present even at 0
    pub fn summarize(entries: &[LogEntry]) -> LogSummary {
        let mut levels: BTreeMap<LogLevel, usize> =
            LogLevel::ALL.iter().map(|level| (*level, 0)).collect();
        for entry in entries {
            *levels.entry(entry.level).or_insert(0) += 1;
        }

        let total = entries.len();
        let errors = levels.get(&LogLevel::Error).copied().unwrap_or(0);
        let error_rate = if total == 0 {
            0.0
        } else {
            errors as f64 / total as f64
        };

        LogSummary {
            total_logs: total,
            level_distribution: levels,
            error_rate,
        }
    }

    /// Timestamped entries only, ascending.
    /// A string sort is enough because YYYY-MM-DD HH:MM:SS sorts lexicographically.
    pub fn timeline(entries: &[LogEntry]) -> Vec<TimelineEvent> {
        let mut timeline: Vec<TimelineEvent> = entries
            .iter()
            .filter_map(|entry| {
                entry.timestamp.as_ref().map(|time| TimelineEvent {
                    time: time.clone(),
                    event: entry.content.clone(),
                    level: entry.level,
                })
            })
            .collect();
        timeline.sort_by(|a, b| a.time.cmp(&b.time));
        timeline
    }
}

/// Runs the full log path for one request
pub struct LogAnalyzer {
    registry: ParserRegistry,
    extractor: ErrorExtractor,
}

impl LogAnalyzer {
    pub fn new() -> Self {
        Self {
            registry: ParserRegistry::with_defaults(),
            extractor: ErrorExtractor::new(),
        }
    }

    pub fn with_registry(registry: ParserRegistry) -> Self {
        Self {
            registry,
            extractor: ErrorExtractor::new(),
        }
    }

    pub fn parse(&self, format: &str, logs: &str) -> Result<Vec<LogEntry>, LogParseError> {
        self.registry.parse(format, logs)
    }

    pub fn analyze(&self, format: &str, logs: &str) -> Result<LogAnalysisResult, LogParseError> {
        let entries = self.registry.parse(format, logs)?;
        let errors = self.extractor.extract(logs);

        debug!(
            log_format = %format,
            entries = entries.len(),
            errors = errors.len(),
            "Logs analyzed"
        );

        Ok(LogAnalysisResult {
            total_entries: entries.len(),
            error_count: errors.len(),
            errors,
            timeline: LogSummarizer::timeline(&entries),
            summary: LogSummarizer::summarize(&entries),
        })
    }
}

impl Default for LogAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(timestamp: Option<&str>, level: LogLevel) -> LogEntry {
        LogEntry {
            timestamp: timestamp.map(str::to_string),
            content: format!("{:?}", level),
            level,
        }
    }

    #[test]
    fn test_empty_summary_has_zero_rate() {
        let summary = LogSummarizer::summarize(&[]);
        assert_eq!(summary.total_logs, 0);
        assert_eq!(summary.error_rate, 0.0);
        assert_eq!(summary.level_distribution.len(), 4);
        assert!(summary.level_distribution.values().all(|c| *c == 0));
    }

    #[test]
    fn test_error_rate() {
        let entries = vec![
            entry(None, LogLevel::Error),
            entry(None, LogLevel::Info),
            entry(None, LogLevel::Info),
            entry(None, LogLevel::Warning),
        ];
        let summary = LogSummarizer::summarize(&entries);
        assert_eq!(summary.error_rate, 0.25);
        assert_eq!(summary.level_distribution[&LogLevel::Info], 2);
        assert_eq!(summary.level_distribution[&LogLevel::Unknown], 0);
    }

    #[test]
    fn test_timeline_sorted_and_filtered() {
        let entries = vec![
            entry(Some("2024-02-08 10:30:05"), LogLevel::Error),
            entry(None, LogLevel::Info),
            entry(Some("2024-02-08 09:00:00"), LogLevel::Info),
        ];
        let timeline = LogSummarizer::timeline(&entries);
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0].time, "2024-02-08 09:00:00");
        assert_eq!(timeline[1].level, LogLevel::Error);
    }
}
