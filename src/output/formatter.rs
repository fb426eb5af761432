//! Output formatters for run summaries
//!
//! Provides JSON, table, and short-summary output formats.

use std::fmt::Write;

use crate::models::Summary;

/// Output format options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    JsonPretty,
    Summary,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "json-pretty" | "jsonpretty" => Some(OutputFormat::JsonPretty),
            "summary" => Some(OutputFormat::Summary),
            _ => None,
        }
    }
}

/// Summary formatter
pub struct ResultFormatter {
    format: OutputFormat,
}

impl ResultFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Format a full run summary
    pub fn format_summary(&self, summary: &Summary) -> String {
        match self.format {
            OutputFormat::Table => self.format_summary_table(summary),
            OutputFormat::Json => serde_json::to_string(summary).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(summary).unwrap_or_default(),
            OutputFormat::Summary => self.format_summary_short(summary),
        }
    }

    fn format_summary_table(&self, summary: &Summary) -> String {
        let mut output = String::new();

        writeln!(output, "\n{:═^68}", " Test Run Summary ").unwrap();
        writeln!(
            output,
            "{:<20} {:>8} {:>8} {:>8}",
            "Category", "Total", "Pass", "Fail"
        )
        .unwrap();
        writeln!(output, "{:─<68}", "").unwrap();

        for category in summary.per_category.values() {
            writeln!(
                output,
                "{:<20} {:>8} {:>8} {:>8}",
                category.category,
                category.results.len(),
                category.passed(),
                category.failed()
            )
            .unwrap();

            for result in category.results.iter().filter(|r| !r.succeeded) {
                writeln!(output, "    {} {}", result.symbol(), result.command).unwrap();
            }
        }

        writeln!(output, "{:─<68}", "").unwrap();
        writeln!(
            output,
            "Total: {} | Pass: {} | Fail: {} | Success Rate: {:.1}%",
            summary.totals.total,
            summary.totals.passed,
            summary.totals.failed,
            summary.success_rate_percent
        )
        .unwrap();
        writeln!(
            output,
            "Duration: {:.1}s | Completed: {}",
            summary.total_duration_seconds,
            summary.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )
        .unwrap();

        output
    }

    fn format_summary_short(&self, summary: &Summary) -> String {
        format!(
            "{}/{} passed ({:.1}%) in {:.1}s",
            summary.totals.passed,
            summary.totals.total,
            summary.success_rate_percent,
            summary.total_duration_seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryResult, CommandResult};
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn sample_summary() -> Summary {
        let mut per_category = BTreeMap::new();
        per_category.insert(
            "unit".to_string(),
            CategoryResult::new(
                "unit",
                vec![
                    CommandResult::completed("true", 0, String::new(), String::new(), 5),
                    CommandResult::completed("false", 1, String::new(), String::new(), 5),
                ],
            ),
        );
        Summary::new(Utc::now(), 1.0, per_category)
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("table"), Some(OutputFormat::Table));
        assert_eq!(
            OutputFormat::from_str("JSON-Pretty"),
            Some(OutputFormat::JsonPretty)
        );
        assert_eq!(OutputFormat::from_str("csv"), None);
    }

    #[test]
    fn test_table_lists_counts_and_failures() {
        let formatter = ResultFormatter::new(OutputFormat::Table);
        let output = formatter.format_summary(&sample_summary());
        assert!(output.contains("unit"));
        assert!(output.contains("Success Rate: 50.0%"));
        assert!(output.contains("✗ false"));
    }

    #[test]
    fn test_json_output_is_valid() {
        let formatter = ResultFormatter::new(OutputFormat::Json);
        let output = formatter.format_summary(&sample_summary());
        let parsed: Summary = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.totals.total, 2);
    }

    #[test]
    fn test_short_summary() {
        let formatter = ResultFormatter::new(OutputFormat::Summary);
        let output = formatter.format_summary(&sample_summary());
        assert_eq!(output, "1/2 passed (50.0%) in 1.0s");
    }
}
