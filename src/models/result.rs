//! Result models for test suite orchestration
//!
//! Defines the outcome records produced by command execution and the
//! aggregated run summary.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Outcome of a single external command invocation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CommandResult {
    /// The command line that was executed
    pub command: String,
    /// Whether the command exited with status zero
    pub succeeded: bool,
    /// Process exit code; -1 for timeouts and launch failures
    pub exit_code: i32,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
    /// Wall-clock duration in milliseconds
    pub duration_ms: u64,
}

impl CommandResult {
    /// Result from a command that ran to completion
    pub fn completed(
        command: impl Into<String>,
        exit_code: i32,
        stdout: String,
        stderr: String,
        duration_ms: u64,
    ) -> Self {
        Self {
            command: command.into(),
            succeeded: exit_code == 0,
            exit_code,
            stdout,
            stderr,
            duration_ms,
        }
    }

    /// Result for a command that exceeded its wall-clock budget
    pub fn timed_out(command: impl Into<String>, timeout_secs: u64, duration_ms: u64) -> Self {
        Self {
            command: command.into(),
            succeeded: false,
            exit_code: -1,
            stdout: String::new(),
            stderr: format!("Command timed out after {timeout_secs} seconds"),
            duration_ms,
        }
    }

    /// Result for a command that could not be started at all
    pub fn launch_failed(command: impl Into<String>, error: impl fmt::Display) -> Self {
        Self {
            command: command.into(),
            succeeded: false,
            exit_code: -1,
            stdout: String::new(),
            stderr: error.to_string(),
            duration_ms: 0,
        }
    }

    pub fn symbol(&self) -> &'static str {
        if self.succeeded {
            "✓"
        } else {
            "✗"
        }
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [exit {}] [{}ms]",
            self.symbol(),
            self.command,
            self.exit_code,
            self.duration_ms
        )
    }
}

/// Outcomes of one category's sequential subcommand chain
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CategoryResult {
    /// Category name ("unit", "integration", ...)
    pub category: String,
    /// Subcommand results in execution order
    pub results: Vec<CommandResult>,
}

impl CategoryResult {
    pub fn new(category: impl Into<String>, results: Vec<CommandResult>) -> Self {
        Self {
            category: category.into(),
            results,
        }
    }

    /// Empty result set for a category that crashed before producing output
    pub fn empty(category: impl Into<String>) -> Self {
        Self::new(category, Vec::new())
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.succeeded).count()
    }

    pub fn failed(&self) -> usize {
        self.results.iter().filter(|r| !r.succeeded).count()
    }
}

impl fmt::Display for CategoryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}/{} passed",
            self.category,
            self.passed(),
            self.results.len()
        )
    }
}

/// Flattened pass/fail counts across every command in the run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

/// Aggregated outcome of a full orchestration run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Summary {
    /// Completion timestamp
    pub timestamp: DateTime<Utc>,
    /// Total wall-clock duration of the run in seconds
    pub total_duration_seconds: f64,
    /// Per-category raw results, keyed by category name
    pub per_category: BTreeMap<String, CategoryResult>,
    /// Flattened command counts
    pub totals: Totals,
    /// Percentage of commands that passed; 0 when nothing ran
    pub success_rate_percent: f64,
}

impl Summary {
    /// Build a summary from collected category results.
    ///
    /// Counts and the success rate are derived here so the invariant
    /// `totals.total == passed + failed` holds by construction.
    pub fn new(
        timestamp: DateTime<Utc>,
        total_duration_seconds: f64,
        per_category: BTreeMap<String, CategoryResult>,
    ) -> Self {
        let total = per_category.values().map(|c| c.results.len()).sum();
        let passed = per_category.values().map(CategoryResult::passed).sum();
        let failed = total - passed;

        let success_rate_percent = if total == 0 {
            0.0
        } else {
            (passed as f64 / total as f64) * 100.0
        };

        Self {
            timestamp,
            total_duration_seconds,
            per_category,
            totals: Totals {
                total,
                passed,
                failed,
            },
            success_rate_percent,
        }
    }

    /// Whether the run clears the given pass-rate threshold
    pub fn is_acceptable(&self, threshold_percent: f64) -> bool {
        self.success_rate_percent >= threshold_percent
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Test Run Summary")?;
        writeln!(f, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        for category in self.per_category.values() {
            writeln!(f, "  {category}")?;
        }
        writeln!(f, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        writeln!(
            f,
            "Total: {} | Pass: {} | Fail: {}",
            self.totals.total, self.totals.passed, self.totals.failed
        )?;
        writeln!(
            f,
            "Success Rate: {:.1}% | Duration: {:.1}s",
            self.success_rate_percent, self.total_duration_seconds
        )
    }
}
