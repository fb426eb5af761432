//! CLI argument parsing
//!
//! Defines command-line interface using clap. Options left unset fall back
//! to `POLYTEST_*` environment variables, then to the built-in defaults.

use std::path::PathBuf;

use clap::Parser;

use crate::categories::CategoryFilter;

/// Multi-language test suite orchestrator
#[derive(Parser, Debug)]
#[command(name = "polytest")]
#[command(version)]
#[command(about = "Run the Go, Java, and Python test suites and aggregate the results")]
#[command(long_about = None)]
pub struct Args {
    /// Run only the Go test categories (unit, integration, performance)
    #[arg(long, group = "selector")]
    pub go_only: bool,

    /// Run only the Java/Maven coverage suite
    #[arg(long, group = "selector")]
    pub java_only: bool,

    /// Run only the pytest cross-component suite
    #[arg(long, group = "selector")]
    pub python_only: bool,

    /// Run only the performance category
    #[arg(long, group = "selector")]
    pub performance_only: bool,

    /// Run only the integration category
    #[arg(long, group = "selector")]
    pub integration_only: bool,

    /// Run only the security scanners
    #[arg(long, group = "selector")]
    pub security_only: bool,

    /// Number of categories run concurrently [default: 4]
    #[arg(short, long)]
    pub concurrent: Option<usize>,

    /// Per-command timeout in seconds [default: 300]
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Report output path [default: test_report.json]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (table, json, json-pretty, summary) [default: table]
    #[arg(short, long)]
    pub format: Option<String>,

    /// Project root in which subcommands run [default: current directory]
    #[arg(long)]
    pub project_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Resolve the selector flags to a category filter
    pub fn filter(&self) -> CategoryFilter {
        if self.go_only {
            CategoryFilter::GoOnly
        } else if self.java_only {
            CategoryFilter::JavaOnly
        } else if self.python_only {
            CategoryFilter::PythonOnly
        } else if self.performance_only {
            CategoryFilter::PerformanceOnly
        } else if self.integration_only {
            CategoryFilter::IntegrationOnly
        } else if self.security_only {
            CategoryFilter::SecurityOnly
        } else {
            CategoryFilter::All
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flag_selects_all() {
        let args = Args::parse_from(["polytest"]);
        assert_eq!(args.filter(), CategoryFilter::All);
        assert!(args.concurrent.is_none());
        assert!(args.timeout.is_none());
        assert!(args.output.is_none());
    }

    #[test]
    fn test_selector_flags() {
        let args = Args::parse_from(["polytest", "--go-only"]);
        assert_eq!(args.filter(), CategoryFilter::GoOnly);

        let args = Args::parse_from(["polytest", "--security-only"]);
        assert_eq!(args.filter(), CategoryFilter::SecurityOnly);
    }

    #[test]
    fn test_selector_flags_are_mutually_exclusive() {
        let parsed = Args::try_parse_from(["polytest", "--go-only", "--java-only"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "polytest",
            "--concurrent",
            "2",
            "--timeout",
            "60",
            "--output",
            "custom.json",
        ]);
        assert_eq!(args.concurrent, Some(2));
        assert_eq!(args.timeout, Some(60));
        assert_eq!(args.output, Some(PathBuf::from("custom.json")));
    }
}
