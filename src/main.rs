//! polytest - Multi-language Test Suite Orchestrator
//!
//! A CLI tool that runs the Go, Java (Maven), and Python (pytest) test
//! suites of the podinfo repository, aggregates every command outcome into
//! a single summary, writes a JSON report, and prints a digest.
//!
//! ## Usage
//!
//! ```bash
//! # Run all six categories
//! polytest
//!
//! # Only the Go suites, with a shorter per-command timeout
//! polytest --go-only --timeout 120
//!
//! # Only the security scanners, report to a custom path
//! polytest --security-only --output security_report.json
//! ```
//!
//! Exit code is 0 when the overall pass rate clears the acceptable
//! threshold (80% by default), 1 otherwise. A report that cannot be
//! written is fatal regardless of the pass rate.

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

mod categories;
mod cli;
mod config;
mod executor;
mod models;
mod output;
mod results;
mod utils;

use cli::Args;
use config::{EnvConfig, OrchestratorConfig};
use executor::Orchestrator;
use output::{OutputFormat, ResultFormatter};
use results::{extract_total_coverage, ReportWriter};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let env = EnvConfig::load();

    utils::init(args.verbose || env.verbose.unwrap_or(false));

    let mut config = OrchestratorConfig::default().with_env(&env);
    if let Some(concurrent) = args.concurrent {
        config.max_concurrent = concurrent;
    }
    if let Some(timeout) = args.timeout {
        config.timeout_secs = timeout;
    }
    if let Some(output) = &args.output {
        config.report_path = output.clone();
    }
    if let Some(root) = &args.project_root {
        config.project_root = root.clone();
    }

    let format = args
        .format
        .as_deref()
        .or(env.format.as_deref())
        .and_then(OutputFormat::from_str)
        .unwrap_or_default();

    let specs = args.filter().specs();
    let names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
    info!("Categories: {}", names.join(", "));

    let orchestrator = Orchestrator::new(config.clone());
    let summary = orchestrator.run_all(specs).await;

    if let Some(unit) = summary.per_category.get("unit") {
        if let Some(coverage) = unit
            .results
            .iter()
            .rev()
            .find_map(|r| extract_total_coverage(&r.stdout))
        {
            info!("Go statement coverage: {coverage:.1}%");
        }
    }

    let formatter = ResultFormatter::new(format);
    println!("{}", formatter.format_summary(&summary));

    // The one fatal failure mode: a run without a report is worse than a
    // failed run with one.
    ReportWriter::new(&config.report_path).write(&summary)?;

    if !summary.is_acceptable(config.acceptable_threshold) {
        warn!(
            "Pass rate {:.1}% is below the acceptable threshold of {:.1}%",
            summary.success_rate_percent, config.acceptable_threshold
        );
        std::process::exit(1);
    }

    Ok(())
}
