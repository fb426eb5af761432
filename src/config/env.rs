//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

use std::env;
use std::str::FromStr;

/// Environment variable prefix
const ENV_PREFIX: &str = "POLYTEST";

/// Configuration values read from the environment
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// Worker-pool capacity from POLYTEST_CONCURRENT
    pub concurrent: Option<usize>,
    /// Per-command timeout from POLYTEST_TIMEOUT
    pub timeout: Option<u64>,
    /// Acceptable pass-rate threshold from POLYTEST_THRESHOLD
    pub threshold: Option<f64>,
    /// Report path from POLYTEST_REPORT
    pub report: Option<String>,
    /// Project root from POLYTEST_PROJECT_ROOT
    pub project_root: Option<String>,
    /// Go toolchain root from POLYTEST_GO_ROOT
    pub go_root: Option<String>,
    /// Output format from POLYTEST_FORMAT
    pub format: Option<String>,
    /// Verbose logging from POLYTEST_VERBOSE
    pub verbose: Option<bool>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self {
            concurrent: get_env_parse("CONCURRENT"),
            timeout: get_env_parse("TIMEOUT"),
            threshold: get_env_parse("THRESHOLD"),
            report: get_env("REPORT"),
            project_root: get_env("PROJECT_ROOT"),
            go_root: get_env("GO_ROOT"),
            format: get_env("FORMAT"),
            verbose: get_env_bool("VERBOSE"),
        }
    }
}

/// Get environment variable with prefix
fn get_env(name: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}_{name}")).ok()
}

/// Get and parse environment variable with prefix
fn get_env_parse<T: FromStr>(name: &str) -> Option<T> {
    get_env(name).and_then(|v| parse_value(&v))
}

/// Get boolean environment variable with prefix
fn get_env_bool(name: &str) -> Option<bool> {
    get_env(name).map(|v| parse_bool(&v))
}

fn parse_value<T: FromStr>(value: &str) -> Option<T> {
    value.trim().parse().ok()
}

fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}
