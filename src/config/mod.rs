//! Configuration module
//!
//! Holds the orchestrator's tunable settings and their defaults, with
//! environment-variable overrides.

#![allow(dead_code)]

mod env;

pub use env::EnvConfig;

use std::path::PathBuf;

/// Default worker-pool capacity (concurrent categories)
pub const DEFAULT_MAX_CONCURRENT: usize = 4;

/// Pass-rate percentage at or above which a run is acceptable
pub const ACCEPTABLE_PASS_RATE: f64 = 80.0;

/// Default per-command wall-clock timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Default report file name
pub const DEFAULT_REPORT_FILE: &str = "test_report.json";

/// Orchestrator configuration
#[derive(Clone, Debug)]
pub struct OrchestratorConfig {
    /// Maximum number of categories running concurrently
    pub max_concurrent: usize,
    /// Per-command timeout in seconds
    pub timeout_secs: u64,
    /// Pass-rate threshold for an acceptable run
    pub acceptable_threshold: f64,
    /// Working directory for all subcommands
    pub project_root: PathBuf,
    /// Go toolchain root; `<go_root>/bin` is prepended to PATH and GOROOT is set
    pub go_root: Option<PathBuf>,
    /// Report output path
    pub report_path: PathBuf,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            acceptable_threshold: ACCEPTABLE_PASS_RATE,
            project_root: PathBuf::from("."),
            go_root: None,
            report_path: PathBuf::from(DEFAULT_REPORT_FILE),
        }
    }
}

impl OrchestratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply environment-variable overrides on top of the current values
    pub fn with_env(mut self, env: &EnvConfig) -> Self {
        if let Some(concurrent) = env.concurrent {
            self.max_concurrent = concurrent;
        }
        if let Some(timeout) = env.timeout {
            self.timeout_secs = timeout;
        }
        if let Some(threshold) = env.threshold {
            self.acceptable_threshold = threshold;
        }
        if let Some(root) = &env.project_root {
            self.project_root = PathBuf::from(root);
        }
        if let Some(go_root) = &env.go_root {
            self.go_root = Some(PathBuf::from(go_root));
        }
        if let Some(report) = &env.report {
            self.report_path = PathBuf::from(report);
        }
        self
    }

    pub fn max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    pub fn timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = root.into();
        self
    }

    pub fn go_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.go_root = Some(root.into());
        self
    }

    pub fn report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_preserve_reference_constants() {
        let config = OrchestratorConfig::default();
        assert_eq!(config.max_concurrent, 4);
        assert_eq!(config.acceptable_threshold, 80.0);
        assert_eq!(config.timeout_secs, 300);
        assert!(config.go_root.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let config = OrchestratorConfig::new()
            .max_concurrent(2)
            .timeout(30)
            .project_root("/tmp/project")
            .report_path("out.json");

        assert_eq!(config.max_concurrent, 2);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.project_root, PathBuf::from("/tmp/project"));
        assert_eq!(config.report_path, PathBuf::from("out.json"));
    }

    #[test]
    fn test_env_overrides_apply() {
        let env = EnvConfig {
            concurrent: Some(8),
            timeout: Some(60),
            threshold: Some(90.0),
            ..EnvConfig::default()
        };

        let config = OrchestratorConfig::default().with_env(&env);
        assert_eq!(config.max_concurrent, 8);
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.acceptable_threshold, 90.0);
    }
}
