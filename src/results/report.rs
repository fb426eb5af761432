//! JSON report persistence
//!
//! Serializes the run summary to a report file. Unlike command and category
//! failures, a report that cannot be written is fatal to the whole run.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

use crate::models::Summary;

/// Report persistence failures
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to create report file {path}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize report to {path}: {source}")]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Writes run summaries to a JSON report file
pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Persist the summary as pretty-printed JSON
    pub fn write(&self, summary: &Summary) -> Result<(), ReportError> {
        let file = File::create(&self.path).map_err(|source| ReportError::Create {
            path: self.path.clone(),
            source,
        })?;

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, summary).map_err(|source| ReportError::Serialize {
            path: self.path.clone(),
            source,
        })?;

        info!("Report written to {}", self.path.display());
        Ok(())
    }
}
