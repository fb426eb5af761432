//! Results persistence and post-processing
//!
//! Writes the run summary to the JSON report file and extracts the Go
//! coverage figure for the digest.

mod coverage;
mod report;

pub use coverage::extract_total_coverage;
pub use report::{ReportError, ReportWriter};
