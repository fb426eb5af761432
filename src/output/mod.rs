//! Output formatting module
//!
//! Provides various output formats for run summaries.

mod formatter;

pub use formatter::{OutputFormat, ResultFormatter};
