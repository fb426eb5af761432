//! Data models for test orchestration
//!
//! This module contains all data structures used throughout the application.

mod result;

pub use result::{CategoryResult, CommandResult, Summary, Totals};
