//! Test execution engine
//!
//! Provides single-command execution and the concurrent category orchestrator.

mod command;
mod orchestrator;

pub use command::run_command;
pub use orchestrator::Orchestrator;
