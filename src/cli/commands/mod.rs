//! CLI command implementations.

pub mod close_issues;
pub mod create_tasks;
