//! Command-line surface for the two binaries.
//!
//! `create-tasks [TASK_ID]...` syncs labels, opens issues and creates the
//! project board. `close-issues` comments on and closes the fixed list of
//! duplicate issues. Neither takes flags beyond `--help` and `--version`.

pub mod commands;
pub mod output;

use clap::Parser;
use console::style;

use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;

/// Create GitHub labels, issues and a project board from the task catalog
#[derive(Parser, Debug)]
#[command(name = "create-tasks", version, about)]
pub struct CreateTasksCli {
    #[command(flatten)]
    pub args: commands::create_tasks::CreateTasksArgs,
}

/// Comment on and close issues opened for already completed tasks
#[derive(Parser, Debug)]
#[command(name = "close-issues", version, about)]
pub struct CloseIssuesCli {}

/// Print a configuration or startup problem.
pub fn print_error(message: impl std::fmt::Display) {
    println!("{} ERROR: {message}", style("\u{274c}").red());
}

/// Load configuration, printing the problem and returning `None` when it
/// cannot be loaded.
pub fn load_config() -> Option<Config> {
    match ConfigLoader::load() {
        Ok(config) => Some(config),
        Err(err) => {
            print_error(format!("{err:#}"));
            None
        }
    }
}

/// Report an unexpected failure and exit non-zero.
pub fn handle_error(err: anyhow::Error) -> ! {
    tracing::error!(error = %format!("{err:#}"), "Run aborted");
    print_error(format!("{err:#}"));
    std::process::exit(1);
}
