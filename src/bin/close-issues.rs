//! `close-issues` entry point.

use clap::Parser;

use tracker_sync::cli::commands::close_issues;
use tracker_sync::cli::{self, CloseIssuesCli};
use tracker_sync::domain::catalog::{CLOSE_TARGETS, COMPLETED_COMMENT};
use tracker_sync::infrastructure::logging::LoggerImpl;

#[tokio::main]
async fn main() {
    CloseIssuesCli::parse();

    let Some(config) = cli::load_config() else {
        return;
    };

    let _logger = LoggerImpl::init(&config.logging)
        .map_err(|err| eprintln!("Logging disabled: {err:#}"))
        .ok();

    if let Err(err) = close_issues::execute(config, CLOSE_TARGETS, Some(COMPLETED_COMMENT)).await {
        cli::handle_error(err);
    }
}
