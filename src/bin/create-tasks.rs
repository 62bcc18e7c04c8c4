//! `create-tasks` entry point.

use clap::Parser;

use tracker_sync::cli::commands::create_tasks;
use tracker_sync::cli::{self, CreateTasksCli};
use tracker_sync::infrastructure::logging::LoggerImpl;

#[tokio::main]
async fn main() {
    let args = CreateTasksCli::parse().args;

    let Some(config) = cli::load_config() else {
        return;
    };

    let _logger = LoggerImpl::init(&config.logging)
        .map_err(|err| eprintln!("Logging disabled: {err:#}"))
        .ok();

    if let Err(err) = create_tasks::execute(args, config).await {
        cli::handle_error(err);
    }
}
