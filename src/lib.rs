//! tracker-sync - GitHub label and issue synchronization
//!
//! Pushes a compiled-in catalog of labels and sprint tasks to a GitHub
//! repository, and closes issues that duplicate finished work.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): catalog records, run results, the
//!   `IssueTracker` port
//! - **Service Layer** (`services`): label sync, issue creation, project
//!   board creation and issue closing, all fail-soft
//! - **Infrastructure Layer** (`infrastructure`): reqwest GitHub client,
//!   figment configuration, credentials, tracing setup
//! - **CLI Layer** (`cli`): argument parsing and command executors for the
//!   `create-tasks` and `close-issues` binaries
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use tracker_sync::cli::commands::create_tasks;
//! use tracker_sync::infrastructure::config::ConfigLoader;
//! use tracker_sync::infrastructure::credentials::GitHubCredentials;
//! use tracker_sync::infrastructure::github::{GitHubClient, GitHubClientConfig};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ConfigLoader::load()?;
//! let credentials = GitHubCredentials::from_config(&config)?;
//! let client = GitHubClient::new(GitHubClientConfig::new(credentials, &config.github))?;
//! let ids = vec!["TASK-007".to_string()];
//! create_tasks::run(Arc::new(client), &ids, &config).await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::catalog::{LabelCatalog, TaskCatalog};
pub use domain::errors::{CatalogError, GitHubApiError, SelectionError};
pub use domain::models::{
    CloseTarget, Config, CreatedIssue, LabelDefinition, ProjectBoard, TaskDefinition,
};
pub use domain::ports::IssueTracker;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::github::GitHubClient;
