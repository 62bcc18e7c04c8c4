pub mod config;
pub mod issue;
pub mod label;
pub mod task;

pub use config::{
    Config, GitHubConfig, LogFormat, LoggingConfig, ProjectConfig, SelectionConfig,
    ThrottleConfig, DEFAULT_ISSUE_DELAY_MS, DEFAULT_LABEL_DELAY_MS,
};
pub use issue::{CloseTarget, CreatedIssue, ProjectBoard};
pub use label::{LabelDefinition, LabelSyncAction};
pub use task::{Category, Priority, Size, Sprint, TaskDefinition, TaskType};
