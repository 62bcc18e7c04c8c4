use serde::{Deserialize, Serialize};

/// Delay between label pushes, in milliseconds.
pub const DEFAULT_LABEL_DELAY_MS: u64 = 200;

/// Delay between issue creations, in milliseconds.
pub const DEFAULT_ISSUE_DELAY_MS: u64 = 500;

/// Main configuration structure for tracker-sync
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Remote repository and API endpoints
    #[serde(default)]
    pub github: GitHubConfig,

    /// Courtesy delays between remote calls
    #[serde(default)]
    pub throttle: ThrottleConfig,

    /// Which tasks to create when none are named on the command line
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Project board creation
    #[serde(default)]
    pub project: ProjectConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// GitHub repository and endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GitHubConfig {
    /// Personal access token (`GITHUB_TOKEN`)
    #[serde(default)]
    pub token: Option<String>,

    /// Account or organization owning the repository (`GITHUB_OWNER`)
    #[serde(default)]
    pub owner: Option<String>,

    /// Repository name (`GITHUB_REPO`)
    #[serde(default = "default_repo")]
    pub repo: String,

    /// REST API base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// GraphQL endpoint URL
    #[serde(default = "default_graphql_url")]
    pub graphql_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_repo() -> String {
    "devmet-app".to_string()
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_graphql_url() -> String {
    "https://api.github.com/graphql".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            token: None,
            owner: None,
            repo: default_repo(),
            api_url: default_api_url(),
            graphql_url: default_graphql_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Fixed inter-call delays.
///
/// These are a courtesy throttle, not an adaptive limiter; rate-limit response
/// headers are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ThrottleConfig {
    #[serde(default = "default_label_delay_ms")]
    pub label_delay_ms: u64,

    #[serde(default = "default_issue_delay_ms")]
    pub issue_delay_ms: u64,
}

const fn default_label_delay_ms() -> u64 {
    DEFAULT_LABEL_DELAY_MS
}

const fn default_issue_delay_ms() -> u64 {
    DEFAULT_ISSUE_DELAY_MS
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            label_delay_ms: default_label_delay_ms(),
            issue_delay_ms: default_issue_delay_ms(),
        }
    }
}

/// Task selection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SelectionConfig {
    /// Task ids created when the command line names none
    #[serde(default = "default_task_ids")]
    pub default_task_ids: Vec<String>,
}

fn default_task_ids() -> Vec<String> {
    ["TASK-007", "TASK-008", "TASK-009"]
        .iter()
        .map(ToString::to_string)
        .collect()
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            default_task_ids: default_task_ids(),
        }
    }
}

/// Project board configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProjectConfig {
    /// Create a project board after the issues
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Board title
    #[serde(default = "default_project_title")]
    pub title: String,
}

const fn default_true() -> bool {
    true
}

fn default_project_title() -> String {
    "DevMetrics Development".to_string()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            title: default_project_title(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format
    #[serde(default)]
    pub format: LogFormat,

    /// Directory for a log file in addition to stderr
    #[serde(default)]
    pub log_dir: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            log_dir: None,
        }
    }
}
