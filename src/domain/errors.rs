//! Domain errors for catalog construction, task selection and remote calls.

use thiserror::Error;

/// Errors raised while building a compiled-in catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate label name in catalog: {0}")]
    DuplicateLabel(String),

    #[error("Duplicate task id in catalog: {0}")]
    DuplicateTaskId(String),
}

/// Errors raised while resolving which tasks to create.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// Neither the command line nor the configuration named any task.
    #[error("No task ids given. Usage: create-tasks <TASK_ID>...\nAvailable tasks: {}", .known.join(", "))]
    NothingSelected { known: Vec<String> },
}

/// Errors returned by an [`IssueTracker`](super::ports::IssueTracker) call.
///
/// Every variant is an expected outcome of talking to a remote service; the
/// synchronization flows report them and move on to the next item.
#[derive(Debug, Error)]
pub enum GitHubApiError {
    /// Transport failure: DNS, TLS, connection reset, timeout
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with an unexpected status code
    #[error("HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The body was readable but lacked a field the caller needs
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// GraphQL reported errors alongside (or instead of) data
    #[error("GraphQL error: {0}")]
    GraphQl(String),

    /// The request could not be built from local settings
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A request URL could not be built from the configured base URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl GitHubApiError {
    /// Status code when the service rejected the call.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Short description for a one-line status message: the status code when
    /// there is one, the full error otherwise.
    pub fn summary(&self) -> String {
        self.status()
            .map_or_else(|| self.to_string(), |status| status.to_string())
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

pub type TrackerResult<T> = Result<T, GitHubApiError>;
