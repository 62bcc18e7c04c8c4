//! Runtime issue and project-board records.

use serde::{Deserialize, Serialize};

/// An issue the tracker reported as created during this run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedIssue {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub html_url: String,
}

/// An existing issue the closer flow should comment on and close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CloseTarget {
    pub number: u64,
    /// Catalog id of the task the issue was opened for
    pub task_id: &'static str,
    pub title: &'static str,
}

impl CloseTarget {
    /// One-line description used in progress output.
    pub fn headline(&self) -> String {
        format!("Issue #{}: [{}] {}", self.number, self.task_id, self.title)
    }
}

/// A project board created through the GraphQL API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectBoard {
    pub id: String,
    pub number: u64,
    pub title: String,
    pub url: String,
}
