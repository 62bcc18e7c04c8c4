//! Issue creation for selected catalog tasks.

use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use super::{pause, status};
use crate::domain::errors::GitHubApiError;
use crate::domain::models::{CreatedIssue, TaskDefinition};
use crate::domain::ports::IssueTracker;

/// Opens one issue per task, pausing between calls.
pub struct IssueCreator {
    tracker: Arc<dyn IssueTracker>,
    delay: Duration,
}

impl IssueCreator {
    pub fn new(tracker: Arc<dyn IssueTracker>, delay: Duration) -> Self {
        Self { tracker, delay }
    }

    /// Open the issue for one task. Returns `None` on any failure, after
    /// printing the status code and response body.
    pub async fn create_for_task(&self, task: &TaskDefinition) -> Option<CreatedIssue> {
        let title = task.issue_title();
        let labels = task.issue_labels();

        match self
            .tracker
            .create_issue(&title, task.description, &labels)
            .await
        {
            Ok(issue) => {
                status::success(format!("Created issue #{}: {}", issue.number, title));
                Some(issue)
            }
            Err(err) => {
                status::failure(format!("create issue {title}"), &err);
                if let GitHubApiError::Rejected { body, .. } = &err {
                    println!("  Response: {body}");
                }
                None
            }
        }
    }

    /// Open issues for `tasks` in order, collecting the ones that succeed.
    pub async fn create_all(&self, tasks: &[TaskDefinition]) -> Vec<CreatedIssue> {
        let mut created = Vec::with_capacity(tasks.len());

        for (position, task) in tasks.iter().enumerate() {
            if position > 0 {
                pause(self.delay).await;
            }
            if let Some(issue) = self.create_for_task(task).await {
                created.push(issue);
            }
        }

        info!(
            requested = tasks.len(),
            created = created.len(),
            "Issue creation finished"
        );
        created
    }
}
