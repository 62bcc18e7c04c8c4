use async_trait::async_trait;

use crate::domain::errors::TrackerResult;
use crate::domain::models::{CreatedIssue, LabelDefinition, LabelSyncAction, ProjectBoard};

/// Remote issue tracker operations used by the synchronization flows.
///
/// Implementations perform exactly one attempt per call and report every
/// failure through the returned error; they never retry.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Create a label, or update it in place when it already exists.
    async fn create_or_update_label(&self, label: &LabelDefinition)
        -> TrackerResult<LabelSyncAction>;

    /// Open a new issue with the given labels.
    async fn create_issue(
        &self,
        title: &str,
        body: &str,
        labels: &[String],
    ) -> TrackerResult<CreatedIssue>;

    /// Post a comment on an existing issue.
    async fn add_comment(&self, issue_number: u64, body: &str) -> TrackerResult<()>;

    /// Transition an issue to the closed state.
    async fn close_issue(&self, issue_number: u64) -> TrackerResult<()>;

    /// Create a project board owned by the repository owner.
    async fn create_project_board(&self, title: &str) -> TrackerResult<ProjectBoard>;
}
