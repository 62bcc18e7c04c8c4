//! Closing issues with an explanatory comment.

use std::sync::Arc;
use tracing::info;

use super::status;
use crate::domain::models::CloseTarget;
use crate::domain::ports::IssueTracker;

/// Per-run tallies for the closer flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloseReport {
    pub comments_posted: usize,
    pub closed: Vec<u64>,
    pub failed: Vec<u64>,
}

impl CloseReport {
    pub fn attempted(&self) -> usize {
        self.closed.len() + self.failed.len()
    }
}

/// Outcome of processing one issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseOutcome {
    /// `None` when no comment was supplied
    pub commented: Option<bool>,
    pub closed: bool,
}

pub struct IssueCloser {
    tracker: Arc<dyn IssueTracker>,
}

impl IssueCloser {
    pub fn new(tracker: Arc<dyn IssueTracker>) -> Self {
        Self { tracker }
    }

    /// Comment on the issue (when a comment is given) and then close it. The
    /// close is attempted whatever happened to the comment.
    pub async fn close(&self, issue_number: u64, comment: Option<&str>) -> CloseOutcome {
        let commented = match comment {
            Some(body) => Some(match self.tracker.add_comment(issue_number, body).await {
                Ok(()) => {
                    status::success(format!("Added comment to issue #{issue_number}"));
                    true
                }
                Err(err) => {
                    status::failure(format!("comment on issue #{issue_number}"), &err);
                    false
                }
            }),
            None => None,
        };

        let closed = match self.tracker.close_issue(issue_number).await {
            Ok(()) => {
                status::success(format!("Closed issue #{issue_number}"));
                true
            }
            Err(err) => {
                status::failure(format!("close issue #{issue_number}"), &err);
                false
            }
        };

        CloseOutcome { commented, closed }
    }

    /// Process every target in order.
    pub async fn close_all(&self, targets: &[CloseTarget], comment: Option<&str>) -> CloseReport {
        let mut report = CloseReport::default();

        for target in targets {
            println!("Processing {}", target.headline());
            let outcome = self.close(target.number, comment).await;
            if outcome.commented == Some(true) {
                report.comments_posted += 1;
            }
            if outcome.closed {
                report.closed.push(target.number);
            } else {
                report.failed.push(target.number);
            }
            println!();
        }

        info!(
            closed = report.closed.len(),
            failed = report.failed.len(),
            "Issue closing finished"
        );
        report
    }
}
