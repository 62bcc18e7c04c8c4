//! Best-effort project board creation.

use std::sync::Arc;
use tracing::warn;

use super::status;
use crate::domain::models::ProjectBoard;
use crate::domain::ports::IssueTracker;

/// Creates the run's project board. A failure is printed and otherwise
/// ignored; nothing is rolled back if only part of the GraphQL exchange
/// succeeded.
pub struct ProjectBoardCreator {
    tracker: Arc<dyn IssueTracker>,
}

impl ProjectBoardCreator {
    pub fn new(tracker: Arc<dyn IssueTracker>) -> Self {
        Self { tracker }
    }

    pub async fn create(&self, title: &str) -> Option<ProjectBoard> {
        match self.tracker.create_project_board(title).await {
            Ok(board) => {
                status::success(format!("Created project board: {}", board.title));
                println!("  URL: {}", board.url);
                Some(board)
            }
            Err(err) => {
                warn!(error = %err, "Project board creation failed");
                status::failure("create project", &err);
                None
            }
        }
    }
}
