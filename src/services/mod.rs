//! Synchronization services
//!
//! Each service drives one flow against an [`IssueTracker`](crate::domain::ports::IssueTracker)
//! and applies the fail-soft policy: a remote failure becomes a printed
//! status line and an empty result, and the flow moves on.

pub mod issue_closer;
pub mod issue_creator;
pub mod label_sync;
pub mod project_board;
pub mod selection;
pub mod status;

use std::time::Duration;

pub use issue_closer::{CloseOutcome, CloseReport, IssueCloser};
pub use issue_creator::IssueCreator;
pub use label_sync::{LabelSyncReport, LabelSynchronizer};
pub use project_board::ProjectBoardCreator;
pub use selection::{select_tasks, SelectionSource, TaskSelection};

/// Courtesy pause between consecutive remote calls.
pub(crate) async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_zero_pause_does_not_sleep() {
        let start = Instant::now();
        tokio_test::block_on(pause(Duration::ZERO));
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_pause_waits_for_delay() {
        let start = Instant::now();
        pause(Duration::from_millis(20)).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
