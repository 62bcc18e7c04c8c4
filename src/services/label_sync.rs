//! Label synchronization: make every catalog label exist with its catalog
//! color and description.

use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use super::{pause, status};
use crate::domain::catalog::LabelCatalog;
use crate::domain::models::{LabelDefinition, LabelSyncAction};
use crate::domain::ports::IssueTracker;

/// Outcome counts for one label synchronization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSyncReport {
    pub created: usize,
    pub updated: usize,
    /// Names of labels that could not be created or updated
    pub failed: Vec<String>,
}

impl LabelSyncReport {
    /// Labels that now match the catalog.
    pub fn synced(&self) -> usize {
        self.created + self.updated
    }

    pub fn attempted(&self) -> usize {
        self.synced() + self.failed.len()
    }
}

/// Pushes catalog labels one at a time with a fixed pause between calls.
pub struct LabelSynchronizer {
    tracker: Arc<dyn IssueTracker>,
    delay: Duration,
}

impl LabelSynchronizer {
    pub fn new(tracker: Arc<dyn IssueTracker>, delay: Duration) -> Self {
        Self { tracker, delay }
    }

    /// Create or update a single label. Never fails; the outcome is printed.
    pub async fn sync_label(&self, label: &LabelDefinition) -> Option<LabelSyncAction> {
        match self.tracker.create_or_update_label(label).await {
            Ok(action) => {
                match action {
                    LabelSyncAction::Created => status::success(format!("Created label: {}", label.name)),
                    LabelSyncAction::Updated => status::success(format!("Updated label: {}", label.name)),
                }
                Some(action)
            }
            Err(err) => {
                status::failure(format!("create label {}", label.name), &err);
                None
            }
        }
    }

    /// Push every catalog label in catalog order. A failed label does not stop
    /// the ones after it.
    pub async fn sync(&self, catalog: &LabelCatalog) -> LabelSyncReport {
        let mut report = LabelSyncReport::default();

        for (position, label) in catalog.iter().enumerate() {
            if position > 0 {
                pause(self.delay).await;
            }
            match self.sync_label(label).await {
                Some(LabelSyncAction::Created) => report.created += 1,
                Some(LabelSyncAction::Updated) => report.updated += 1,
                None => report.failed.push(label.name.to_string()),
            }
        }

        info!(
            created = report.created,
            updated = report.updated,
            failed = report.failed.len(),
            "Label synchronization finished"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let report = LabelSyncReport {
            created: 3,
            updated: 20,
            failed: vec!["bug".to_string(), "docs".to_string()],
        };
        assert_eq!(report.synced(), 23);
        assert_eq!(report.attempted(), 25);
    }
}
