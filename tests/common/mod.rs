//! Common test utilities for integration tests
//!
//! Provides an in-memory [`IssueTracker`] that records every call and can be
//! told to fail specific operations.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

use tracker_sync::domain::errors::{GitHubApiError, TrackerResult};
use tracker_sync::domain::models::{
    Config, CreatedIssue, LabelDefinition, LabelSyncAction, ProjectBoard,
};
use tracker_sync::domain::ports::IssueTracker;

/// One recorded tracker call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Label(String),
    CreateIssue { title: String, labels: Vec<String> },
    Comment(u64),
    Close(u64),
    Project(String),
}

/// Fake tracker recording calls in order
#[derive(Default)]
pub struct RecordingTracker {
    calls: Mutex<Vec<Call>>,
    pub failing_labels: HashSet<String>,
    pub existing_labels: HashSet<String>,
    pub fail_issues: bool,
    pub fail_comments: bool,
    pub fail_closes: HashSet<u64>,
    pub fail_project: bool,
}

#[allow(dead_code)]
impl RecordingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn label_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Label(name) => Some(name),
                _ => None,
            })
            .collect()
    }

    pub fn issue_calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::CreateIssue { title, labels } => Some((title, labels)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().expect("calls lock").push(call);
    }
}

fn rejected(status: u16) -> GitHubApiError {
    GitHubApiError::Rejected {
        status,
        body: r#"{"message":"fake failure"}"#.to_string(),
    }
}

#[async_trait]
impl IssueTracker for RecordingTracker {
    async fn create_or_update_label(
        &self,
        label: &LabelDefinition,
    ) -> TrackerResult<LabelSyncAction> {
        self.record(Call::Label(label.name.to_string()));
        if self.failing_labels.contains(label.name) {
            return Err(rejected(500));
        }
        if self.existing_labels.contains(label.name) {
            Ok(LabelSyncAction::Updated)
        } else {
            Ok(LabelSyncAction::Created)
        }
    }

    async fn create_issue(
        &self,
        title: &str,
        _body: &str,
        labels: &[String],
    ) -> TrackerResult<CreatedIssue> {
        let number = self.issue_calls().len() as u64 + 10;
        self.record(Call::CreateIssue {
            title: title.to_string(),
            labels: labels.to_vec(),
        });
        if self.fail_issues {
            return Err(rejected(422));
        }
        Ok(CreatedIssue {
            number,
            title: title.to_string(),
            html_url: format!("https://github.com/octocat/devmet-app/issues/{number}"),
        })
    }

    async fn add_comment(&self, issue_number: u64, _body: &str) -> TrackerResult<()> {
        self.record(Call::Comment(issue_number));
        if self.fail_comments {
            return Err(rejected(403));
        }
        Ok(())
    }

    async fn close_issue(&self, issue_number: u64) -> TrackerResult<()> {
        self.record(Call::Close(issue_number));
        if self.fail_closes.contains(&issue_number) {
            return Err(rejected(404));
        }
        Ok(())
    }

    async fn create_project_board(&self, title: &str) -> TrackerResult<ProjectBoard> {
        self.record(Call::Project(title.to_string()));
        if self.fail_project {
            return Err(GitHubApiError::GraphQl("Resource not accessible".to_string()));
        }
        Ok(ProjectBoard {
            id: "PVT_kwHOtest".to_string(),
            number: 1,
            title: title.to_string(),
            url: "https://github.com/users/octocat/projects/1".to_string(),
        })
    }
}

/// Config with credentials filled in and no throttling
#[allow(dead_code)]
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.github.token = Some("ghp_test_token".to_string());
    config.github.owner = Some("octocat".to_string());
    config.throttle.label_delay_ms = 0;
    config.throttle.issue_delay_ms = 0;
    config
}
