//! Implementation of the `close-issues` command.

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::cli::output::{banner, output, rule, CommandOutput};
use crate::cli::print_error;
use crate::domain::models::{CloseTarget, Config};
use crate::domain::ports::IssueTracker;
use crate::infrastructure::credentials::GitHubCredentials;
use crate::infrastructure::github::{GitHubClient, GitHubClientConfig};
use crate::services::{CloseReport, IssueCloser};

#[derive(Debug)]
pub struct CloseIssuesOutput {
    pub report: CloseReport,
    /// `owner/repo`
    pub repository: String,
}

impl CommandOutput for CloseIssuesOutput {
    fn to_human(&self) -> String {
        [
            rule(),
            format!(
                "Closed {} of {} issues.",
                self.report.closed.len(),
                self.report.attempted()
            ),
            "\u{2705} Done! Check your issues at:".to_string(),
            format!("   https://github.com/{}/issues", self.repository),
            "\n\u{1f4a1} Note: GitHub does not allow deleting issues via API.".to_string(),
            "   These issues are now closed. If you need to delete them".to_string(),
            "   completely, you can do so from the GitHub UI (Settings \u{2192} Danger Zone)."
                .to_string(),
        ]
        .join("\n")
    }
}

/// Check credentials, build the GitHub client and close `targets`.
pub async fn execute(config: Config, targets: &[CloseTarget], comment: Option<&str>) -> Result<()> {
    println!("{}", banner("\u{1f5d1}\u{fe0f}  Closing Completed Task Issues"));

    let credentials = match GitHubCredentials::from_config(&config) {
        Ok(credentials) => credentials,
        Err(err) => {
            print_error(&err);
            return Ok(());
        }
    };

    let repository = format!("{}/{}", credentials.owner, config.github.repo);
    println!("\u{1f4e6} Repository: {repository}\n");

    let client = GitHubClient::new(GitHubClientConfig::new(credentials, &config.github))
        .context("Failed to build GitHub client")?;

    let result = run(Arc::new(client), repository, targets, comment).await;
    output(&result);
    Ok(())
}

pub async fn run(
    tracker: Arc<dyn IssueTracker>,
    repository: String,
    targets: &[CloseTarget],
    comment: Option<&str>,
) -> CloseIssuesOutput {
    println!("\u{1f4cb} Closing completed task issues:\n");
    let report = IssueCloser::new(tracker).close_all(targets, comment).await;
    CloseIssuesOutput { report, repository }
}
