//! Implementation of the `create-tasks` command.

use anyhow::{Context, Result};
use clap::Args;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::cli::output::{banner, issue_table, output, rule, CommandOutput};
use crate::cli::print_error;
use crate::domain::catalog::{LabelCatalog, TaskCatalog};
use crate::domain::models::{Config, CreatedIssue, ProjectBoard};
use crate::domain::ports::IssueTracker;
use crate::infrastructure::credentials::GitHubCredentials;
use crate::infrastructure::github::{GitHubClient, GitHubClientConfig};
use crate::services::status;
use crate::services::{
    select_tasks, IssueCreator, LabelSyncReport, LabelSynchronizer, ProjectBoardCreator,
};

#[derive(Args, Debug)]
pub struct CreateTasksArgs {
    /// Task ids to create issues for (defaults to the configured list)
    #[arg(value_name = "TASK_ID")]
    pub task_ids: Vec<String>,
}

#[derive(Debug)]
pub struct CreateTasksOutput {
    pub labels: LabelSyncReport,
    pub issues: Vec<CreatedIssue>,
    pub skipped: Vec<String>,
    pub project: Option<ProjectBoard>,
}

impl CommandOutput for CreateTasksOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![format!("\n{}", rule()), "\u{2705} Summary:".to_string()];
        lines.push(format!(
            "   - Labels synced: {} of {}",
            self.labels.synced(),
            self.labels.attempted()
        ));
        lines.push(format!("   - Issues created: {}", self.issues.len()));
        if !self.skipped.is_empty() {
            lines.push(format!("   - Task ids skipped: {}", self.skipped.join(", ")));
        }
        if let Some(project) = &self.project {
            lines.push(format!("   - Project board created: {}", project.title));
            lines.push(format!("   - Project URL: {}", project.url));
        }
        if !self.issues.is_empty() {
            lines.push(String::new());
            lines.push(issue_table(&self.issues).to_string());
        }
        lines.push("\n\u{1f4cc} Next steps:".to_string());
        lines.push("   1. Visit your repository issues tab".to_string());
        lines.push("   2. Organize issues in the project board".to_string());
        lines.push("   3. Start with Sprint-1 tasks!".to_string());
        lines.push("   4. Modify tasks as needed - they're flexible!".to_string());
        lines.join("\n")
    }
}

/// Check credentials, build the GitHub client and run the flow.
///
/// Missing credentials print a setup hint and return without any remote call.
pub async fn execute(args: CreateTasksArgs, config: Config) -> Result<()> {
    println!("{}", banner("\u{1f680} DevMetrics GitHub Task Creator"));

    let credentials = match GitHubCredentials::from_config(&config) {
        Ok(credentials) => credentials,
        Err(err) => {
            print_error(&err);
            println!("\n{}", err.hint());
            return Ok(());
        }
    };

    println!(
        "\u{1f4e6} Repository: {}/{}",
        credentials.owner, config.github.repo
    );
    println!("\u{1f511} Token: {}\n", credentials.token.masked());

    let client = GitHubClient::new(GitHubClientConfig::new(credentials, &config.github))
        .context("Failed to build GitHub client")?;

    if let Some(result) = run(Arc::new(client), &args.task_ids, &config).await? {
        output(&result);
        println!("\n\u{1f389} All set! Happy coding!");
    }
    Ok(())
}

/// Sync labels, create the selected issues, then the project board.
///
/// Returns `None` when no task could be selected; the usage message has
/// already been printed and no remote call was made.
pub async fn run(
    tracker: Arc<dyn IssueTracker>,
    task_ids: &[String],
    config: &Config,
) -> Result<Option<CreateTasksOutput>> {
    let labels = LabelCatalog::builtin().context("Invalid label catalog")?;
    let tasks = TaskCatalog::builtin().context("Invalid task catalog")?;

    let selection = match select_tasks(&tasks, task_ids, &config.selection.default_task_ids) {
        Ok(selection) => selection,
        Err(err) => {
            print_error(&err);
            return Ok(None);
        }
    };
    for id in &selection.unknown {
        status::warning(format!("Unknown task id {id}, skipping"));
    }
    for id in &selection.duplicates {
        status::warning(format!("Task {id} requested more than once, skipping repeat"));
    }
    info!(
        source = ?selection.source,
        selected = selection.tasks.len(),
        skipped = selection.unknown.len() + selection.duplicates.len(),
        "Tasks selected"
    );

    println!("\n\u{1f4cc} Creating labels...\n");
    let label_report = LabelSynchronizer::new(
        Arc::clone(&tracker),
        Duration::from_millis(config.throttle.label_delay_ms),
    )
    .sync(&labels)
    .await;

    println!(
        "\n\u{1f4cb} Creating issues ({} tasks)...\n",
        selection.tasks.len()
    );
    let issues = IssueCreator::new(
        Arc::clone(&tracker),
        Duration::from_millis(config.throttle.issue_delay_ms),
    )
    .create_all(&selection.tasks)
    .await;

    let project = if config.project.enabled {
        println!("\n\u{1f4ca} Creating project board...");
        ProjectBoardCreator::new(tracker)
            .create(&config.project.title)
            .await
    } else {
        None
    };

    let mut skipped = selection.unknown;
    skipped.extend(selection.duplicates);

    Ok(Some(CreateTasksOutput {
        labels: label_report,
        issues,
        skipped,
        project,
    }))
}
