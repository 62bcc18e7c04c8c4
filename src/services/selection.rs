//! Resolution of which catalog tasks a run creates.

use std::collections::HashSet;
use tracing::warn;

use crate::domain::catalog::TaskCatalog;
use crate::domain::errors::SelectionError;
use crate::domain::models::TaskDefinition;

/// Where the selected ids came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    /// Positional command-line arguments
    Arguments,
    /// `selection.default_task_ids` from configuration
    Configured,
}

/// Tasks chosen for a run, plus the ids that were skipped.
#[derive(Debug, Clone)]
pub struct TaskSelection {
    pub source: SelectionSource,
    /// Known tasks in the order requested, each at most once
    pub tasks: Vec<TaskDefinition>,
    /// Requested ids missing from the catalog
    pub unknown: Vec<String>,
    /// Ids requested more than once; only the first request counts
    pub duplicates: Vec<String>,
}

/// Pick tasks from command-line ids, falling back to the configured list.
///
/// Unknown and repeated ids are skipped with a warning. Fails only when both
/// sources are empty.
pub fn select_tasks(
    catalog: &TaskCatalog,
    arguments: &[String],
    configured: &[String],
) -> Result<TaskSelection, SelectionError> {
    let (source, requested) = if !arguments.is_empty() {
        (SelectionSource::Arguments, arguments)
    } else if !configured.is_empty() {
        (SelectionSource::Configured, configured)
    } else {
        return Err(SelectionError::NothingSelected {
            known: catalog.ids(),
        });
    };

    let mut selection = TaskSelection {
        source,
        tasks: Vec::with_capacity(requested.len()),
        unknown: Vec::new(),
        duplicates: Vec::new(),
    };
    let mut seen = HashSet::new();

    for raw in requested {
        let id = raw.trim();
        let Some(task) = catalog.get(id) else {
            warn!(task_id = %id, "Unknown task id, skipping");
            selection.unknown.push(id.to_string());
            continue;
        };
        if !seen.insert(task.id) {
            warn!(task_id = %id, "Task requested more than once, skipping repeat");
            selection.duplicates.push(id.to_string());
            continue;
        }
        selection.tasks.push(*task);
    }

    Ok(selection)
}
