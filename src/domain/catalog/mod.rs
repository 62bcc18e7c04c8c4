//! Compiled-in catalogs.
//!
//! The raw tables live in [`labels`], [`tasks`] and [`close_targets`]. The
//! catalog types wrap them once at startup, check that keys are unique, and
//! provide lookup by key while keeping the table order for iteration.

pub mod close_targets;
pub mod labels;
pub mod tasks;

use std::collections::{HashMap, HashSet};

use crate::domain::errors::{CatalogError, CatalogResult};
use crate::domain::models::{LabelDefinition, TaskDefinition};

pub use close_targets::{CLOSE_TARGETS, COMPLETED_COMMENT};
pub use labels::LABELS;
pub use tasks::TASKS;

/// Ordered set of label definitions with unique names.
#[derive(Debug, Clone)]
pub struct LabelCatalog {
    labels: Vec<LabelDefinition>,
}

impl LabelCatalog {
    pub fn new(labels: impl IntoIterator<Item = LabelDefinition>) -> CatalogResult<Self> {
        let labels: Vec<LabelDefinition> = labels.into_iter().collect();
        let mut seen = HashSet::with_capacity(labels.len());
        for label in &labels {
            if !seen.insert(label.name) {
                return Err(CatalogError::DuplicateLabel(label.name.to_string()));
            }
        }
        Ok(Self { labels })
    }

    /// The compiled-in label table.
    pub fn builtin() -> CatalogResult<Self> {
        Self::new(LABELS.iter().copied())
    }

    pub fn get(&self, name: &str) -> Option<&LabelDefinition> {
        self.labels.iter().find(|label| label.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LabelDefinition> {
        self.labels.iter()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Ordered task definitions keyed by id.
#[derive(Debug, Clone)]
pub struct TaskCatalog {
    tasks: Vec<TaskDefinition>,
    index: HashMap<&'static str, usize>,
}

impl TaskCatalog {
    pub fn new(tasks: impl IntoIterator<Item = TaskDefinition>) -> CatalogResult<Self> {
        let tasks: Vec<TaskDefinition> = tasks.into_iter().collect();
        let mut index = HashMap::with_capacity(tasks.len());
        for (position, task) in tasks.iter().enumerate() {
            if index.insert(task.id, position).is_some() {
                return Err(CatalogError::DuplicateTaskId(task.id.to_string()));
            }
        }
        Ok(Self { tasks, index })
    }

    /// The compiled-in task table.
    pub fn builtin() -> CatalogResult<Self> {
        Self::new(TASKS.iter().copied())
    }

    pub fn get(&self, id: &str) -> Option<&TaskDefinition> {
        self.index.get(id).map(|&position| &self.tasks[position])
    }

    /// Task ids in catalog order.
    pub fn ids(&self) -> Vec<String> {
        self.tasks.iter().map(|task| task.id.to_string()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaskDefinition> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
