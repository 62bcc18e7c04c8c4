//! Task domain model.
//!
//! A task definition is a compiled-in catalog entry that becomes one GitHub
//! issue. Every classification field maps onto exactly one repository label.

use serde::{Deserialize, Serialize};

/// Kind of work a task represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Feature,
    Chore,
    Enhancement,
    Bug,
}

impl TaskType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Feature => "feature",
            Self::Chore => "chore",
            Self::Enhancement => "enhancement",
            Self::Bug => "bug",
        }
    }
}

/// Priority level for tasks, P0 being the most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    P0Critical,
    P1High,
    P2Medium,
    P3Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Self::P0Critical => "P0-Critical",
            Self::P1High => "P1-High",
            Self::P2Medium => "P2-Medium",
            Self::P3Low => "P3-Low",
        }
    }
}

/// Area of the codebase a task touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Backend,
    Frontend,
    Infrastructure,
    Ai,
    Integration,
    Testing,
    Docs,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Backend => "backend",
            Self::Frontend => "frontend",
            Self::Infrastructure => "infrastructure",
            Self::Ai => "ai",
            Self::Integration => "integration",
            Self::Testing => "testing",
            Self::Docs => "docs",
        }
    }
}

/// T-shirt size estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Size {
    Xs,
    S,
    M,
    L,
    Xl,
}

impl Size {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Xs => "XS",
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::Xl => "XL",
        }
    }
}

/// Planning bucket a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprint {
    Sprint1,
    Sprint2,
    Sprint3,
    Sprint4,
    Backlog,
}

impl Sprint {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sprint1 => "Sprint-1",
            Self::Sprint2 => "Sprint-2",
            Self::Sprint3 => "Sprint-3",
            Self::Sprint4 => "Sprint-4",
            Self::Backlog => "Backlog",
        }
    }
}

/// A catalog entry describing one issue to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskDefinition {
    /// Unique identifier, e.g. `TASK-004`
    pub id: &'static str,
    pub title: &'static str,
    pub task_type: TaskType,
    pub priority: Priority,
    pub category: Category,
    pub size: Size,
    pub sprint: Sprint,
    /// Markdown body of the issue
    pub description: &'static str,
}

impl TaskDefinition {
    /// Issue title: the id in brackets followed by the task title.
    pub fn issue_title(&self) -> String {
        format!("[{}] {}", self.id, self.title)
    }

    /// Issue labels in the order priority, type, category, size, sprint.
    pub fn issue_labels(&self) -> Vec<String> {
        [
            self.priority.label(),
            self.task_type.label(),
            self.category.label(),
            self.size.label(),
            self.sprint.label(),
        ]
        .iter()
        .map(ToString::to_string)
        .collect()
    }
}
