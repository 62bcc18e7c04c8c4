//! Label domain model.
//!
//! Labels are pushed to the repository before any issue is created so that
//! issue creation never references an unknown label.

use serde::Serialize;

/// A repository label as it should exist on the remote tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelDefinition {
    /// Unique label name
    pub name: &'static str,
    /// Six hex digits, no leading `#`
    pub color: &'static str,
    /// Short human description shown in the label picker
    pub description: &'static str,
}

impl LabelDefinition {
    /// Whether `color` is exactly six hexadecimal digits.
    pub fn has_valid_color(&self) -> bool {
        self.color.len() == 6 && self.color.chars().all(|c| c.is_ascii_hexdigit())
    }
}

/// What the tracker did with a pushed label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelSyncAction {
    /// The label did not exist and was created
    Created,
    /// The label already existed and was updated in place
    Updated,
}

impl LabelSyncAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
        }
    }
}
