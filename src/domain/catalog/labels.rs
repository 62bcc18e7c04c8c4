//! Repository label catalog.

use crate::domain::models::LabelDefinition;

const fn label(
    name: &'static str,
    color: &'static str,
    description: &'static str,
) -> LabelDefinition {
    LabelDefinition {
        name,
        color,
        description,
    }
}

/// Every label the task catalog may reference, in push order.
pub const LABELS: &[LabelDefinition] = &[
    // Priority
    label("P0-Critical", "d73a4a", "Critical priority - must complete"),
    label("P1-High", "ff9500", "High priority - should complete"),
    label("P2-Medium", "fbca04", "Medium priority - nice to have"),
    label("P3-Low", "0e8a16", "Low priority - future enhancement"),
    // Type
    label("feature", "0075ca", "New feature or functionality"),
    label("chore", "d4c5f9", "Maintenance or setup task"),
    label("enhancement", "84b6eb", "Enhancement to existing feature"),
    label("bug", "d73a4a", "Bug fix"),
    // Category
    label("backend", "5319e7", "Backend development"),
    label("frontend", "1d76db", "Frontend development"),
    label("infrastructure", "0e8a16", "Infrastructure and DevOps"),
    label("ai", "d876e3", "AI and machine learning features"),
    label("integration", "fbca04", "Third-party integrations"),
    label("testing", "c5def5", "Testing and QA"),
    label("docs", "0075ca", "Documentation"),
    // Size
    label("XS", "c2e0c6", "Extra Small (1-2 hours)"),
    label("S", "bfdadc", "Small (2-4 hours)"),
    label("M", "fef2c0", "Medium (4-8 hours)"),
    label("L", "fad8c7", "Large (1-2 days)"),
    label("XL", "f9d0c4", "Extra Large (2-5 days)"),
    // Sprint
    label("Sprint-1", "c5def5", "Week 1 - Foundation"),
    label("Sprint-2", "bfdadc", "Week 2 - Core Backend"),
    label("Sprint-3", "d4c5f9", "Week 3 - Frontend"),
    label("Sprint-4", "fef2c0", "Week 4 - AI & Polish"),
    label("Backlog", "ededed", "Future enhancements"),
];
