//! Issues the closer flow shuts down.

use crate::domain::models::CloseTarget;

/// Duplicate issues opened for tasks that were already finished.
pub const CLOSE_TARGETS: &[CloseTarget] = &[
    CloseTarget {
        number: 7,
        task_id: "TASK-004",
        title: "Install Backend Dependencies",
    },
    CloseTarget {
        number: 8,
        task_id: "TASK-005",
        title: "Configure Prisma and Database Schema",
    },
    CloseTarget {
        number: 9,
        task_id: "TASK-006",
        title: "Create Fastify Server Setup",
    },
];

/// Comment posted on each issue before it is closed.
pub const COMPLETED_COMMENT: &str = "\u{2705} This task has already been completed.

Closing this duplicate issue. The work for this task was completed earlier in the project.

Relevant completed tasks:
- TASK-001: PostgreSQL Setup \u{2705}
- TASK-002: Redis Setup \u{2705}
- TASK-003: API Project Structure \u{2705}
- TASK-004: Backend Dependencies \u{2705}
- TASK-005: Prisma & Database Schema \u{2705}
- TASK-006: Fastify Server Setup \u{2705}

Current focus is on TASK-007, TASK-008, and TASK-009.";
