//! Port trait definitions (Hexagonal Architecture)
//!
//! - IssueTracker: label, issue, comment and project-board operations on the
//!   remote tracker
//!
//! The synchronization services only see this trait, so they can be driven by
//! the reqwest-backed GitHub client or by an in-memory fake in tests.

pub mod issue_tracker;

pub use issue_tracker::IssueTracker;
