//! Infrastructure layer module
//!
//! External integrations and process-level plumbing:
//! - GitHub REST/GraphQL client
//! - Configuration management
//! - Credentials extraction
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod credentials;
pub mod github;
pub mod logging;
