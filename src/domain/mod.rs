//! Domain layer for tracker-sync
//!
//! Catalog records, run results, configuration types and the port the
//! synchronization flows talk to.

pub mod catalog;
pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{CatalogError, GitHubApiError, SelectionError};
