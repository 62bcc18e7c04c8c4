pub mod client;
pub mod types;

pub use crate::domain::errors::GitHubApiError;
pub use client::{GitHubClient, GitHubClientConfig};
