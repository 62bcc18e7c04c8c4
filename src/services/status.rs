//! One-line status messages for each remote call.
//!
//! These go to stdout for the person running the tool; structured records
//! for the same events go through `tracing` to stderr.

use console::style;
use std::fmt::Display;
use tracing::{error, warn};

use crate::domain::errors::GitHubApiError;

pub fn success(message: impl Display) {
    println!("{} {message}", style("\u{2713}").green());
}

pub fn warning(message: impl Display) {
    println!("{} {message}", style("\u{26a0}").yellow());
}

/// `✗ Failed to <action>: <status code or error>`
pub fn failure(action: impl Display, err: &GitHubApiError) {
    match err {
        GitHubApiError::Network(_) => error!(action = %action, error = %err, "Remote call failed"),
        _ => warn!(action = %action, error = %err, "Remote call rejected"),
    }
    println!(
        "{} Failed to {action}: {}",
        style("\u{2717}").red(),
        err.summary()
    );
}
