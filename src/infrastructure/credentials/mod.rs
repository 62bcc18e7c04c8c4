//! Credentials management infrastructure
//!
//! The token and owner are the only settings without a usable default. They
//! are pulled out of the loaded [`Config`] here so that a run without them
//! stops before any client is built.

use std::fmt;

use thiserror::Error;

use crate::domain::models::Config;

/// Missing credential errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("GITHUB_TOKEN environment variable not set")]
    MissingToken,

    #[error("GITHUB_OWNER environment variable not set")]
    MissingOwner,
}

impl CredentialsError {
    /// Setup instructions printed under the error.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::MissingToken => {
                "To set your token:\n  export GITHUB_TOKEN=your_github_personal_access_token\n\n\
                 Create a token at: https://github.com/settings/tokens\n\
                 Required scopes: repo, project"
            }
            Self::MissingOwner => {
                "To set your GitHub username:\n  export GITHUB_OWNER=your_github_username"
            }
        }
    }
}

/// A personal access token that never prints in full.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Twenty asterisks followed by the last four characters.
    pub fn masked(&self) -> String {
        let tail: String = {
            let chars: Vec<char> = self.0.chars().collect();
            chars[chars.len().saturating_sub(4)..].iter().collect()
        };
        format!("{}{tail}", "*".repeat(20))
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Token").field(&"[REDACTED]").finish()
    }
}

/// Token and owner required for every remote call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubCredentials {
    pub token: Token,
    pub owner: String,
}

impl GitHubCredentials {
    /// Extract credentials, treating blank values as missing.
    pub fn from_config(config: &Config) -> Result<Self, CredentialsError> {
        let token = non_blank(config.github.token.as_deref()).ok_or(CredentialsError::MissingToken)?;
        let owner = non_blank(config.github.owner.as_deref()).ok_or(CredentialsError::MissingOwner)?;
        Ok(Self {
            token: Token::new(token),
            owner: owner.to_string(),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
