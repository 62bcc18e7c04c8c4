use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use reqwest::Url;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Optional project-local configuration file
pub const CONFIG_FILE: &str = "tracker-sync.yaml";

/// Prefix for environment overrides of any config key
pub const ENV_PREFIX: &str = "TRACKER_SYNC_";

/// Unprefixed variables mapped onto the `github` section
const GITHUB_ENV_VARS: [&str; 3] = ["GITHUB_TOKEN", "GITHUB_OWNER", "GITHUB_REPO"];

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Repository name cannot be empty")]
    EmptyRepo,

    #[error("Invalid URL for {field}: {value}")]
    InvalidUrl { field: &'static str, value: String },

    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. tracker-sync.yaml in the working directory (optional)
    /// 3. TRACKER_SYNC_* environment variables, `__` separating sections
    /// 4. GITHUB_TOKEN, GITHUB_OWNER and GITHUB_REPO
    ///
    /// Missing credentials are not an error here; see
    /// [`GitHubCredentials::from_config`](crate::infrastructure::credentials::GitHubCredentials::from_config).
    pub fn load() -> Result<Config> {
        Self::load_from_file(CONFIG_FILE)
    }

    /// Load configuration using a specific file in place of the default one
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(github_env())
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.as_ref().display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        if config.github.repo.trim().is_empty() {
            return Err(ConfigError::EmptyRepo);
        }

        for (field, value) in [
            ("github.api_url", &config.github.api_url),
            ("github.graphql_url", &config.github.graphql_url),
        ] {
            if Url::parse(value).is_err() {
                return Err(ConfigError::InvalidUrl {
                    field,
                    value: value.clone(),
                });
            }
        }

        if config.github.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.github.timeout_secs));
        }

        Ok(())
    }
}

/// `GITHUB_TOKEN` becomes `github.token`, and so on.
fn github_env() -> Env {
    Env::raw().only(&GITHUB_ENV_VARS).map(|key| {
        key.as_str()
            .to_ascii_lowercase()
            .replacen("github_", "github.", 1)
            .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::config::LogFormat;
    use std::io::Write;

    const CLEAN_ENV: [(&str, Option<&str>); 5] = [
        ("GITHUB_TOKEN", None),
        ("GITHUB_OWNER", None),
        ("GITHUB_REPO", None),
        ("TRACKER_SYNC_THROTTLE__ISSUE_DELAY_MS", None),
        ("TRACKER_SYNC_LOGGING__LEVEL", None),
    ];

    fn with_env<R>(vars: &[(&str, Option<&str>)], f: impl FnOnce() -> R) -> R {
        let mut all: Vec<(&str, Option<&str>)> = CLEAN_ENV
            .iter()
            .filter(|(key, _)| !vars.iter().any(|(k, _)| k == key))
            .copied()
            .collect();
        all.extend_from_slice(vars);
        temp_env::with_vars(all, f)
    }

    fn missing_file() -> std::path::PathBuf {
        tempfile::tempdir()
            .expect("tempdir")
            .path()
            .join("absent.yaml")
    }

    #[test]
    fn test_default_config_is_valid() {
        ConfigLoader::validate(&Config::default()).expect("Default config should be valid");
    }

    #[test]
    fn test_load_without_env_has_no_credentials() {
        let config = with_env(&[], || ConfigLoader::load_from_file(missing_file())).unwrap();
        assert!(config.github.token.is_none());
        assert!(config.github.owner.is_none());
        assert_eq!(config.github.repo, "devmet-app");
    }

    #[test]
    fn test_github_env_vars_map_into_github_section() {
        let config = with_env(
            &[
                ("GITHUB_TOKEN", Some("ghp_env")),
                ("GITHUB_OWNER", Some("octocat")),
                ("GITHUB_REPO", Some("hello-world")),
            ],
            || ConfigLoader::load_from_file(missing_file()),
        )
        .unwrap();
        assert_eq!(config.github.token.as_deref(), Some("ghp_env"));
        assert_eq!(config.github.owner.as_deref(), Some("octocat"));
        assert_eq!(config.github.repo, "hello-world");
    }

    #[test]
    fn test_prefixed_env_overrides_nested_keys() {
        let config = with_env(
            &[
                ("TRACKER_SYNC_THROTTLE__ISSUE_DELAY_MS", Some("0")),
                ("TRACKER_SYNC_LOGGING__LEVEL", Some("debug")),
            ],
            || ConfigLoader::load_from_file(missing_file()),
        )
        .unwrap();
        assert_eq!(config.throttle.issue_delay_ms, 0);
        assert_eq!(config.throttle.label_delay_ms, 200);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_yaml_file_then_env_precedence() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "github:\n  owner: from-file\n  repo: file-repo\nproject:\n  enabled: false\nlogging:\n  format: json"
        )
        .unwrap();

        let config = with_env(&[("GITHUB_OWNER", Some("from-env"))], || {
            ConfigLoader::load_from_file(file.path())
        })
        .unwrap();

        assert_eq!(config.github.owner.as_deref(), Some("from-env"));
        assert_eq!(config.github.repo, "file-repo");
        assert!(!config.project.enabled);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "throttle: [not, a, map").unwrap();
        let result = with_env(&[], || ConfigLoader::load_from_file(file.path()));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();

        match ConfigLoader::validate(&config).unwrap_err() {
            ConfigError::InvalidLogLevel(level) => assert_eq!(level, "loud"),
            other => panic!("Expected InvalidLogLevel error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_empty_repo() {
        let mut config = Config::default();
        config.github.repo = "  ".to_string();
        assert!(matches!(
            ConfigLoader::validate(&config).unwrap_err(),
            ConfigError::EmptyRepo
        ));
    }

    #[test]
    fn test_validate_bad_url() {
        let mut config = Config::default();
        config.github.graphql_url = "graphql".to_string();
        assert!(matches!(
            ConfigLoader::validate(&config).unwrap_err(),
            ConfigError::InvalidUrl {
                field: "github.graphql_url",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = Config::default();
        config.github.timeout_secs = 0;
        assert!(matches!(
            ConfigLoader::validate(&config).unwrap_err(),
            ConfigError::InvalidTimeout(0)
        ));
    }
}
