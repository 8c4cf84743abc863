//! Config module.

mod drivers;

use std::{collections::HashMap, env, str::FromStr};

pub use drivers::{ApiDriver, DriverError};
use serde::Deserialize;
use thiserror::Error;

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid API driver: {source}")]
    InvalidApiDriver { source: DriverError },

    #[error("Invalid repository customizations in {}: {}", name, source)]
    InvalidRepositoryCustomizations {
        name: &'static str,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API driver.
    pub driver: ApiDriver,
    /// AWS options.
    pub aws: ApiAwsConfig,
}

#[derive(Debug, Clone)]
pub struct ApiAwsConfig {
    /// Region used by the CodeCommit and CodeBuild clients.
    pub region: String,
}

/// Per-repository build options.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RepositoryCustomization {
    /// Service role ARN the build should run under.
    #[serde(default)]
    pub codebuild_service_role_arn: Option<String>,
}

#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// CodeBuild project name.
    pub project_name: String,
    /// Fetch the buildspec from the default branch for pull request builds.
    pub load_buildspec_from_default_branch: bool,
    /// Options keyed by repository name.
    pub repository_customizations: HashMap<String, RepositoryCustomization>,
}

impl BuildConfig {
    /// Get the customization for a repository, if any.
    pub fn customization_for(&self, repository_name: &str) -> Option<&RepositoryCustomization> {
        self.repository_customizations.get(repository_name)
    }
}

#[derive(Debug, Clone)]
pub struct PullRequestConfig {
    /// Name of the event rule expected to start pull request builds.
    pub events_rule_name: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Bot configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API options.
    pub api: ApiConfig,
    /// Build options.
    pub build: BuildConfig,
    /// Pull request options.
    pub pull_requests: PullRequestConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// App version
    pub version: String,
}

const REPOSITORY_CUSTOMIZATIONS_ENV: &str = "REPOSITORY_CUSTOMIZATIONS_JSON";

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Result<Config, ConfigError> {
        Ok(Config {
            api: ApiConfig {
                driver: ApiDriver::from_str(&env_to_str("CIBOT_API_DRIVER", "aws"))
                    .map_err(|e| ConfigError::InvalidApiDriver { source: e })?,
                aws: ApiAwsConfig {
                    region: env_to_str("AWS_REGION", "us-east-1"),
                },
            },
            build: BuildConfig {
                project_name: env_to_str("CODEBUILD_PROJECT_NAME", ""),
                load_buildspec_from_default_branch: parse_flag(&env_to_str(
                    "CODEBUILD_LOAD_BUILDSPEC_FROM_DEFAULT_BRANCH",
                    "false",
                )),
                repository_customizations: repository_customizations_from_env(
                    REPOSITORY_CUSTOMIZATIONS_ENV,
                )?,
            },
            pull_requests: PullRequestConfig {
                events_rule_name: env_to_str("PULL_REQUEST_EVENTS_RULE_NAME", ""),
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("CIBOT_LOGGING_USE_BUNYAN", false),
            },
            version,
        })
    }

    pub fn from_env_no_version() -> Result<Self, ConfigError> {
        Self::from_env("0.0.0".into())
    }
}

/// Only a case-insensitive `true` enables a flag.
fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

/// JSON is read verbatim: `\n` escapes inside strings must stay escapes.
fn repository_customizations_from_env(
    name: &'static str,
) -> Result<HashMap<String, RepositoryCustomization>, ConfigError> {
    parse_repository_customizations(name, &env::var(name).unwrap_or_default())
}

fn parse_repository_customizations(
    name: &'static str,
    value: &str,
) -> Result<HashMap<String, RepositoryCustomization>, ConfigError> {
    if value.trim().is_empty() {
        return Ok(HashMap::new());
    }

    serde_json::from_str(value).map_err(|e| ConfigError::InvalidRepositoryCustomizations {
        name,
        source: e,
    })
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name)
        .unwrap_or_else(|_e| default.to_string())
        .replace("\\n", "\n")
}

#[cfg(test)]
mod tests {
    use maplit::hashmap;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn flags() {
        assert!(parse_flag("true"));
        assert!(parse_flag("True"));
        assert!(parse_flag(" TRUE "));
        assert!(!parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn repository_customizations() {
        let parsed = parse_repository_customizations(
            REPOSITORY_CUSTOMIZATIONS_ENV,
            r#"{
                "some-repo": {"codebuild_service_role_arn": "arn:aws:iam::111111111111:role/service-role/ci"},
                "other-repo": {}
            }"#,
        )
        .unwrap();

        assert_eq!(
            parsed,
            hashmap! {
                "some-repo".to_string() => RepositoryCustomization {
                    codebuild_service_role_arn: Some("arn:aws:iam::111111111111:role/service-role/ci".into())
                },
                "other-repo".to_string() => RepositoryCustomization::default(),
            }
        );
    }

    #[test]
    fn repository_customizations_empty() {
        let parse = |value| parse_repository_customizations(REPOSITORY_CUSTOMIZATIONS_ENV, value);

        assert!(parse("").unwrap().is_empty());
        assert!(parse("{}").unwrap().is_empty());
    }

    #[test]
    fn repository_customizations_keep_json_escapes() {
        const NAME: &str = "CIBOT_TEST_REPOSITORY_CUSTOMIZATIONS_ESCAPES";
        env::set_var(
            NAME,
            r#"{"some-repo": {"codebuild_service_role_arn": "arn:aws:iam::111111111111:role/ci\nrole"}}"#,
        );

        let parsed = repository_customizations_from_env(NAME).unwrap();
        env::remove_var(NAME);

        assert_eq!(
            parsed["some-repo"].codebuild_service_role_arn.as_deref(),
            Some("arn:aws:iam::111111111111:role/ci\nrole")
        );
    }

    #[test]
    fn repository_customizations_unset() {
        assert!(
            repository_customizations_from_env("CIBOT_TEST_REPOSITORY_CUSTOMIZATIONS_UNSET")
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn repository_customizations_invalid() {
        assert!(matches!(
            parse_repository_customizations(REPOSITORY_CUSTOMIZATIONS_ENV, "[1, 2]"),
            Err(ConfigError::InvalidRepositoryCustomizations { .. })
        ));
    }
}
