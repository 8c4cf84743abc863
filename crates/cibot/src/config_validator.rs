//! Validation utilities.

use cibot_config::{ApiDriver, Config};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push_str(&format!("\n  - Missing env. var.: {}", name));
    }

    #[inline]
    fn _invalid(error: &mut String, name: &str, reason: &str) {
        error.push_str(&format!("\n  - Invalid env. var.: {} ({})", name, reason));
    }

    let mut error = String::new();

    if config.build.project_name.is_empty() {
        _missing(&mut error, "CODEBUILD_PROJECT_NAME");
    }

    if config.api.driver == ApiDriver::Aws && config.api.aws.region.is_empty() {
        _missing(&mut error, "AWS_REGION");
    }

    let mut repository_names: Vec<_> = config.build.repository_customizations.keys().collect();
    repository_names.sort();
    for repository_name in repository_names {
        let customization = &config.build.repository_customizations[repository_name];
        if customization.codebuild_service_role_arn.as_deref() == Some("") {
            _invalid(
                &mut error,
                "REPOSITORY_CUSTOMIZATIONS_JSON",
                &format!("empty codebuild_service_role_arn for '{}'", repository_name),
            );
        }
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}
