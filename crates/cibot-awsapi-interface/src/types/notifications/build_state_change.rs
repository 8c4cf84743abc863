use serde::{Deserialize, Serialize};

use crate::types::builds::{BuildStatus, EnvironmentVariable};

/// Build environment, as echoed by CodeBuild.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct BuildEnvironment {
    /// Environment variables.
    #[serde(default)]
    pub environment_variables: Vec<EnvironmentVariable>,
}

/// Additional build information.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct BuildAdditionalInformation {
    /// Initiator.
    pub initiator: Option<String>,
    /// Environment.
    #[serde(default)]
    pub environment: BuildEnvironment,
}

/// Detail of a `CodeBuild Build State Change` event.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct BuildStateChangeDetail {
    /// Status.
    pub build_status: BuildStatus,
    /// Project name.
    pub project_name: String,
    /// Build ARN.
    pub build_id: String,
    /// Additional information.
    #[serde(default)]
    pub additional_information: BuildAdditionalInformation,
}
