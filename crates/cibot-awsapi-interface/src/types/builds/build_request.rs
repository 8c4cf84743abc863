use serde::Serialize;

use super::{Buildspec, EnvironmentVariable, SourceType};

/// Parameters of one build submission.
///
/// Field names serialize like the `StartBuild` parameters they map to.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BuildRequest {
    /// Project name.
    pub project_name: String,
    /// Buildspec override.
    #[serde(rename = "buildspecOverride")]
    pub buildspec: Buildspec,
    /// Environment variables override.
    #[serde(rename = "environmentVariablesOverride")]
    pub environment_variables: Vec<EnvironmentVariable>,
    /// Source location override.
    #[serde(rename = "sourceLocationOverride")]
    pub source_location: String,
    /// Source type override.
    #[serde(rename = "sourceTypeOverride")]
    pub source_type: SourceType,
    /// Source version (branch or commit).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_version: Option<String>,
    /// Service role override (role name).
    #[serde(rename = "serviceRoleOverride", skip_serializing_if = "Option::is_none")]
    pub service_role: Option<String>,
}

impl BuildRequest {
    /// Start a request from its mandatory fields.
    pub fn builder(
        project_name: impl Into<String>,
        source_type: SourceType,
        source_location: impl Into<String>,
        buildspec: Buildspec,
    ) -> BuildRequestBuilder {
        BuildRequestBuilder {
            inner: Self {
                project_name: project_name.into(),
                buildspec,
                environment_variables: vec![],
                source_location: source_location.into(),
                source_type,
                source_version: None,
                service_role: None,
            },
        }
    }
}

/// Builder for [`BuildRequest`].
#[derive(Debug, Clone)]
pub struct BuildRequestBuilder {
    inner: BuildRequest,
}

impl BuildRequestBuilder {
    /// Append a plain text environment variable.
    pub fn environment_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.inner
            .environment_variables
            .push(EnvironmentVariable::plaintext(name, value));
        self
    }

    /// Set the source version.
    pub fn source_version(mut self, source_version: impl Into<String>) -> Self {
        self.inner.source_version = Some(source_version.into());
        self
    }

    /// Set the service role override.
    pub fn service_role(mut self, service_role: impl Into<String>) -> Self {
        self.inner.service_role = Some(service_role.into());
        self
    }

    /// Finish the request.
    pub fn build(self) -> BuildRequest {
        self.inner
    }
}
