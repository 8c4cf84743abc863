use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_codebuild::{error::BuildError, types, Client};
use cibot_awsapi_interface::{
    types::builds::{
        BuildRequest, EnvironmentVariable, EnvironmentVariableType, SourceType, StartedBuild,
    },
    BuildService, Result,
};

use crate::AwsError;

/// CodeBuild build service.
#[derive(Clone, Debug)]
pub struct AwsBuildService {
    client: Client,
}

impl AwsBuildService {
    /// Build a CodeBuild build service.
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }
}

fn environment_variable(
    variable: &EnvironmentVariable,
) -> Result<types::EnvironmentVariable, BuildError> {
    let variable_type = match variable.variable_type {
        EnvironmentVariableType::Plaintext => types::EnvironmentVariableType::Plaintext,
        EnvironmentVariableType::ParameterStore => types::EnvironmentVariableType::ParameterStore,
        EnvironmentVariableType::SecretsManager => types::EnvironmentVariableType::SecretsManager,
    };

    types::EnvironmentVariable::builder()
        .name(&variable.name)
        .value(&variable.value)
        .r#type(variable_type)
        .build()
}

fn source_type(source_type: SourceType) -> types::SourceType {
    match source_type {
        SourceType::CodeCommit => types::SourceType::Codecommit,
    }
}

#[async_trait]
impl BuildService for AwsBuildService {
    #[tracing::instrument(skip_all, fields(project_name = %request.project_name), ret)]
    async fn builds_start(&self, request: &BuildRequest) -> Result<StartedBuild> {
        let variables = request
            .environment_variables
            .iter()
            .map(environment_variable)
            .collect::<Result<Vec<_>, _>>()
            .map_err(AwsError::from)?;

        let output = self
            .client
            .start_build()
            .project_name(&request.project_name)
            .buildspec_override(request.buildspec.as_str())
            .set_environment_variables_override(Some(variables))
            .source_location_override(&request.source_location)
            .source_type_override(source_type(request.source_type))
            .set_source_version(request.source_version.clone())
            .set_service_role_override(request.service_role.clone())
            .send()
            .await
            .map_err(AwsError::codebuild)?;

        let build = output
            .build_value()
            .ok_or_else(|| AwsError::missing("StartBuild", "build"))?;
        let id = build
            .id()
            .ok_or_else(|| AwsError::missing("StartBuild", "build.id"))?;
        let arn = build
            .arn()
            .ok_or_else(|| AwsError::missing("StartBuild", "build.arn"))?;

        Ok(StartedBuild {
            id: id.to_string(),
            arn: arn.to_string(),
        })
    }
}
