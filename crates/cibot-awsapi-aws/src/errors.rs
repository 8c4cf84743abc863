use cibot_awsapi_interface::ApiError;

#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum AwsError {
    #[error(transparent)]
    CodeCommitError { source: aws_sdk_codecommit::Error },

    #[error(transparent)]
    CodeBuildError { source: aws_sdk_codebuild::Error },

    #[error("Invalid build request: {source}")]
    InvalidRequestError {
        source: aws_sdk_codebuild::error::BuildError,
    },

    #[error("Missing '{}' in {} response", field, operation)]
    MissingFieldError {
        operation: &'static str,
        field: &'static str,
    },
}

impl AwsError {
    pub(crate) fn codecommit(e: impl Into<aws_sdk_codecommit::Error>) -> Self {
        Self::CodeCommitError { source: e.into() }
    }

    pub(crate) fn codebuild(e: impl Into<aws_sdk_codebuild::Error>) -> Self {
        Self::CodeBuildError { source: e.into() }
    }

    pub(crate) fn missing(operation: &'static str, field: &'static str) -> Self {
        Self::MissingFieldError { operation, field }
    }
}

impl From<aws_sdk_codebuild::error::BuildError> for AwsError {
    fn from(e: aws_sdk_codebuild::error::BuildError) -> Self {
        AwsError::InvalidRequestError { source: e }
    }
}

impl From<AwsError> for ApiError {
    fn from(e: AwsError) -> Self {
        ApiError::ImplementationError { source: e.into() }
    }
}
