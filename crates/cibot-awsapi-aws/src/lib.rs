//! AWS driver for the CI handlers: CodeCommit and CodeBuild over the AWS SDK.

#![warn(clippy::all)]

mod codebuild;
mod codecommit;
mod errors;

use aws_config::{BehaviorVersion, Region, SdkConfig};
use cibot_config::Config;
pub use codebuild::AwsBuildService;
pub use codecommit::AwsRepositoryService;
pub use errors::AwsError;

/// Load the shared SDK configuration for the configured region.
///
/// Credentials come from the default provider chain (the Lambda execution
/// role in production).
pub async fn load_sdk_config(config: &Config) -> SdkConfig {
    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.api.aws.region.clone()))
        .load()
        .await
}
