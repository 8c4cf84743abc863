mod build_arn;
mod build_outcome;
mod build_request;
mod build_status;
mod buildspec;
mod environment_variable;
mod source_type;
mod started_build;

pub use build_arn::BuildArn;
pub use build_outcome::BuildOutcome;
pub use build_request::{BuildRequest, BuildRequestBuilder};
pub use build_status::BuildStatus;
pub use buildspec::Buildspec;
pub use environment_variable::{EnvironmentVariable, EnvironmentVariableType};
pub use source_type::SourceType;
pub use started_build::StartedBuild;
