use super::{BuildArn, BuildStatus};
use crate::types::notifications::{BuildStateChangeDetail, NotificationError};

/// One build status transition, as reported by CodeBuild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutcome {
    /// Status.
    pub status: BuildStatus,
    /// Build ARN.
    pub build: BuildArn,
    /// Project name.
    pub project_name: String,
}

impl TryFrom<BuildStateChangeDetail> for BuildOutcome {
    type Error = NotificationError;

    fn try_from(detail: BuildStateChangeDetail) -> Result<Self, Self::Error> {
        Ok(Self {
            status: detail.build_status,
            build: detail.build_id.parse()?,
            project_name: detail.project_name,
        })
    }
}
