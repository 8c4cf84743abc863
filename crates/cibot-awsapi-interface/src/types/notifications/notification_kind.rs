use std::{fmt, str::FromStr};

use super::NotificationError;

/// EventBridge `detail-type` of the notifications handled here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// Branch or tag created, updated or deleted.
    RepositoryStateChange,
    /// Pull request created, updated, merged or closed.
    PullRequestStateChange,
    /// Build status transition.
    BuildStateChange,
}

impl NotificationKind {
    /// Convert kind to its `detail-type` value.
    pub fn to_str(self) -> &'static str {
        match self {
            Self::RepositoryStateChange => "CodeCommit Repository State Change",
            Self::PullRequestStateChange => "CodeCommit Pull Request State Change",
            Self::BuildStateChange => "CodeBuild Build State Change",
        }
    }
}

impl FromStr for NotificationKind {
    type Err = NotificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CodeCommit Repository State Change" => Ok(Self::RepositoryStateChange),
            "CodeCommit Pull Request State Change" => Ok(Self::PullRequestStateChange),
            "CodeBuild Build State Change" => Ok(Self::BuildStateChange),
            _ => Err(NotificationError::UnknownKind { kind: s.into() }),
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}
