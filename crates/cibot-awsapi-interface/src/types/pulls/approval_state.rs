use serde::{Deserialize, Serialize};

/// CodeCommit pull request approval state.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalState {
    /// Approve.
    Approve,
    /// Revoke a previous approval.
    Revoke,
}

impl ApprovalState {
    /// Convert approval state to static str.
    pub fn to_str(self) -> &'static str {
        match self {
            Self::Approve => "APPROVE",
            Self::Revoke => "REVOKE",
        }
    }
}
