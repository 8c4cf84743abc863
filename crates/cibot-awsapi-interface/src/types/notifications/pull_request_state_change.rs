use serde::{Deserialize, Serialize};

/// Detail of a `CodeCommit Pull Request State Change` event.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestStateChangeDetail {
    /// Pull request ID.
    pub pull_request_id: String,
    /// Source reference (e.g. `refs/heads/feature-branch`).
    pub source_reference: String,
    /// Source commit.
    pub source_commit: String,
    /// Destination commit.
    pub destination_commit: String,
    /// Destination reference.
    pub destination_reference: Option<String>,
    /// Event (`pullRequestCreated`, `pullRequestSourceBranchUpdated`, ...).
    pub event: Option<String>,
    /// Status (`Open`, `Closed`).
    pub pull_request_status: Option<String>,
    /// Merged flag, as a string.
    pub is_merged: Option<String>,
    /// Title.
    pub title: Option<String>,
    /// Repository names.
    #[serde(default)]
    pub repository_names: Vec<String>,
}

impl PullRequestStateChangeDetail {
    /// Last path segment of the source reference.
    pub fn source_branch_name(&self) -> &str {
        self.source_reference
            .rsplit('/')
            .next()
            .unwrap_or(&self.source_reference)
    }
}
