use serde::{Deserialize, Serialize};

/// CodeCommit pull request.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PullRequest {
    /// ID.
    pub pull_request_id: String,
    /// Current revision, required to approve.
    pub revision_id: String,
}
