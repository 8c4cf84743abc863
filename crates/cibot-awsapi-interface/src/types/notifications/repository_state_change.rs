use serde::{Deserialize, Serialize};

/// Git reference type.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceType {
    /// Branch.
    #[default]
    Branch,
    /// Tag.
    Tag,
    /// Anything else.
    #[serde(other)]
    Other,
}

/// Detail of a `CodeCommit Repository State Change` event.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryStateChangeDetail {
    /// Event (`referenceCreated`, `referenceUpdated`, `referenceDeleted`).
    pub event: String,
    /// Reference type.
    pub reference_type: ReferenceType,
    /// Reference short name (e.g. `main`).
    pub reference_name: String,
    /// Reference full name (e.g. `refs/heads/main`).
    pub reference_full_name: Option<String>,
    /// New commit.
    pub commit_id: Option<String>,
    /// Previous commit.
    pub old_commit_id: Option<String>,
    /// Repository name.
    pub repository_name: Option<String>,
    /// Caller ARN.
    pub caller_user_arn: Option<String>,
}
