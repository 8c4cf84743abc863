use serde::{Deserialize, Serialize};

/// CodeBuild source type.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceType {
    /// CodeCommit repository.
    #[default]
    #[serde(rename = "CODECOMMIT")]
    CodeCommit,
}
