use serde::{Deserialize, Serialize};

/// Build descriptor returned on submission.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct StartedBuild {
    /// Build ID (`<project>:<uuid>`).
    pub id: String,
    /// Build ARN.
    pub arn: String,
}
