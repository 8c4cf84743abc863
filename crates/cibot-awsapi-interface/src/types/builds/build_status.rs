use std::fmt;

use serde::{Deserialize, Serialize};

/// CodeBuild build status.
///
/// Statuses this crate does not know are kept verbatim in [`BuildStatus::Other`].
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum BuildStatus {
    /// Succeeded.
    Succeeded,
    /// Failed.
    Failed,
    /// Fault.
    Fault,
    /// Timed out.
    TimedOut,
    /// In progress.
    InProgress,
    /// Stopped.
    Stopped,
    /// Unknown status.
    Other(String),
}

impl BuildStatus {
    /// Status as sent by CodeBuild.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Succeeded => "SUCCEEDED",
            Self::Failed => "FAILED",
            Self::Fault => "FAULT",
            Self::TimedOut => "TIMED_OUT",
            Self::InProgress => "IN_PROGRESS",
            Self::Stopped => "STOPPED",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for BuildStatus {
    fn from(value: String) -> Self {
        match &value[..] {
            "SUCCEEDED" => Self::Succeeded,
            "FAILED" => Self::Failed,
            "FAULT" => Self::Fault,
            "TIMED_OUT" => Self::TimedOut,
            "IN_PROGRESS" => Self::InProgress,
            "STOPPED" => Self::Stopped,
            _ => Self::Other(value),
        }
    }
}

impl From<BuildStatus> for String {
    fn from(status: BuildStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
