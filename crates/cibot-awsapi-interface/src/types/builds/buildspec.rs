use serde::Serialize;

/// Buildspec override, sent as-is to CodeBuild.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Buildspec {
    /// Path of a buildspec file inside the source.
    Reference(String),
    /// Inline buildspec content.
    Content(String),
}

impl Buildspec {
    /// Value passed as the buildspec override.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Reference(s) | Self::Content(s) => s,
        }
    }
}
