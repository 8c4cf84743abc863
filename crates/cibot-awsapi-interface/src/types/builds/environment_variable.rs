use serde::{Deserialize, Serialize};

/// CodeBuild environment variable type.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnvironmentVariableType {
    /// Plain text value.
    #[default]
    Plaintext,
    /// Systems Manager parameter name.
    ParameterStore,
    /// Secrets Manager secret reference.
    SecretsManager,
}

/// CodeBuild environment variable.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentVariable {
    /// Name.
    pub name: String,
    /// Value.
    pub value: String,
    /// Type.
    #[serde(rename = "type", default)]
    pub variable_type: EnvironmentVariableType,
}

impl EnvironmentVariable {
    /// Build a plain text variable.
    pub fn plaintext(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            variable_type: EnvironmentVariableType::Plaintext,
        }
    }
}
