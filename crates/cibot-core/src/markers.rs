//! Build environment markers.
//!
//! Pull request builds carry these variables so the build status event can be
//! correlated back to the pull request that started it.

use std::collections::HashMap;

use cibot_awsapi_interface::types::builds::EnvironmentVariable;

/// Repository name, set on every triggered build.
pub const REPOSITORY_NAME: &str = "CI_REPOSITORY_NAME";
/// Branch name: the default branch, or the pull request source branch.
pub const COMMIT_REF_NAME: &str = "CI_COMMIT_REF_NAME";
/// Pull request destination commit.
pub const DESTINATION_COMMIT: &str = "CI_DESTINATION_COMMIT";
/// Pull request ID.
pub const PULL_REQUEST_ID: &str = "CI_PULL_REQUEST_ID";
/// Pull request source commit.
pub const SOURCE_COMMIT: &str = "CI_SOURCE_COMMIT";

/// Pull request attributes recovered from a build environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestMarkers {
    pub pull_request_id: String,
    pub repository_name: String,
    pub source_commit: String,
    pub destination_commit: String,
}

impl PullRequestMarkers {
    /// Recover markers from build environment variables.
    ///
    /// Returns `None` unless all four markers are present and non-empty.
    /// Order does not matter, and the last occurrence of a name wins.
    pub fn from_environment(variables: &[EnvironmentVariable]) -> Option<Self> {
        let values: HashMap<&str, &str> = variables
            .iter()
            .map(|v| (v.name.as_str(), v.value.as_str()))
            .collect();
        let get = |name: &str| {
            values
                .get(name)
                .filter(|value| !value.is_empty())
                .map(|value| value.to_string())
        };

        Some(Self {
            pull_request_id: get(PULL_REQUEST_ID)?,
            repository_name: get(REPOSITORY_NAME)?,
            source_commit: get(SOURCE_COMMIT)?,
            destination_commit: get(DESTINATION_COMMIT)?,
        })
    }
}
