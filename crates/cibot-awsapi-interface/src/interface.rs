use async_trait::async_trait;

use crate::{
    types::{
        builds::{BuildRequest, StartedBuild},
        pulls::{ApprovalState, PullRequest},
    },
    Result,
};

/// Source control (CodeCommit) adapter interface.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait RepositoryService: Send + Sync {
    /// Get the default branch name of a repository.
    async fn repositories_get_default_branch(&self, repository_name: &str) -> Result<String>;
    /// Get raw file content at a commit specifier (branch, tag or commit).
    async fn files_get_content(
        &self,
        repository_name: &str,
        commit_specifier: &str,
        file_path: &str,
    ) -> Result<Vec<u8>>;
    /// Get a pull request from its ID.
    async fn pulls_get(&self, pull_request_id: &str) -> Result<PullRequest>;
    /// Update the approval state of a pull request, pinned to a revision.
    async fn pulls_update_approval_state(
        &self,
        pull_request_id: &str,
        revision_id: &str,
        approval_state: ApprovalState,
    ) -> Result<()>;
    /// Post a comment on a pull request.
    async fn pulls_post_comment(
        &self,
        pull_request_id: &str,
        repository_name: &str,
        before_commit_id: &str,
        after_commit_id: &str,
        content: &str,
    ) -> Result<()>;
}

/// Build (CodeBuild) adapter interface.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait BuildService: Send + Sync {
    /// Start a build.
    async fn builds_start(&self, request: &BuildRequest) -> Result<StartedBuild>;
}
