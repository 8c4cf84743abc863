//! Null driver for AWS API.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use cibot_awsapi_interface::{
    types::{
        builds::{BuildRequest, StartedBuild},
        pulls::{ApprovalState, PullRequest},
    },
    BuildService, RepositoryService, Result,
};

/// Default branch reported for every repository.
pub const NULL_DEFAULT_BRANCH: &str = "main";

/// Null repository service.
#[derive(Clone, Default)]
pub struct NullRepositoryService {
    _private: (),
}

impl NullRepositoryService {
    /// Build a null repository service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl RepositoryService for NullRepositoryService {
    #[tracing::instrument(skip(self), ret)]
    async fn repositories_get_default_branch(&self, repository_name: &str) -> Result<String> {
        Ok(NULL_DEFAULT_BRANCH.into())
    }

    #[tracing::instrument(skip(self))]
    async fn files_get_content(
        &self,
        repository_name: &str,
        commit_specifier: &str,
        file_path: &str,
    ) -> Result<Vec<u8>> {
        Ok(vec![])
    }

    #[tracing::instrument(skip(self), ret)]
    async fn pulls_get(&self, pull_request_id: &str) -> Result<PullRequest> {
        Ok(PullRequest {
            pull_request_id: pull_request_id.into(),
            revision_id: "0".into(),
        })
    }

    #[tracing::instrument(skip(self))]
    async fn pulls_update_approval_state(
        &self,
        pull_request_id: &str,
        revision_id: &str,
        approval_state: ApprovalState,
    ) -> Result<()> {
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn pulls_post_comment(
        &self,
        pull_request_id: &str,
        repository_name: &str,
        before_commit_id: &str,
        after_commit_id: &str,
        content: &str,
    ) -> Result<()> {
        Ok(())
    }
}

/// Null build service.
#[derive(Clone, Default)]
pub struct NullBuildService {
    _private: (),
}

impl NullBuildService {
    /// Build a null build service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl BuildService for NullBuildService {
    #[tracing::instrument(skip_all, fields(project_name = %request.project_name), ret)]
    async fn builds_start(&self, request: &BuildRequest) -> Result<StartedBuild> {
        let id = format!("{}:00000000-0000-0000-0000-000000000000", request.project_name);

        Ok(StartedBuild {
            arn: format!("arn:aws:codebuild:null:000000000000:build/{}", id),
            id,
        })
    }
}
