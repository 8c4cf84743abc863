use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_codecommit::{primitives::Blob, types, Client};
use cibot_awsapi_interface::{
    types::pulls::{ApprovalState, PullRequest},
    RepositoryService, Result,
};

use crate::AwsError;

/// CodeCommit repository service.
#[derive(Clone, Debug)]
pub struct AwsRepositoryService {
    client: Client,
}

impl AwsRepositoryService {
    /// Build a CodeCommit repository service.
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }
}

fn sdk_approval_state(state: ApprovalState) -> types::ApprovalState {
    match state {
        ApprovalState::Approve => types::ApprovalState::Approve,
        ApprovalState::Revoke => types::ApprovalState::Revoke,
    }
}

#[async_trait]
impl RepositoryService for AwsRepositoryService {
    #[tracing::instrument(skip(self), ret)]
    async fn repositories_get_default_branch(&self, repository_name: &str) -> Result<String> {
        let output = self
            .client
            .get_repository()
            .repository_name(repository_name)
            .send()
            .await
            .map_err(AwsError::codecommit)?;

        let default_branch = output
            .repository_metadata()
            .and_then(|metadata| metadata.default_branch())
            .ok_or_else(|| AwsError::missing("GetRepository", "repositoryMetadata.defaultBranch"))?;

        Ok(default_branch.to_string())
    }

    #[tracing::instrument(skip(self))]
    async fn files_get_content(
        &self,
        repository_name: &str,
        commit_specifier: &str,
        file_path: &str,
    ) -> Result<Vec<u8>> {
        let output = self
            .client
            .get_file()
            .repository_name(repository_name)
            .commit_specifier(commit_specifier)
            .file_path(file_path)
            .send()
            .await
            .map_err(AwsError::codecommit)?;

        let content: Option<Blob> = output.file_content.into();
        let content = content.ok_or_else(|| AwsError::missing("GetFile", "fileContent"))?;

        Ok(content.into_inner())
    }

    #[tracing::instrument(skip(self), ret)]
    async fn pulls_get(&self, pull_request_id: &str) -> Result<PullRequest> {
        let output = self
            .client
            .get_pull_request()
            .pull_request_id(pull_request_id)
            .send()
            .await
            .map_err(AwsError::codecommit)?;

        let pull_request: Option<types::PullRequest> = output.pull_request.into();
        let pull_request =
            pull_request.ok_or_else(|| AwsError::missing("GetPullRequest", "pullRequest"))?;
        let revision_id = pull_request
            .revision_id()
            .ok_or_else(|| AwsError::missing("GetPullRequest", "pullRequest.revisionId"))?;

        Ok(PullRequest {
            pull_request_id: pull_request
                .pull_request_id()
                .unwrap_or(pull_request_id)
                .to_string(),
            revision_id: revision_id.to_string(),
        })
    }

    #[tracing::instrument(skip(self))]
    async fn pulls_update_approval_state(
        &self,
        pull_request_id: &str,
        revision_id: &str,
        approval_state: ApprovalState,
    ) -> Result<()> {
        self.client
            .update_pull_request_approval_state()
            .pull_request_id(pull_request_id)
            .revision_id(revision_id)
            .approval_state(sdk_approval_state(approval_state))
            .send()
            .await
            .map_err(AwsError::codecommit)?;

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
        self.client
            .post_comment_for_pull_request()
            .pull_request_id(pull_request_id)
            .repository_name(repository_name)
            .before_commit_id(before_commit_id)
            .after_commit_id(after_commit_id)
            .content(content)
            .send()
            .await
            .map_err(AwsError::codecommit)?;

        Ok(())
    }
}
