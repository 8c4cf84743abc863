use async_trait::async_trait;
use cibot_awsapi_interface::types::{
    builds::{BuildRequest, BuildRequestBuilder, Buildspec, SourceType, StartedBuild},
    notifications::{
        Notification, NotificationEnvelope, PullRequestStateChangeDetail, ReferenceType,
        RepositoryStateChangeDetail,
    },
};
use shaku::{Component, HasComponent, Interface};
use tracing::info;

use super::{
    resolve_buildspec::ResolveBuildspecInterface,
    utils::{codecommit_source_location, service_role_name, DEFAULT_BUILDSPEC},
};
use crate::{markers, CoreContext, DomainError, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait TriggerBuildInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        notification: Notification,
    ) -> Result<Option<StartedBuild>>;
}

/// Start a build for a default branch update or any pull request change.
#[derive(Component)]
#[shaku(interface = TriggerBuildInterface)]
pub(crate) struct TriggerBuild;

#[async_trait]
impl TriggerBuildInterface for TriggerBuild {
    #[tracing::instrument(skip_all, fields(kind = %notification.kind()))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        notification: Notification,
    ) -> Result<Option<StartedBuild>> {
        let request = match notification {
            Notification::RepositoryStateChange(envelope) => {
                match self.default_branch_request(ctx, &envelope).await? {
                    Some(request) => request,
                    None => return Ok(None),
                }
            }
            Notification::PullRequestStateChange(envelope) => {
                self.pull_request_request(ctx, &envelope).await?
            }
            other => {
                return Err(DomainError::UnexpectedNotification {
                    handler: "trigger-build",
                    kind: other.kind(),
                })
            }
        };

        info!(
            build_request = %serde_json::to_string(&request).unwrap_or_default(),
            "Starting CodeBuild build"
        );

        let build = ctx.build_service.builds_start(&request).await?;

        info!(build_arn = %build.arn, "CodeBuild build started");
        Ok(Some(build))
    }
}

impl TriggerBuild {
    async fn default_branch_request<'a>(
        &self,
        ctx: &CoreContext<'a>,
        envelope: &NotificationEnvelope<RepositoryStateChangeDetail>,
    ) -> Result<Option<BuildRequest>> {
        let repository_name = envelope.resource_name()?;
        let detail = &envelope.detail;
        let default_branch = ctx
            .repository_service
            .repositories_get_default_branch(repository_name)
            .await?;

        if detail.reference_type != ReferenceType::Branch || detail.reference_name != default_branch
        {
            info!(
                repository_name = repository_name,
                reference_type = ?detail.reference_type,
                reference_name = %detail.reference_name,
                default_branch = %default_branch,
                "Reference is not the default branch, skipping build"
            );
            return Ok(None);
        }

        Ok(Some(
            Self::base_request(
                ctx,
                &envelope.region,
                repository_name,
                Buildspec::Reference(DEFAULT_BUILDSPEC.into()),
            )
            .environment_variable(markers::COMMIT_REF_NAME, &detail.reference_name)
            .source_version(&detail.reference_name)
            .build(),
        ))
    }

    async fn pull_request_request<'a>(
        &self,
        ctx: &CoreContext<'a>,
        envelope: &NotificationEnvelope<PullRequestStateChangeDetail>,
    ) -> Result<BuildRequest> {
        let repository_name = envelope.resource_name()?;
        let detail = &envelope.detail;

        let resolve_buildspec: &dyn ResolveBuildspecInterface = ctx.core_module.resolve_ref();
        let buildspec = resolve_buildspec.run(ctx, repository_name).await?;

        Ok(
            Self::base_request(ctx, &envelope.region, repository_name, buildspec)
                .environment_variable(markers::COMMIT_REF_NAME, detail.source_branch_name())
                .environment_variable(markers::DESTINATION_COMMIT, &detail.destination_commit)
                .environment_variable(markers::PULL_REQUEST_ID, &detail.pull_request_id)
                .environment_variable(markers::SOURCE_COMMIT, &detail.source_commit)
                .source_version(&detail.source_commit)
                .build(),
        )
    }

    fn base_request(
        ctx: &CoreContext<'_>,
        region: &str,
        repository_name: &str,
        buildspec: Buildspec,
    ) -> BuildRequestBuilder {
        let mut builder = BuildRequest::builder(
            &ctx.config.build.project_name,
            SourceType::CodeCommit,
            codecommit_source_location(region, repository_name),
            buildspec,
        )
        .environment_variable(markers::REPOSITORY_NAME, repository_name);

        if let Some(role_arn) = ctx
            .config
            .build
            .customization_for(repository_name)
            .and_then(|c| c.codebuild_service_role_arn.as_deref())
        {
            builder = builder.service_role(service_role_name(role_arn));
        }

        builder
    }
}
