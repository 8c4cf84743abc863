use async_trait::async_trait;
use cibot_awsapi_interface::types::builds::BuildOutcome;
use shaku::{Component, Interface};
use tracing::info;

use super::utils::{BuildFeedbackGenerator, PullRequestFeedback};
use crate::{markers::PullRequestMarkers, CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait PostBuildFeedbackInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        outcome: &BuildOutcome,
        markers: &PullRequestMarkers,
    ) -> Result<PullRequestFeedback>;
}

#[derive(Component)]
#[shaku(interface = PostBuildFeedbackInterface)]
pub(crate) struct PostBuildFeedback;

#[async_trait]
impl PostBuildFeedbackInterface for PostBuildFeedback {
    #[tracing::instrument(skip(self, ctx), fields(build = %outcome.build, status = %outcome.status))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        outcome: &BuildOutcome,
        markers: &PullRequestMarkers,
    ) -> Result<PullRequestFeedback> {
        let pull_request = ctx
            .repository_service
            .pulls_get(&markers.pull_request_id)
            .await?;

        let feedback = BuildFeedbackGenerator::default().generate(outcome, markers);

        if let Some(approval_state) = feedback.approval_state {
            info!(
                pull_request_id = %feedback.pull_request_id,
                revision_id = %pull_request.revision_id,
                approval_state = approval_state.to_str(),
                "Updating pull request approval state"
            );

            ctx.repository_service
                .pulls_update_approval_state(
                    &feedback.pull_request_id,
                    &pull_request.revision_id,
                    approval_state,
                )
                .await?;
        }

        info!(
            pull_request_id = %feedback.pull_request_id,
            content = %feedback.content,
            "Posting build status comment"
        );

        ctx.repository_service
            .pulls_post_comment(
                &feedback.pull_request_id,
                &feedback.repository_name,
                &feedback.before_commit_id,
                &feedback.after_commit_id,
                &feedback.content,
            )
            .await?;

        Ok(feedback)
    }
}
