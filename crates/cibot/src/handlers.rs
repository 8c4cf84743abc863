//! Event handlers exposed by the binary.

use cibot_awsapi_interface::types::notifications::Notification;
use cibot_core::{
    use_cases::{builds::TriggerBuildInterface, pulls::ReportBuildStatusInterface},
    CoreContext, DomainError,
};
use clap::ValueEnum;
use serde_json::{json, Value};
use shaku::HasComponent;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum HandlerKind {
    /// Start a build from a repository or pull request change
    TriggerBuild,
    /// Report a build status on its pull request
    ReportBuildStatus,
}

impl HandlerKind {
    /// Handle one raw EventBridge event.
    ///
    /// Returns a JSON summary of what was done, `null` when nothing was.
    #[tracing::instrument(skip(ctx, event))]
    pub async fn handle(self, ctx: &CoreContext<'_>, event: Value) -> Result<Value, DomainError> {
        debug!(event = %event, "Received event");

        let notification = Notification::from_value(event)?;
        match self {
            Self::TriggerBuild => {
                let trigger_build: &dyn TriggerBuildInterface = ctx.core_module.resolve_ref();
                let build = trigger_build.run(ctx, notification).await?;

                Ok(build
                    .map(|build| json!({ "buildId": build.id, "buildArn": build.arn }))
                    .unwrap_or(Value::Null))
            }
            Self::ReportBuildStatus => {
                let report_build_status: &dyn ReportBuildStatusInterface =
                    ctx.core_module.resolve_ref();
                let feedback = report_build_status.run(ctx, notification).await?;

                Ok(feedback
                    .map(|feedback| {
                        json!({
                            "pullRequestId": feedback.pull_request_id,
                            "repositoryName": feedback.repository_name,
                            "approvalState": feedback.approval_state.map(|s| s.to_str()),
                            "content": feedback.content,
                        })
                    })
                    .unwrap_or(Value::Null))
            }
        }
    }
}
