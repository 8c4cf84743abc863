use async_trait::async_trait;
use cibot_awsapi_interface::types::{builds::BuildOutcome, notifications::Notification};
use shaku::{Component, HasComponent, Interface};
use tracing::info;

use super::{post_build_feedback::PostBuildFeedbackInterface, utils::PullRequestFeedback};
use crate::{markers::PullRequestMarkers, CoreContext, DomainError, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ReportBuildStatusInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        notification: Notification,
    ) -> Result<Option<PullRequestFeedback>>;
}

/// Report a build status transition on the pull request that started the build.
#[derive(Component)]
#[shaku(interface = ReportBuildStatusInterface)]
pub(crate) struct ReportBuildStatus;

#[async_trait]
impl ReportBuildStatusInterface for ReportBuildStatus {
    #[tracing::instrument(skip_all, fields(kind = %notification.kind()))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        notification: Notification,
    ) -> Result<Option<PullRequestFeedback>> {
        let envelope = match notification {
            Notification::BuildStateChange(envelope) => envelope,
            other => {
                return Err(DomainError::UnexpectedNotification {
                    handler: "report-build-status",
                    kind: other.kind(),
                })
            }
        };

        let markers = PullRequestMarkers::from_environment(
            &envelope
                .detail
                .additional_information
                .environment
                .environment_variables,
        );
        let Some(markers) = markers else {
            info!(
                build_initiator = envelope
                    .detail
                    .additional_information
                    .initiator
                    .as_deref()
                    .unwrap_or("unknown"),
                pull_request_events_rule = %ctx.config.pull_requests.events_rule_name,
                "Did not find pull request attributes in build environment variables, build initiator is likely not the pull request events rule"
            );
            return Ok(None);
        };

        let outcome = BuildOutcome::try_from(envelope.detail)?;

        let post_build_feedback: &dyn PostBuildFeedbackInterface = ctx.core_module.resolve_ref();
        post_build_feedback
            .run(ctx, &outcome, &markers)
            .await
            .map(Some)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use cibot_awsapi_interface::{
        types::{
            builds::{BuildRequest, StartedBuild},
            notifications::NotificationKind,
            pulls::PullRequest,
        },
        MockBuildService, MockRepositoryService,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tracing_test::traced_test;

    use super::*;
    use crate::{
        context::tests::CoreContextTest,
        use_cases::{
            builds::TriggerBuildInterface, pulls::MockPostBuildFeedbackInterface,
        },
        CoreModule,
    };

    const BUILD_ARN: &str = "arn:aws:codebuild:us-east-1:111111111111:build/codebuild-cicd:49e2bfa6-2222-47f5-a959-a77e6bf007fd";

    fn build_event(status: &str, environment_variables: serde_json::Value) -> serde_json::Value {
        json!({
            "version": "0",
            "id": "ca9f54f0-0e11-d15c-f3ff-e27b42d1ec1e",
            "detail-type": "CodeBuild Build State Change",
            "source": "aws.codebuild",
            "account": "111111111111",
            "time": "2023-10-10T20:43:22Z",
            "region": "us-east-1",
            "resources": [BUILD_ARN],
            "detail": {
                "build-status": status,
                "project-name": "codebuild-cicd",
                "build-id": BUILD_ARN,
                "additional-information": {
                    "initiator": "rule/codebuild-cicd-pull-requests",
                    "environment": {
                        "environment-variables": environment_variables
                    }
                }
            }
        })
    }

    fn build_notification(status: &str, environment_variables: serde_json::Value) -> Notification {
        Notification::from_value(build_event(status, environment_variables)).unwrap()
    }

    #[tokio::test]
    async fn uncorrelated_build() {
        // Mocks without expectations fail on any call.
        let ctx = CoreContextTest::new();

        let feedback = ReportBuildStatus
            .run(
                &ctx.as_context(),
                build_notification(
                    "SUCCEEDED",
                    json!([
                        {"name": "CI_REPOSITORY_NAME", "value": "some-repo", "type": "PLAINTEXT"},
                        {"name": "CI_COMMIT_REF_NAME", "value": "main", "type": "PLAINTEXT"}
                    ]),
                ),
            )
            .await
            .unwrap();

        assert_eq!(feedback, None);
    }

    #[traced_test]
    #[tokio::test]
    async fn failed_build_without_markers() {
        let ctx = CoreContextTest::new();

        let feedback = ReportBuildStatus
            .run(
                &ctx.as_context(),
                build_notification(
                    "FAILED",
                    json!([
                        {"name": "CI_REPOSITORY_NAME", "value": "some-repo", "type": "PLAINTEXT"},
                        {"name": "CI_PULL_REQUEST_ID", "value": "", "type": "PLAINTEXT"}
                    ]),
                ),
            )
            .await
            .unwrap();

        assert_eq!(feedback, None);
        assert!(logs_contain("rule/codebuild-cicd-pull-requests"));
        logs_assert(|lines: &[&str]| {
            match lines
                .iter()
                .filter(|line| line.contains("Did not find pull request attributes"))
                .count()
            {
                1 => Ok(()),
                n => Err(format!("expected one diagnostic line, got {n}")),
            }
        });
    }

    #[tokio::test]
    async fn correlated_build() {
        let mut ctx = CoreContextTest::new();
        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn PostBuildFeedbackInterface>(Box::new({
                let mut mock = MockPostBuildFeedbackInterface::new();
                mock.expect_run()
                    .once()
                    .withf(|_, outcome, markers| {
                        outcome.build.build_id() == "49e2bfa6-2222-47f5-a959-a77e6bf007fd"
                            && markers.pull_request_id == "1"
                            && markers.repository_name == "some-repo"
                            && markers.source_commit == "abc"
                            && markers.destination_commit == "def"
                    })
                    .return_once(|_, _, _| {
                        Ok(PullRequestFeedback {
                            pull_request_id: "1".into(),
                            repository_name: "some-repo".into(),
                            before_commit_id: "abc".into(),
                            after_commit_id: "def".into(),
                            content: "comment".into(),
                            approval_state: None,
                        })
                    });
                mock
            }))
            .build();

        let feedback = ReportBuildStatus
            .run(
                &ctx.as_context(),
                build_notification(
                    "FAILED",
                    json!([
                        {"name": "CI_SOURCE_COMMIT", "value": "abc", "type": "PLAINTEXT"},
                        {"name": "CI_PULL_REQUEST_ID", "value": "1", "type": "PLAINTEXT"},
                        {"name": "CI_REPOSITORY_NAME", "value": "some-repo", "type": "PLAINTEXT"},
                        {"name": "CI_DESTINATION_COMMIT", "value": "def", "type": "PLAINTEXT"}
                    ]),
                ),
            )
            .await
            .unwrap();

        assert_eq!(feedback.unwrap().content, "comment");
    }

    #[tokio::test]
    async fn repository_notification_is_rejected() {
        let ctx = CoreContextTest::new();
        let notification = Notification::from_value(json!({
            "version": "0",
            "id": "3f7101d2-f1c4-d0a4-6d89-69fc887cc5e4",
            "detail-type": "CodeCommit Repository State Change",
            "source": "aws.codecommit",
            "account": "111111111111",
            "time": "2023-10-10T21:05:45Z",
            "region": "us-east-1",
            "resources": ["arn:aws:codecommit:us-east-1:111111111111:some-repo"],
            "detail": {
                "event": "referenceUpdated",
                "referenceName": "main",
                "referenceType": "branch"
            }
        }))
        .unwrap();

        let err = ReportBuildStatus
            .run(&ctx.as_context(), notification)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DomainError::UnexpectedNotification {
                kind: NotificationKind::RepositoryStateChange,
                ..
            }
        ));
    }

    /// Markers written on a pull request build are read back from the build event.
    #[tokio::test]
    async fn pull_request_markers_round_trip() {
        let captured: Arc<Mutex<Option<BuildRequest>>> = Arc::new(Mutex::new(None));

        let mut ctx = CoreContextTest::new();
        ctx.build_service = {
            let captured = captured.clone();
            let mut svc = MockBuildService::new();
            svc.expect_builds_start().once().returning(move |request| {
                *captured.lock().unwrap() = Some(request.clone());
                Ok(StartedBuild::default())
            });
            svc
        };

        let trigger_build: &dyn TriggerBuildInterface = ctx.core_module.resolve_ref();
        trigger_build
            .run(
                &ctx.as_context(),
                Notification::from_value(json!({
                    "version": "0",
                    "id": "6d29aaa0-f4a6-7745-6ec1-cf1587935aef",
                    "detail-type": "CodeCommit Pull Request State Change",
                    "source": "aws.codecommit",
                    "account": "111111111111",
                    "time": "2023-10-10T21:33:04Z",
                    "region": "us-east-1",
                    "resources": ["arn:aws:codecommit:us-east-1:111111111111:some-repo"],
                    "detail": {
                        "destinationCommit": "6a3cf62d6b847143c58d8fcbb50dfd61f1ca2450",
                        "destinationReference": "refs/heads/main",
                        "event": "pullRequestSourceBranchUpdated",
                        "pullRequestId": "7",
                        "sourceCommit": "5c020b042dd71daa6e6cade586cf862a2e7e4f96",
                        "sourceReference": "refs/heads/feature-branch"
                    }
                }))
                .unwrap(),
            )
            .await
            .unwrap();

        let request = captured.lock().unwrap().take().unwrap();
        let echoed = serde_json::to_value(&request.environment_variables).unwrap();

        ctx.repository_service = {
            let mut svc = MockRepositoryService::new();
            svc.expect_pulls_get()
                .once()
                .withf(|pull_request_id| pull_request_id == "7")
                .return_once(|_| {
                    Ok(PullRequest {
                        pull_request_id: "7".into(),
                        revision_id: "rev-1".into(),
                    })
                });
            svc.expect_pulls_post_comment()
                .once()
                .withf(|pull_request_id, repository_name, before, after, content| {
                    pull_request_id == "7"
                        && repository_name == "some-repo"
                        && before == "5c020b042dd71daa6e6cade586cf862a2e7e4f96"
                        && after == "6a3cf62d6b847143c58d8fcbb50dfd61f1ca2450"
                        && content.contains("for commit `5c020b04`")
                })
                .return_once(|_, _, _, _, _| Ok(()));
            svc
        };

        let feedback = ReportBuildStatus
            .run(&ctx.as_context(), build_notification("IN_PROGRESS", echoed))
            .await
            .unwrap();

        assert!(feedback.is_some());
    }

    #[tokio::test]
    async fn invalid_build_arn() {
        let ctx = CoreContextTest::new();
        let mut event = build_event(
            "SUCCEEDED",
            json!([
                {"name": "CI_SOURCE_COMMIT", "value": "abc", "type": "PLAINTEXT"},
                {"name": "CI_PULL_REQUEST_ID", "value": "1", "type": "PLAINTEXT"},
                {"name": "CI_REPOSITORY_NAME", "value": "some-repo", "type": "PLAINTEXT"},
                {"name": "CI_DESTINATION_COMMIT", "value": "def", "type": "PLAINTEXT"}
            ]),
        );
        event["detail"]["build-id"] = json!("not-an-arn");

        let err = ReportBuildStatus
            .run(&ctx.as_context(), Notification::from_value(event).unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotificationError { .. }));
    }
}
