use cibot_awsapi_interface::types::{
    builds::{BuildOutcome, BuildStatus},
    pulls::ApprovalState,
};

use crate::markers::PullRequestMarkers;

pub const SUCCEEDED_ICON: &str = "\u{2705}";
pub const FAILED_ICON: &str = "\u{274c}";
pub const IN_PROGRESS_ICON: &str = "\u{23f1}";
pub const UNKNOWN_ICON: &str = "\u{2754}";

/// Feedback to publish on a pull request for one build status transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestFeedback {
    pub pull_request_id: String,
    pub repository_name: String,
    pub before_commit_id: String,
    pub after_commit_id: String,
    pub content: String,
    pub approval_state: Option<ApprovalState>,
}

#[derive(Default)]
pub struct BuildFeedbackGenerator {
    _private: (),
}

impl BuildFeedbackGenerator {
    #[tracing::instrument(skip_all, ret)]
    pub fn generate(
        &self,
        outcome: &BuildOutcome,
        markers: &PullRequestMarkers,
    ) -> PullRequestFeedback {
        let content = format!(
            "{icon} CodeBuild build **{status}** for commit `{commit}`: [`{build_id}`]({link})",
            icon = Self::status_icon(&outcome.status),
            status = outcome.status,
            commit = Self::short_commit(&markers.source_commit),
            build_id = outcome.build.build_id(),
            link = Self::build_link(outcome),
        );

        PullRequestFeedback {
            pull_request_id: markers.pull_request_id.clone(),
            repository_name: markers.repository_name.clone(),
            before_commit_id: markers.source_commit.clone(),
            after_commit_id: markers.destination_commit.clone(),
            content,
            approval_state: Self::approval_state(&outcome.status),
        }
    }

    /// Console link to the build, relative to the console host.
    pub fn build_link(outcome: &BuildOutcome) -> String {
        let region = outcome.build.region();
        format!(
            "/codesuite/codebuild/projects/{project}/build/{project}:{build_id}?region={region}",
            project = outcome.project_name,
            build_id = outcome.build.build_id(),
        )
    }

    fn status_icon(status: &BuildStatus) -> &'static str {
        match status {
            BuildStatus::Succeeded => SUCCEEDED_ICON,
            BuildStatus::Failed | BuildStatus::Stopped => FAILED_ICON,
            BuildStatus::InProgress => IN_PROGRESS_ICON,
            _ => UNKNOWN_ICON,
        }
    }

    fn approval_state(status: &BuildStatus) -> Option<ApprovalState> {
        match status {
            BuildStatus::Succeeded => Some(ApprovalState::Approve),
            _ => None,
        }
    }

    fn short_commit(commit: &str) -> &str {
        commit
            .char_indices()
            .nth(8)
            .map(|(idx, _)| &commit[..idx])
            .unwrap_or(commit)
    }
}

#[cfg(test)]
mod tests {
    use cibot_awsapi_interface::types::builds::BuildArn;
    use pretty_assertions::assert_eq;

    use super::*;

    fn outcome(status: BuildStatus) -> BuildOutcome {
        BuildOutcome {
            status,
            build: "arn:aws:codebuild:eu-west-1:111111111111:build/codebuild-cicd:49e2bfa6-2222-47f5-a959-a77e6bf007fd"
                .parse::<BuildArn>()
                .unwrap(),
            project_name: "codebuild-cicd".into(),
        }
    }

    fn markers() -> PullRequestMarkers {
        PullRequestMarkers {
            pull_request_id: "1".into(),
            repository_name: "some-repo".into(),
            source_commit: "5c020b042dd71daa6e6cade586cf862a2e7e4f96".into(),
            destination_commit: "6a3cf62d6b847143c58d8fcbb50dfd61f1ca2450".into(),
        }
    }

    #[test]
    fn succeeded() {
        let feedback = BuildFeedbackGenerator::default()
            .generate(&outcome(BuildStatus::Succeeded), &markers());

        assert_eq!(
            feedback,
            PullRequestFeedback {
                pull_request_id: "1".into(),
                repository_name: "some-repo".into(),
                before_commit_id: "5c020b042dd71daa6e6cade586cf862a2e7e4f96".into(),
                after_commit_id: "6a3cf62d6b847143c58d8fcbb50dfd61f1ca2450".into(),
                content: "\u{2705} CodeBuild build **SUCCEEDED** for commit `5c020b04`: \
                    [`49e2bfa6-2222-47f5-a959-a77e6bf007fd`]\
                    (/codesuite/codebuild/projects/codebuild-cicd/build/codebuild-cicd:49e2bfa6-2222-47f5-a959-a77e6bf007fd?region=eu-west-1)"
                    .into(),
                approval_state: Some(ApprovalState::Approve),
            }
        );
    }

    #[test]
    fn icons() {
        let generator = BuildFeedbackGenerator::default();
        let icon_of = |status| {
            generator
                .generate(&outcome(status), &markers())
                .content
                .split(' ')
                .next()
                .unwrap()
                .to_string()
        };

        assert_eq!(icon_of(BuildStatus::Succeeded), SUCCEEDED_ICON);
        assert_eq!(icon_of(BuildStatus::Failed), FAILED_ICON);
        assert_eq!(icon_of(BuildStatus::Stopped), FAILED_ICON);
        assert_eq!(icon_of(BuildStatus::InProgress), IN_PROGRESS_ICON);
        assert_eq!(icon_of(BuildStatus::Fault), UNKNOWN_ICON);
        assert_eq!(icon_of(BuildStatus::TimedOut), UNKNOWN_ICON);
        assert_eq!(icon_of(BuildStatus::Other("QUEUED".into())), UNKNOWN_ICON);
    }

    #[test]
    fn only_success_approves() {
        let generator = BuildFeedbackGenerator::default();

        for status in [
            BuildStatus::Failed,
            BuildStatus::Stopped,
            BuildStatus::InProgress,
            BuildStatus::Fault,
        ] {
            assert_eq!(
                generator.generate(&outcome(status), &markers()).approval_state,
                None
            );
        }
    }

    #[test]
    fn short_commit() {
        assert_eq!(
            BuildFeedbackGenerator::short_commit("5c020b042dd71daa6e6cade586cf862a2e7e4f96"),
            "5c020b04"
        );
        assert_eq!(BuildFeedbackGenerator::short_commit("5c02"), "5c02");
        assert_eq!(BuildFeedbackGenerator::short_commit("12345678"), "12345678");
    }
}
