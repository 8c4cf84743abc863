pub(crate) mod post_build_feedback;
pub(crate) mod report_build_status;
pub(crate) mod utils;

pub use post_build_feedback::PostBuildFeedbackInterface;
pub use report_build_status::ReportBuildStatusInterface;
pub use utils::{BuildFeedbackGenerator, PullRequestFeedback};

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    post_build_feedback::MockPostBuildFeedbackInterface,
    report_build_status::MockReportBuildStatusInterface,
};
