mod feedback_generator;

pub use feedback_generator::{BuildFeedbackGenerator, PullRequestFeedback};
