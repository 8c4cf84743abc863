mod approval_state;
mod pull_request;

pub use approval_state::ApprovalState;
pub use pull_request::PullRequest;
