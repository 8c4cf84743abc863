mod build_state_change;
mod errors;
mod notification;
mod notification_kind;
mod pull_request_state_change;
mod repository_state_change;

pub use build_state_change::{
    BuildAdditionalInformation, BuildEnvironment, BuildStateChangeDetail,
};
pub use errors::NotificationError;
pub use notification::{Notification, NotificationEnvelope};
pub use notification_kind::NotificationKind;
pub use pull_request_state_change::PullRequestStateChangeDetail;
pub use repository_state_change::{ReferenceType, RepositoryStateChangeDetail};
