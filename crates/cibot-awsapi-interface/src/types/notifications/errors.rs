use thiserror::Error;

use super::NotificationKind;

/// Notification parsing error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Malformed event envelope: {source}")]
    InvalidEnvelope { source: serde_json::Error },

    #[error("Missing field '{field}' in event")]
    MissingField { field: &'static str },

    #[error("Unexpected event received, detail-type: '{kind}'")]
    UnknownKind { kind: String },

    #[error("Malformed '{kind}' event detail: {source}")]
    InvalidDetail {
        kind: NotificationKind,
        source: serde_json::Error,
    },

    #[error("Event has no associated resource")]
    MissingResource,

    #[error("Malformed build ARN: '{arn}'")]
    InvalidBuildArn { arn: String },
}
