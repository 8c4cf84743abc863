//! Logic errors.

use cibot_awsapi_interface::types::notifications::{NotificationError, NotificationKind};
use thiserror::Error;

/// Logic error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`cibot_awsapi_interface::ApiError`].
    #[error("API error: {source}")]
    ApiError {
        source: cibot_awsapi_interface::ApiError,
    },

    /// Wraps [`NotificationError`].
    #[error("Invalid notification: {source}")]
    NotificationError { source: NotificationError },

    /// The event routing sent a notification kind this handler does not handle.
    #[error("Unexpected event received by {handler}, detail-type: '{kind}'")]
    UnexpectedNotification {
        handler: &'static str,
        kind: NotificationKind,
    },
}

impl From<cibot_awsapi_interface::ApiError> for DomainError {
    fn from(e: cibot_awsapi_interface::ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

impl From<NotificationError> for DomainError {
    fn from(e: NotificationError) -> Self {
        Self::NotificationError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
