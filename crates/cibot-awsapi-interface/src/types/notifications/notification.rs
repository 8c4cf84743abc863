use std::str::FromStr;

use serde::{de::DeserializeOwned, Deserialize};

use super::{
    BuildStateChangeDetail, NotificationError, NotificationKind, PullRequestStateChangeDetail,
    RepositoryStateChangeDetail,
};

/// Top-level EventBridge fields the handlers read.
///
/// Everything else (`id`, `time`, `account`, ...) is ignored.
#[derive(Debug, Deserialize)]
struct RawEnvelope {
    #[serde(rename = "detail-type")]
    detail_type: Option<String>,
    region: Option<String>,
    #[serde(default)]
    resources: Vec<String>,
    detail: Option<serde_json::Value>,
}

/// EventBridge envelope with a typed detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEnvelope<D> {
    /// Region the event was emitted in.
    pub region: String,
    /// Associated resource ARNs.
    pub resources: Vec<String>,
    /// Detail.
    pub detail: D,
}

impl<D> NotificationEnvelope<D> {
    /// Name of the sole associated resource: last `:` segment of its ARN.
    pub fn resource_name(&self) -> Result<&str, NotificationError> {
        self.resources
            .first()
            .and_then(|arn| arn.rsplit(':').next())
            .filter(|name| !name.is_empty())
            .ok_or(NotificationError::MissingResource)
    }
}

impl<D: DeserializeOwned> NotificationEnvelope<D> {
    fn parse(
        kind: NotificationKind,
        region: String,
        resources: Vec<String>,
        detail: serde_json::Value,
    ) -> Result<Self, NotificationError> {
        Ok(Self {
            region,
            resources,
            detail: serde_json::from_value(detail)
                .map_err(|e| NotificationError::InvalidDetail { kind, source: e })?,
        })
    }
}

/// Inbound notification, one variant per handled kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// `CodeCommit Repository State Change`.
    RepositoryStateChange(NotificationEnvelope<RepositoryStateChangeDetail>),
    /// `CodeCommit Pull Request State Change`.
    PullRequestStateChange(NotificationEnvelope<PullRequestStateChangeDetail>),
    /// `CodeBuild Build State Change`.
    BuildStateChange(NotificationEnvelope<BuildStateChangeDetail>),
}

impl Notification {
    /// Parse a raw EventBridge event.
    ///
    /// CodeCommit notifications need `region` to locate the repository.
    /// Build notifications carry their region in the build ARN, so only the
    /// detail is required for them.
    pub fn from_value(value: serde_json::Value) -> Result<Self, NotificationError> {
        let event: RawEnvelope = serde_json::from_value(value)
            .map_err(|e| NotificationError::InvalidEnvelope { source: e })?;

        let detail_type = event.detail_type.ok_or(NotificationError::MissingField {
            field: "detail-type",
        })?;
        let kind = NotificationKind::from_str(&detail_type)?;
        let detail = event
            .detail
            .ok_or(NotificationError::MissingField { field: "detail" })?;
        let resources = event.resources;
        let region = event.region;
        let required_region =
            |region: Option<String>| region.ok_or(NotificationError::MissingField { field: "region" });

        Ok(match kind {
            NotificationKind::RepositoryStateChange => Self::RepositoryStateChange(
                NotificationEnvelope::parse(kind, required_region(region)?, resources, detail)?,
            ),
            NotificationKind::PullRequestStateChange => Self::PullRequestStateChange(
                NotificationEnvelope::parse(kind, required_region(region)?, resources, detail)?,
            ),
            NotificationKind::BuildStateChange => Self::BuildStateChange(
                NotificationEnvelope::parse(kind, region.unwrap_or_default(), resources, detail)?,
            ),
        })
    }

    /// Kind of the notification.
    pub fn kind(&self) -> NotificationKind {
        match self {
            Self::RepositoryStateChange(_) => NotificationKind::RepositoryStateChange,
            Self::PullRequestStateChange(_) => NotificationKind::PullRequestStateChange,
            Self::BuildStateChange(_) => NotificationKind::BuildStateChange,
        }
    }
}
