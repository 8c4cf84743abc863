use std::{fmt, str::FromStr};

use crate::types::notifications::NotificationError;

/// Parsed CodeBuild build ARN.
///
/// Format: `arn:aws:codebuild:<region>:<account>:build/<project>:<build id>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildArn {
    arn: String,
    region: String,
    build_id: String,
}

impl BuildArn {
    /// Full ARN.
    pub fn arn(&self) -> &str {
        &self.arn
    }

    /// Region the build ran in.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Trailing build identifier (without the project prefix).
    pub fn build_id(&self) -> &str {
        &self.build_id
    }
}

impl FromStr for BuildArn {
    type Err = NotificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || NotificationError::InvalidBuildArn { arn: s.into() };

        let elements: Vec<&str> = s.split(':').collect();
        if elements.len() < 5 {
            return Err(invalid());
        }

        let region = elements[3];
        let build_id = elements[elements.len() - 1];
        if region.is_empty() || build_id.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            arn: s.into(),
            region: region.into(),
            build_id: build_id.into(),
        })
    }
}

impl fmt::Display for BuildArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.arn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        let arn: BuildArn = "arn:aws:codebuild:us-east-1:111111111111:build/codebuild-cicd:49e2bfa6-2222-47f5-a959-a77e6bf007fd"
            .parse()
            .unwrap();

        assert_eq!(arn.region(), "us-east-1");
        assert_eq!(arn.build_id(), "49e2bfa6-2222-47f5-a959-a77e6bf007fd");
    }

    #[test]
    fn parse_invalid() {
        assert!("codebuild-cicd:49e2bfa6".parse::<BuildArn>().is_err());
        assert!("arn:aws:codebuild::111111111111:build/x:y"
            .parse::<BuildArn>()
            .is_err());
        assert!("arn:aws:codebuild:us-east-1:111111111111:"
            .parse::<BuildArn>()
            .is_err());
    }
}
