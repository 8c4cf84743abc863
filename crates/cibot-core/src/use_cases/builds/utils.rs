/// Buildspec path, relative to the repository root.
pub const DEFAULT_BUILDSPEC: &str = "buildspec.yml";

/// HTTPS clone URL of a CodeCommit repository.
pub fn codecommit_source_location(region: &str, repository_name: &str) -> String {
    format!("https://git-codecommit.{region}.amazonaws.com/v1/repos/{repository_name}")
}

/// Role name from a role ARN: everything after the last `/`.
pub fn service_role_name(role_arn: &str) -> &str {
    role_arn.rsplit('/').next().unwrap_or(role_arn)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn source_location() {
        assert_eq!(
            codecommit_source_location("eu-west-3", "some-repo"),
            "https://git-codecommit.eu-west-3.amazonaws.com/v1/repos/some-repo"
        );
    }

    #[test]
    fn role_name() {
        assert_eq!(
            service_role_name("arn:aws:iam::111111111111:role/service-role/ci-role"),
            "ci-role"
        );
        assert_eq!(service_role_name("ci-role"), "ci-role");
    }
}
