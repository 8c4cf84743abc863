use async_trait::async_trait;
use cibot_awsapi_interface::{files::FileApi, types::builds::Buildspec};
use shaku::{Component, Interface};
use tracing::info;

use super::utils::DEFAULT_BUILDSPEC;
use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ResolveBuildspecInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, repository_name: &str) -> Result<Buildspec>;
}

/// Choose the buildspec of a pull request build.
///
/// Either the in-source path, or the inline content of the default branch
/// buildspec so a pull request cannot alter its own build definition.
#[derive(Component)]
#[shaku(interface = ResolveBuildspecInterface)]
pub(crate) struct ResolveBuildspec;

#[async_trait]
impl ResolveBuildspecInterface for ResolveBuildspec {
    #[tracing::instrument(skip(self, ctx), fields(repository_name))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, repository_name: &str) -> Result<Buildspec> {
        if !ctx.config.build.load_buildspec_from_default_branch {
            return Ok(Buildspec::Reference(DEFAULT_BUILDSPEC.into()));
        }

        let default_branch = ctx
            .repository_service
            .repositories_get_default_branch(repository_name)
            .await?;

        info!(
            repository_name = repository_name,
            default_branch = default_branch,
            "Loading buildspec from default branch"
        );

        let content = FileApi::get_text_file(
            ctx.repository_service,
            repository_name,
            &default_branch,
            DEFAULT_BUILDSPEC,
        )
        .await?;

        Ok(Buildspec::Content(content))
    }
}
