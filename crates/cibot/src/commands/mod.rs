//! Commands.

use std::{io::Write, sync::Arc};

use async_trait::async_trait;
use cibot_awsapi_interface::{BuildService, RepositoryService};
use cibot_config::Config;
use cibot_core::{CoreContext, CoreModule};
use clap::Subcommand;
use tokio::sync::RwLock;

use self::{lambda::LambdaCommand, replay::ReplayCommand};
use crate::Result;

mod lambda;
mod replay;

pub(crate) struct CommandContext {
    pub config: Config,
    pub core_module: CoreModule,
    pub repository_service: Box<dyn RepositoryService>,
    pub build_service: Box<dyn BuildService>,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            repository_service: self.repository_service.as_ref(),
            build_service: self.build_service.as_ref(),
        }
    }
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Lambda(LambdaCommand),
    Replay(ReplayCommand),
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Lambda(sub) => sub.execute(ctx).await,
            Self::Replay(sub) => sub.execute(ctx).await,
        }
    }
}
