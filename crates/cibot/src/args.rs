use std::sync::Arc;

use cibot_awsapi_aws::{load_sdk_config, AwsBuildService, AwsRepositoryService};
use cibot_awsapi_interface::{BuildService, RepositoryService};
use cibot_awsapi_null::{NullBuildService, NullRepositoryService};
use cibot_config::{ApiDriver, Config};
use cibot_core::CoreModule;
use clap::Parser;
use tokio::sync::RwLock;
use tracing::info;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    Result,
};

#[derive(Parser)]
#[command(about = None, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let sync = |config: Config, args: Args| async move {
            let core_module = CoreModule::builder().build();

            let (repository_service, build_service): (
                Box<dyn RepositoryService>,
                Box<dyn BuildService>,
            ) = {
                if config.api.driver == ApiDriver::Aws {
                    info!(region = %config.api.aws.region, "Using AWS API driver");
                    let sdk_config = load_sdk_config(&config).await;
                    (
                        Box::new(AwsRepositoryService::new(&sdk_config)),
                        Box::new(AwsBuildService::new(&sdk_config)),
                    )
                } else {
                    info!("Using Null API driver");
                    (
                        Box::new(NullRepositoryService::new()),
                        Box::new(NullBuildService::new()),
                    )
                }
            };

            let ctx = CommandContext {
                config,
                core_module,
                repository_service,
                build_service,
                writer: Arc::new(RwLock::new(std::io::stdout())),
            };

            Self::parse_args_async(args, ctx).await
        };

        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(sync(config, args))
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}
