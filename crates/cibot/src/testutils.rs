use std::{io::Write, sync::Arc};

use cibot_awsapi_interface::{MockBuildService, MockRepositoryService};
use cibot_config::Config;
use cibot_core::CoreModule;
use clap::Parser;
use tokio::sync::RwLock;

use crate::{
    args::{Args, CommandExecutor},
    commands::CommandContext,
};

pub(crate) struct CommandContextTest {
    pub config: Config,
    pub core_module: CoreModule,
    pub repository_service: MockRepositoryService,
    pub build_service: MockBuildService,
}

impl CommandContextTest {
    pub fn new() -> Self {
        let mut config = Config::from_env_no_version().unwrap();
        config.build.project_name = "ci".into();
        config.build.load_buildspec_from_default_branch = false;
        config.build.repository_customizations.clear();

        Self {
            config,
            core_module: CoreModule::builder().build(),
            repository_service: MockRepositoryService::new(),
            build_service: MockBuildService::new(),
        }
    }

    pub fn into_context(self, writer: Arc<RwLock<dyn Write + Send + Sync>>) -> CommandContext {
        CommandContext {
            config: self.config,
            core_module: self.core_module,
            repository_service: Box::new(self.repository_service),
            build_service: Box::new(self.build_service),
            writer,
        }
    }
}

pub(crate) async fn test_command(ctx: CommandContextTest, command_args: &[&str]) -> String {
    let buf = Arc::new(RwLock::new(Vec::new()));

    {
        let command_args = {
            let mut tmp_args = vec!["cibot"];
            tmp_args.extend(command_args);
            tmp_args
        };

        let args = Args::try_parse_from(command_args);
        match args {
            Ok(args) => CommandExecutor::parse_args_async(args, ctx.into_context(buf.clone()))
                .await
                .unwrap(),
            Err(e) => {
                eprintln!("{}", e);
                panic!("Parse error.")
            }
        }
    }

    let vec = buf.read().await.to_vec();
    std::str::from_utf8(&vec).unwrap().to_string()
}
