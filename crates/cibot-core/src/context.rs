use cibot_awsapi_interface::{BuildService, RepositoryService};
use cibot_config::Config;

use crate::CoreModule;

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub repository_service: &'a (dyn RepositoryService + 'a),
    pub build_service: &'a (dyn BuildService + 'a),
}

#[cfg(any(test, feature = "testkit"))]
pub(crate) mod tests {
    use cibot_awsapi_interface::{MockBuildService, MockRepositoryService};
    use cibot_config::Config;

    use crate::{CoreContext, CoreModule};

    #[allow(dead_code)]
    pub struct CoreContextTest {
        pub config: Config,
        pub core_module: CoreModule,
        pub repository_service: MockRepositoryService,
        pub build_service: MockBuildService,
    }

    impl CoreContextTest {
        #[allow(dead_code)]
        pub fn new() -> Self {
            let mut config = Config::from_env_no_version().unwrap();
            config.build.project_name = "codebuild-cicd".into();
            config.build.load_buildspec_from_default_branch = false;
            config.build.repository_customizations.clear();
            config.pull_requests.events_rule_name = "codebuild-cicd-pull-requests".into();

            Self {
                config,
                core_module: CoreModule::builder().build(),
                repository_service: MockRepositoryService::new(),
                build_service: MockBuildService::new(),
            }
        }

        #[allow(dead_code)]
        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                config: &self.config,
                core_module: &self.core_module,
                repository_service: &self.repository_service,
                build_service: &self.build_service,
            }
        }
    }
}
