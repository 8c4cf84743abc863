pub(crate) mod resolve_buildspec;
pub(crate) mod trigger_build;
pub(crate) mod utils;

pub use resolve_buildspec::ResolveBuildspecInterface;
pub use trigger_build::TriggerBuildInterface;
pub use utils::{codecommit_source_location, service_role_name, DEFAULT_BUILDSPEC};

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    resolve_buildspec::MockResolveBuildspecInterface, trigger_build::MockTriggerBuildInterface,
};
