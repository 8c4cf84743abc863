//! Logic module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod markers;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::{
    builds::{resolve_buildspec::ResolveBuildspec, trigger_build::TriggerBuild},
    pulls::{post_build_feedback::PostBuildFeedback, report_build_status::ReportBuildStatus},
};

module! {
    pub CoreModule {
        components = [
            TriggerBuild, ResolveBuildspec,
            ReportBuildStatus, PostBuildFeedback
        ],
        providers = []
    }
}
