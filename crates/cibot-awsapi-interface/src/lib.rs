//! AWS API interface: ports used by the CI handlers, and the event and build
//! types flowing through them.

#![warn(clippy::all)]

mod errors;
pub mod files;
mod interface;
pub mod types;

pub use errors::{ApiError, Result};
pub use interface::{BuildService, RepositoryService};
#[cfg(any(test, feature = "testkit"))]
pub use interface::{MockBuildService, MockRepositoryService};
