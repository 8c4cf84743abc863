pub mod builds;
pub mod pulls;
