pub mod builds;
pub mod notifications;
pub mod pulls;
