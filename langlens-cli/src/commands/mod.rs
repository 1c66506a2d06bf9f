//! CLI command implementations.

pub mod detect;
pub mod status;
pub mod watch;
