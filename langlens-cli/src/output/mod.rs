//! Output formatting for CLI.

mod json;
mod text;

pub use json::{DetectOutput, JsonFormatter, StatsOutput};
pub use text::TextFormatter;
