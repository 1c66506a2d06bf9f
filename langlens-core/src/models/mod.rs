//! Domain models for Langlens.
//!
//! This module contains the core data structures representing detection
//! results, token usage, cost estimates, and queue statistics. All of them
//! are value types owned by the call that produced them; nothing here is
//! shared across concurrent operations.
//!
//! ## Submodules
//!
//! - [`detection`] - Detection types (`DetectionResult`, `LanguageFinding`)
//! - [`usage`] - Cost accounting (`TokenUsage`, `CostEstimate`)
//! - [`stats`] - Queue statistics (`QueueStats`)

mod detection;
mod stats;
mod usage;

// Re-export everything at the models level
pub use detection::{DetectionResult, LanguageFinding};
pub use stats::QueueStats;
pub use usage::{format_token_count, CostEstimate, TokenUsage};

#[cfg(test)]
mod serde_tests;
