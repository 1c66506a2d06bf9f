// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Langlens Core
//!
//! Core types, validation, and cost accounting for the Langlens application.
//!
//! This crate provides the foundational abstractions used across all other
//! Langlens crates, including:
//!
//! - Domain models (detection results, token usage, queue stats)
//! - Error types
//! - Request validation
//! - Token counting and cost estimation
//!
//! ## Key Types
//!
//! ### Detection Types
//! - [`DetectionResult`] - Normalized language-detection output
//! - [`LanguageFinding`] - A single detected language with confidence
//!
//! ### Cost Accounting
//! - [`TokenUsage`] - Input/cache/output token counts for one call
//! - [`CostEstimate`] - Priced token usage in USD
//! - [`ModelPricing`] - Per-1K-token rates for a model
//!
//! ### Queue Stats
//! - [`QueueStats`] - Snapshot of remote job-queue counters

pub mod cost;
pub mod error;
pub mod models;
pub mod pricing;
pub mod tokens;
pub mod validate;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{
    // Detection types
    DetectionResult,
    LanguageFinding,
    // Cost accounting
    CostEstimate,
    TokenUsage,
    // Queue stats
    QueueStats,
};

// Re-export core operations
pub use cost::estimate_cost;
pub use pricing::{ModelPricing, DEFAULT_MODEL};
pub use tokens::count_tokens;
pub use validate::{validate_request, ValidationError};
