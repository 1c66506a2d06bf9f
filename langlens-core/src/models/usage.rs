//! Cost-accounting types.
//!
//! This module contains the types flowing through the cost estimator:
//! - [`TokenUsage`] - Token counts for a single provider call
//! - [`CostEstimate`] - The priced result, in USD

use serde::{Deserialize, Serialize};

// ============================================================================
// Token Usage
// ============================================================================

/// Token counts for a single provider call.
///
/// Comes either from the provider's own `usage` block or from a local
/// tokenizer estimate. `total_tokens` is expected to equal the sum of the
/// parts; this is not cross-checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUsage {
    /// Input (prompt) tokens.
    pub input_tokens: u64,
    /// Cached input tokens, for models that report them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_input_tokens: Option<u64>,
    /// Output (completion) tokens.
    pub output_tokens: u64,
    /// Total tokens as reported by the provider.
    pub total_tokens: u64,
}

impl TokenUsage {
    /// Creates a usage record from input and output counts.
    pub fn new(input_tokens: u64, output_tokens: u64) -> Self {
        Self {
            input_tokens,
            cache_input_tokens: None,
            output_tokens,
            total_tokens: input_tokens + output_tokens,
        }
    }

    /// Computes the total from components, preferring the reported total.
    pub fn computed_total(&self) -> u64 {
        if self.total_tokens > 0 {
            return self.total_tokens;
        }
        self.input_tokens + self.cache_input_tokens.unwrap_or(0) + self.output_tokens
    }
}

// ============================================================================
// Cost Estimate
// ============================================================================

/// Monetary estimate derived from a [`TokenUsage`].
///
/// Never persisted; recomputed per call from the static pricing table.
/// All amounts are rounded to 4 decimal places. `cache_input_cost` is
/// absent, not zero, when the model has no cache rate or no cache tokens
/// were used, so display layers can render it conditionally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    /// Cost of input tokens.
    pub input_cost: f64,
    /// Cost of cached input tokens, when applicable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_input_cost: Option<f64>,
    /// Cost of output tokens.
    pub output_cost: f64,
    /// Total cost across all components.
    pub total_cost: f64,
    /// Currency label. Always "USD".
    pub currency: String,
}

impl CostEstimate {
    /// Formats a cost amount for display.
    ///
    /// Amounts below a hundredth of a cent render as "<$0.0001".
    pub fn format_amount(cost: f64) -> String {
        if cost < 0.0001 {
            return "<$0.0001".to_string();
        }
        format!("${cost:.4}")
    }
}

/// Formats a token count for display (e.g., 1500 -> "1.5K").
pub fn format_token_count(count: u64) -> String {
    if count < 1000 {
        return count.to_string();
    }
    format!("{:.1}K", count as f64 / 1000.0)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_new_sums_total() {
        let usage = TokenUsage::new(1000, 500);
        assert_eq!(usage.total_tokens, 1500);
        assert_eq!(usage.computed_total(), 1500);
    }

    #[test]
    fn test_computed_total_from_parts() {
        let usage = TokenUsage {
            input_tokens: 100,
            cache_input_tokens: Some(50),
            output_tokens: 25,
            total_tokens: 0,
        };
        assert_eq!(usage.computed_total(), 175);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(CostEstimate::format_amount(0.00005), "<$0.0001");
        assert_eq!(CostEstimate::format_amount(0.0003), "$0.0003");
        assert_eq!(CostEstimate::format_amount(1.5), "$1.5000");
    }

    #[test]
    fn test_format_token_count() {
        assert_eq!(format_token_count(999), "999");
        assert_eq!(format_token_count(1500), "1.5K");
        assert_eq!(format_token_count(12345), "12.3K");
    }
}
