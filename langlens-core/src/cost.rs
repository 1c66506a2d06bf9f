//! Cost estimation from token usage.

use tracing::debug;

use crate::models::{CostEstimate, TokenUsage};
use crate::pricing::ModelPricing;

/// Rounds a raw cost to 4 decimal places, half away from zero.
fn round4(cost: f64) -> f64 {
    (cost * 10_000.0).round() / 10_000.0
}

/// Converts a [`TokenUsage`] into a [`CostEstimate`] for the given model.
///
/// Unknown model keys use the default model's rates. Cache input cost is
/// included only when the usage carries cache tokens and the model defines
/// a cache rate; a zero cache cost is omitted rather than reported as 0.
/// Each component is rounded independently after the raw total is summed,
/// so the displayed total can differ from the sum of the displayed parts
/// at the fourth decimal.
pub fn estimate_cost(usage: &TokenUsage, model: &str) -> CostEstimate {
    let pricing = ModelPricing::for_model(model);

    let input_cost = (usage.input_tokens as f64 / 1000.0) * pricing.input;
    let output_cost = (usage.output_tokens as f64 / 1000.0) * pricing.output;

    let mut cache_input_cost = 0.0;
    if let (Some(cache_tokens), Some(cache_rate)) = (usage.cache_input_tokens, pricing.cache_input)
    {
        cache_input_cost = (cache_tokens as f64 / 1000.0) * cache_rate;
    }

    let total_cost = input_cost + cache_input_cost + output_cost;

    debug!(
        model = model,
        input_tokens = usage.input_tokens,
        output_tokens = usage.output_tokens,
        total_cost = total_cost,
        "Estimated cost"
    );

    CostEstimate {
        input_cost: round4(input_cost),
        cache_input_cost: (cache_input_cost > 0.0).then(|| round4(cache_input_cost)),
        output_cost: round4(output_cost),
        total_cost: round4(total_cost),
        currency: "USD".to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
