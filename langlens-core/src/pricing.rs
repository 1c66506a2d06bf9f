//! Static per-model pricing table.
//!
//! Prices are per 1,000 tokens, in USD, as published by OpenAI. The table
//! is advisory (display-only), not billing-accurate.

/// Model key used when a requested model is absent from the table.
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Per-1K-token rates for a single model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelPricing {
    /// USD per 1K input tokens.
    pub input: f64,
    /// USD per 1K cached input tokens, for models that discount cache hits.
    pub cache_input: Option<f64>,
    /// USD per 1K output tokens.
    pub output: f64,
}

impl ModelPricing {
    /// Looks up the rates for a model key.
    ///
    /// Unknown keys fall back to [`DEFAULT_MODEL`]'s rates. The fallback is
    /// deterministic: the same key always yields the same rates.
    pub fn for_model(model: &str) -> Self {
        match model {
            "gpt-4" => Self {
                input: 0.03,
                cache_input: None,
                output: 0.06,
            },
            "gpt-4-turbo" => Self {
                input: 0.01,
                cache_input: None,
                output: 0.03,
            },
            "gpt-3.5-turbo" => Self {
                input: 0.0015,
                cache_input: None,
                output: 0.002,
            },
            // $0.10/1M input, $0.025/1M cache input, $0.40/1M output
            "gpt-4.1-nano" => Self {
                input: 0.0001,
                cache_input: Some(0.000_025),
                output: 0.0004,
            },
            _ => Self::for_model(DEFAULT_MODEL),
        }
    }

    /// Returns all model keys present in the table.
    pub fn known_models() -> &'static [&'static str] {
        &["gpt-4", "gpt-4-turbo", "gpt-3.5-turbo", "gpt-4.1-nano"]
    }
}

// ============================================================================
// Tests
// ============================================================================
