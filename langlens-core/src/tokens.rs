//! Token counting for cost display.
//!
//! Counts are advisory, not billing-accurate: they back the cost estimate
//! shown to the user before and after a detection call.

use tiktoken_rs::{cl100k_base, get_bpe_from_model};
use tracing::{debug, warn};

/// Counts the tokens `text` would consume under `model`'s tokenizer.
///
/// Uses the model-specific BPE when tiktoken knows the model, otherwise the
/// `cl100k_base` encoding. When no tokenizer can be constructed at all, the
/// word-count approximation (1 token per 0.75 words) is used instead. Never
/// panics; returns 0 for empty text and a positive count otherwise.
pub fn count_tokens(text: &str, model: &str) -> u64 {
    if text.is_empty() {
        return 0;
    }

    let bpe = match get_bpe_from_model(model) {
        Ok(bpe) => Some(bpe),
        Err(_) => {
            debug!(model = model, "No model-specific tokenizer, trying cl100k_base");
            cl100k_base().ok()
        }
    };

    match bpe {
        Some(bpe) => bpe.encode_with_special_tokens(text).len() as u64,
        None => {
            warn!(model = model, "Tokenizer unavailable, using word approximation");
            approximate_tokens(text)
        }
    }
}

/// Approximates a token count as `ceil(word_count / 0.75)`.
fn approximate_tokens(text: &str) -> u64 {
    let word_count = text.split_whitespace().count() as f64;
    (word_count / 0.75).ceil() as u64
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_zero() {
        assert_eq!(count_tokens("", "gpt-4"), 0);
    }

    #[test]
    fn test_nonempty_text_is_positive() {
        assert!(count_tokens("Hello world, this is English text.", "gpt-4") > 0);
    }

    #[test]
    fn test_unknown_model_still_counts() {
        let known = count_tokens("Hello world", "gpt-4");
        let unknown = count_tokens("Hello world", "some-unknown-model");
        assert!(unknown > 0);
        // Both resolve to a real tokenizer, so counts stay in the same ballpark
        assert!(unknown <= known * 2);
    }

    #[test]
    fn test_approximation_rounds_up() {
        // 2 words / 0.75 = 2.67 -> 3
        assert_eq!(approximate_tokens("hello world"), 3);
        // 3 words / 0.75 = 4 exactly
        assert_eq!(approximate_tokens("one two three"), 4);
    }

    #[test]
    fn test_approximation_never_negative() {
        assert_eq!(approximate_tokens("   "), 0);
    }
}
