//! Response normalization for the detection flow.
//!
//! The provider does not fix the shape of the assistant text in its
//! response: the first output item may carry it in a content-part list, a
//! direct text field, a direct string content field, or may itself be a
//! string. The extractor probes those four shapes in that fixed order and
//! takes the first non-empty match; the content-part list goes first
//! because it is the provider's primary documented format.

use langlens_core::DetectionResult;
use serde_json::Value;
use tracing::debug;

use crate::error::FetchError;

/// Extracts assistant text from the first output item of a raw response.
///
/// Returns `None` when the response has no output items or no probe shape
/// yields a non-empty string.
pub fn extract_output_text(response: &Value) -> Option<&str> {
    let entry = response.get("output")?.as_array()?.first()?;

    // (a) content-part list: output[0].content[0].text
    if let Some(text) = entry
        .get("content")
        .and_then(Value::as_array)
        .and_then(|parts| parts.first())
        .and_then(|part| part.get("text"))
        .and_then(Value::as_str)
    {
        if !text.is_empty() {
            return Some(text);
        }
    }

    // (b) direct text field: output[0].text
    if let Some(text) = entry.get("text").and_then(Value::as_str) {
        if !text.is_empty() {
            return Some(text);
        }
    }

    // (c) direct string content: output[0].content
    if let Some(text) = entry.get("content").and_then(Value::as_str) {
        if !text.is_empty() {
            return Some(text);
        }
    }

    // (d) the entry itself is a string
    if let Some(text) = entry.as_str() {
        if !text.is_empty() {
            return Some(text);
        }
    }

    None
}

/// Normalizes a raw provider response into a [`DetectionResult`].
///
/// Either a fully valid result is produced or a typed failure is returned;
/// no fields are defaulted and nothing is retried. Offending payload text
/// is logged for diagnostics but never surfaced to the user.
///
/// # Errors
///
/// - [`FetchError::UnexpectedFormat`] when no probe shape yields text.
/// - [`FetchError::MalformedPayload`] when the text is not valid JSON, is
///   missing a required field, or fails result validation.
pub fn normalize_response(response: &Value) -> Result<DetectionResult, FetchError> {
    let Some(text) = extract_output_text(response) else {
        debug!(response = %response, "No text content found in response");
        return Err(FetchError::UnexpectedFormat);
    };

    let result: DetectionResult = serde_json::from_str(text).map_err(|e| {
        debug!(error = %e, payload = text, "Failed to parse detection payload");
        FetchError::MalformedPayload
    })?;

    result.validate().map_err(|e| {
        debug!(error = %e, payload = text, "Detection payload failed validation");
        FetchError::MalformedPayload
    })?;

    Ok(result)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ANSWER: &str = r#"{"languages":[{"language":"English","language_code":"en","confidence":0.98,"sample_text":"Hello world"}],"primary_language":"English","is_multilingual":false}"#;

    fn assert_expected(result: &DetectionResult) {
        assert_eq!(result.languages.len(), 1);
        assert_eq!(result.languages[0].confidence, 0.98);
        assert_eq!(result.primary_language, "English");
        assert!(!result.is_multilingual);
    }

    #[test]
    fn test_shape_a_content_parts() {
        let response = json!({
            "output": [{"content": [{"type": "output_text", "text": ANSWER}]}]
        });
        assert_expected(&normalize_response(&response).unwrap());
    }

    #[test]
    fn test_shape_b_direct_text() {
        let response = json!({"output": [{"text": ANSWER}]});
        assert_expected(&normalize_response(&response).unwrap());
    }

    #[test]
    fn test_shape_c_string_content() {
        let response = json!({"output": [{"content": ANSWER}]});
        assert_expected(&normalize_response(&response).unwrap());
    }

    #[test]
    fn test_shape_d_entry_is_string() {
        let response = json!({"output": [ANSWER]});
        assert_expected(&normalize_response(&response).unwrap());
    }

    #[test]
    fn test_all_shapes_agree() {
        let responses = [
            json!({"output": [{"content": [{"text": ANSWER}]}]}),
            json!({"output": [{"text": ANSWER}]}),
            json!({"output": [{"content": ANSWER}]}),
            json!({"output": [ANSWER]}),
        ];

        let parsed: Vec<DetectionResult> = responses
            .iter()
            .map(|r| normalize_response(r).unwrap())
            .collect();

        for result in &parsed {
            assert_expected(result);
        }
    }

    #[test]
    fn test_probe_order_prefers_content_parts() {
        // Both shape (a) and shape (b) present: (a) wins
        let response = json!({
            "output": [{
                "content": [{"text": ANSWER}],
                "text": "{\"not\": \"the answer\"}"
            }]
        });
        assert_expected(&normalize_response(&response).unwrap());
    }

    #[test]
    fn test_empty_text_falls_through_to_next_shape() {
        let response = json!({
            "output": [{
                "content": [{"text": ""}],
                "text": ANSWER
            }]
        });
        assert_expected(&normalize_response(&response).unwrap());
    }

    #[test]
    fn test_missing_output_is_unexpected_format() {
        assert!(matches!(
            normalize_response(&json!({})),
            Err(FetchError::UnexpectedFormat)
        ));
        assert!(matches!(
            normalize_response(&json!({"output": []})),
            Err(FetchError::UnexpectedFormat)
        ));
    }

    #[test]
    fn test_unparseable_text_is_malformed_payload() {
        let response = json!({"output": [{"text": "not json at all"}]});
        assert!(matches!(
            normalize_response(&response),
            Err(FetchError::MalformedPayload)
        ));
    }

    #[test]
    fn test_missing_primary_language_is_malformed_payload() {
        let payload = r#"{"languages":[{"language":"English","language_code":"en","confidence":0.98,"sample_text":"Hi"}],"is_multilingual":false}"#;
        let response = json!({"output": [{"text": payload}]});
        assert!(matches!(
            normalize_response(&response),
            Err(FetchError::MalformedPayload)
        ));
    }

    #[test]
    fn test_empty_languages_is_malformed_payload() {
        let payload = r#"{"languages":[],"primary_language":"English","is_multilingual":false}"#;
        let response = json!({"output": [{"text": payload}]});
        assert!(matches!(
            normalize_response(&response),
            Err(FetchError::MalformedPayload)
        ));
    }
}
