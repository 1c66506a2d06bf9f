//! Integration tests for the core detection and cost types.

use langlens_core::{estimate_cost, validate_request, DetectionResult, TokenUsage};

#[test]
fn test_detection_result_parse_and_validate() {
    let payload = r#"{
        "languages": [
            {"language": "English", "language_code": "en", "confidence": 0.98, "sample_text": "Hello world"}
        ],
        "primary_language": "English",
        "is_multilingual": false
    }"#;

    let result: DetectionResult = serde_json::from_str(payload).unwrap();
    assert!(result.validate().is_ok());
    assert_eq!(result.primary_finding().unwrap().language_code, "en");
}

#[test]
fn test_validated_request_prices_deterministically() {
    let text = "Hello world, this is English text.";
    let validated = validate_request(text, "sk-test-key-0123456789").unwrap();
    assert_eq!(validated.text, text);

    let usage = TokenUsage::new(1000, 500);
    let first = estimate_cost(&usage, "gpt-4.1-nano");
    let second = estimate_cost(&usage, "gpt-4.1-nano");
    assert_eq!(first.total_cost, second.total_cost);
    assert_eq!(first.total_cost, 0.0003);
}
