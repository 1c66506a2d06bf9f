//! Serde serialization/deserialization tests for core types.
//!
//! These tests verify the wire shapes of the core types: detection results
//! parse from the provider's snake_case payload, while usage and cost types
//! serialize to camelCase for display layers.

use crate::{CostEstimate, DetectionResult, QueueStats, TokenUsage};

// ============================================================================
// DetectionResult Serde Tests
// ============================================================================

#[test]
fn test_detection_result_deserialize_provider_payload() {
    let json = r#"{
        "languages": [
            {"language": "English", "language_code": "en", "confidence": 0.98, "sample_text": "Hello world"}
        ],
        "primary_language": "English",
        "is_multilingual": false
    }"#;

    let result: DetectionResult = serde_json::from_str(json).unwrap();
    assert_eq!(result.languages.len(), 1);
    assert_eq!(result.languages[0].language_code, "en");
    assert_eq!(result.languages[0].confidence, 0.98);
    assert_eq!(result.primary_language, "English");
    assert!(!result.is_multilingual);
}

#[test]
fn test_detection_result_missing_primary_language_fails() {
    let json = r#"{
        "languages": [],
        "is_multilingual": false
    }"#;

    let result: Result<DetectionResult, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn test_detection_result_missing_languages_fails() {
    let json = r#"{
        "primary_language": "English",
        "is_multilingual": false
    }"#;

    let result: Result<DetectionResult, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn test_detection_result_roundtrip() {
    let json = r#"{
        "languages": [
            {"language": "French", "language_code": "fr", "confidence": 0.7, "sample_text": "Bonjour"},
            {"language": "German", "language_code": "de", "confidence": 0.4, "sample_text": "Hallo"}
        ],
        "primary_language": "French",
        "is_multilingual": true
    }"#;

    let result: DetectionResult = serde_json::from_str(json).unwrap();
    let serialized = serde_json::to_string(&result).unwrap();
    let reparsed: DetectionResult = serde_json::from_str(&serialized).unwrap();

    assert_eq!(reparsed.languages.len(), 2);
    assert!(reparsed.is_multilingual);
}

// ============================================================================
// TokenUsage / CostEstimate Serde Tests
// ============================================================================

#[test]
fn test_token_usage_camel_case() {
    let usage = TokenUsage::new(1000, 500);
    let json = serde_json::to_value(&usage).unwrap();

    assert_eq!(json["inputTokens"], 1000);
    assert_eq!(json["outputTokens"], 500);
    assert_eq!(json["totalTokens"], 1500);
    // Absent cache tokens must not serialize
    assert!(json.get("cacheInputTokens").is_none());
}

#[test]
fn test_cost_estimate_omits_absent_cache_cost() {
    let estimate = CostEstimate {
        input_cost: 0.0001,
        cache_input_cost: None,
        output_cost: 0.0002,
        total_cost: 0.0003,
        currency: "USD".to_string(),
    };

    let json = serde_json::to_value(&estimate).unwrap();
    assert!(json.get("cacheInputCost").is_none());
    assert_eq!(json["currency"], "USD");
}

#[test]
fn test_cost_estimate_includes_present_cache_cost() {
    let estimate = CostEstimate {
        input_cost: 0.0001,
        cache_input_cost: Some(0.0005),
        output_cost: 0.0002,
        total_cost: 0.0008,
        currency: "USD".to_string(),
    };

    let json = serde_json::to_value(&estimate).unwrap();
    assert_eq!(json["cacheInputCost"], 0.0005);
}

// ============================================================================
// QueueStats Serde Tests
// ============================================================================

#[test]
fn test_queue_stats_deserialize() {
    let json = r#"{"active": 2, "waiting": 5, "delayed": 0, "completed": 100, "failed": 3}"#;
    let stats: QueueStats = serde_json::from_str(json).unwrap();

    assert_eq!(stats.active, 2);
    assert_eq!(stats.completed, 100);
    assert_eq!(stats.total(), 110);
}

#[test]
fn test_queue_stats_negative_counter_fails() {
    let json = r#"{"active": -1, "waiting": 0, "delayed": 0, "completed": 0, "failed": 0}"#;
    let result: Result<QueueStats, _> = serde_json::from_str(json);
    assert!(result.is_err());
}
