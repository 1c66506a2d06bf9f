//! OpenAI detection client.

use langlens_core::{DetectionResult, TokenUsage};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::client::HttpClient;
use crate::error::FetchError;
use crate::normalize::normalize_response;

// ============================================================================
// Constants
// ============================================================================

/// OpenAI API base URL.
const OPENAI_API_BASE: &str = "https://api.openai.com";

/// Responses endpoint.
const RESPONSES_ENDPOINT: &str = "/v1/responses";

/// Stored prompt driving the detection. The prompt text itself lives on the
/// provider side and is referenced by id and version.
const PROMPT_ID: &str = "pmpt_685956450e0881979624cfdc2b9f2bb800ef8bfdcd611bd5";

/// Version of the stored prompt.
const PROMPT_VERSION: &str = "1";

/// Bound on the size of the generated answer.
const MAX_OUTPUT_TOKENS: u32 = 2048;

// ============================================================================
// Request Types
// ============================================================================

#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
    prompt: PromptRef,
    input: Vec<InputMessage<'a>>,
    max_output_tokens: u32,
    store: bool,
}

#[derive(Debug, Serialize)]
struct PromptRef {
    id: &'static str,
    version: &'static str,
}

#[derive(Debug, Serialize)]
struct InputMessage<'a> {
    role: &'static str,
    content: Vec<InputContent<'a>>,
}

#[derive(Debug, Serialize)]
struct InputContent<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: &'a str,
}

// ============================================================================
// Response Usage
// ============================================================================

/// The `usage` block of a Responses API reply.
#[derive(Debug, Deserialize)]
struct ResponseUsage {
    #[serde(default)]
    input_tokens: Option<u64>,
    #[serde(default)]
    output_tokens: Option<u64>,
    #[serde(default)]
    total_tokens: Option<u64>,
    #[serde(default)]
    input_tokens_details: Option<InputTokensDetails>,
}

#[derive(Debug, Deserialize)]
struct InputTokensDetails {
    #[serde(default)]
    cached_tokens: Option<u64>,
}

impl ResponseUsage {
    fn to_token_usage(&self) -> Option<TokenUsage> {
        let input_tokens = self.input_tokens?;
        let output_tokens = self.output_tokens?;

        // A zero cached count is reported as absent, matching the cost
        // estimator's conditional cache pricing.
        let cache_input_tokens = self
            .input_tokens_details
            .as_ref()
            .and_then(|d| d.cached_tokens)
            .filter(|&t| t > 0);

        Some(TokenUsage {
            input_tokens,
            cache_input_tokens,
            output_tokens,
            total_tokens: self.total_tokens.unwrap_or(input_tokens + output_tokens),
        })
    }
}

// ============================================================================
// Detection Client
// ============================================================================

/// Outcome of a successful detection call.
#[derive(Debug, Clone)]
pub struct Detection {
    /// The normalized detection result.
    pub result: DetectionResult,
    /// Token usage as reported by the provider, when present.
    pub usage: Option<TokenUsage>,
}

/// Client for the OpenAI Responses API detection call.
#[derive(Debug, Clone, Default)]
pub struct DetectionClient {
    http: HttpClient,
}

impl DetectionClient {
    /// Creates a new client.
    pub fn new() -> Result<Self, FetchError> {
        Ok(Self {
            http: HttpClient::new()?,
        })
    }

    /// Sends validated text to the provider and normalizes the reply.
    ///
    /// The caller is responsible for validating the text and credential
    /// first; this method performs no validation of its own.
    ///
    /// # Errors
    ///
    /// Transport failures, provider rejections (401/429/quota), and payload
    /// errors all map onto [`FetchError`]; see the crate error taxonomy.
    #[instrument(skip(self, text, api_key), fields(text_len = text.len()))]
    pub async fn detect(&self, text: &str, api_key: &str) -> Result<Detection, FetchError> {
        debug!("Sending detection request to OpenAI");

        let request = ResponsesRequest {
            prompt: PromptRef {
                id: PROMPT_ID,
                version: PROMPT_VERSION,
            },
            input: vec![InputMessage {
                role: "user",
                content: vec![InputContent {
                    kind: "input_text",
                    text,
                }],
            }],
            max_output_tokens: MAX_OUTPUT_TOKENS,
            store: true,
        };

        let url = format!("{OPENAI_API_BASE}{RESPONSES_ENDPOINT}");
        let response = self
            .http
            .post_json_with_auth(&url, api_key, &request)
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Detection request rejected");
            return Err(classify_failure(status, &body));
        }

        let body: Value = response.json().await?;
        debug!(
            output_len = body.get("output").and_then(serde_json::Value::as_array).map_or(0, Vec::len),
            "Received response from OpenAI"
        );

        let usage = body
            .get("usage")
            .cloned()
            .and_then(|u| serde_json::from_value::<ResponseUsage>(u).ok())
            .and_then(|u| u.to_token_usage());

        let result = normalize_response(&body)?;
        Ok(Detection { result, usage })
    }
}

/// Maps a non-success provider reply onto the error taxonomy.
fn classify_failure(status: reqwest::StatusCode, body: &str) -> FetchError {
    match status {
        reqwest::StatusCode::UNAUTHORIZED => FetchError::Unauthorized,
        reqwest::StatusCode::TOO_MANY_REQUESTS => {
            if body.contains("insufficient_quota") {
                FetchError::QuotaExhausted
            } else {
                FetchError::RateLimited
            }
        }
        _ => FetchError::from_provider_message(body),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = ResponsesRequest {
            prompt: PromptRef {
                id: PROMPT_ID,
                version: PROMPT_VERSION,
            },
            input: vec![InputMessage {
                role: "user",
                content: vec![InputContent {
                    kind: "input_text",
                    text: "Hello world, this is English text.",
                }],
            }],
            max_output_tokens: MAX_OUTPUT_TOKENS,
            store: true,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["prompt"]["id"], PROMPT_ID);
        assert_eq!(json["prompt"]["version"], "1");
        assert_eq!(json["max_output_tokens"], 2048);
        assert_eq!(json["store"], true);
        assert_eq!(json["input"][0]["role"], "user");
        assert_eq!(json["input"][0]["content"][0]["type"], "input_text");
    }

    #[test]
    fn test_usage_parsing_with_cache_detail() {
        let json = r#"{
            "input_tokens": 1000,
            "output_tokens": 500,
            "total_tokens": 1500,
            "input_tokens_details": {"cached_tokens": 200}
        }"#;

        let usage: ResponseUsage = serde_json::from_str(json).unwrap();
        let token_usage = usage.to_token_usage().unwrap();

        assert_eq!(token_usage.input_tokens, 1000);
        assert_eq!(token_usage.cache_input_tokens, Some(200));
        assert_eq!(token_usage.output_tokens, 500);
        assert_eq!(token_usage.total_tokens, 1500);
    }

    #[test]
    fn test_usage_parsing_zero_cache_is_absent() {
        let json = r#"{
            "input_tokens": 100,
            "output_tokens": 50,
            "input_tokens_details": {"cached_tokens": 0}
        }"#;

        let usage: ResponseUsage = serde_json::from_str(json).unwrap();
        let token_usage = usage.to_token_usage().unwrap();

        assert!(token_usage.cache_input_tokens.is_none());
        assert_eq!(token_usage.total_tokens, 150);
    }

    #[test]
    fn test_usage_parsing_incomplete_is_none() {
        let usage: ResponseUsage = serde_json::from_str(r#"{"input_tokens": 100}"#).unwrap();
        assert!(usage.to_token_usage().is_none());
    }

    #[test]
    fn test_classify_unauthorized() {
        let err = classify_failure(reqwest::StatusCode::UNAUTHORIZED, "whatever");
        assert!(matches!(err, FetchError::Unauthorized));
    }

    #[test]
    fn test_classify_quota_within_429() {
        let err = classify_failure(
            reqwest::StatusCode::TOO_MANY_REQUESTS,
            r#"{"error": {"code": "insufficient_quota"}}"#,
        );
        assert!(matches!(err, FetchError::QuotaExhausted));

        let err = classify_failure(reqwest::StatusCode::TOO_MANY_REQUESTS, "slow down");
        assert!(matches!(err, FetchError::RateLimited));
    }

    #[test]
    fn test_classify_other_surfaces_raw_message() {
        let err = classify_failure(reqwest::StatusCode::BAD_GATEWAY, "upstream exploded");
        assert_eq!(err.to_string(), "upstream exploded");
    }
}
