//! Fetch error types.
//!
//! Display strings double as the user-facing messages: the CLI surfaces
//! them directly, so the provider-specific wording lives here.

use thiserror::Error;

/// Error type for fetch operations.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed at the transport level.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider rejected the credential.
    #[error("Invalid API key. Please check your OpenAI API key.")]
    Unauthorized,

    /// The provider rate-limited the request.
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    /// The account has no remaining quota.
    #[error("Insufficient API quota. Please check your OpenAI account.")]
    QuotaExhausted,

    /// No probe shape yielded assistant text.
    #[error("Unexpected response format from OpenAI")]
    UnexpectedFormat,

    /// Assistant text was found but did not parse into a detection result.
    #[error("Failed to parse response as JSON")]
    MalformedPayload,

    /// Any other non-success response from a remote endpoint.
    #[error("{0}")]
    InvalidResponse(String),
}

impl FetchError {
    /// Classifies a provider error body by its known markers.
    ///
    /// Checked in order: unauthorized, rate limit, quota exhaustion. When
    /// no marker matches, the raw message is surfaced unchanged.
    pub fn from_provider_message(message: &str) -> Self {
        if message.contains("401") || message.contains("Unauthorized") {
            return Self::Unauthorized;
        }
        if message.contains("429") {
            return Self::RateLimited;
        }
        if message.contains("insufficient_quota") {
            return Self::QuotaExhausted;
        }
        Self::InvalidResponse(message.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
