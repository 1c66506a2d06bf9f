//! Request validation for the detection flow.
//!
//! Rejects malformed requests before any network I/O. Validation is
//! deterministic and side-effect free: the same input always yields the
//! same verdict, and accepted text passes through unchanged.

use thiserror::Error;

/// Required prefix for an OpenAI API key.
pub const CREDENTIAL_PREFIX: &str = "sk-";

/// Minimum text length for meaningful detection, inclusive.
pub const MIN_TEXT_LEN: usize = 10;

/// Maximum accepted text length, inclusive.
pub const MAX_TEXT_LEN: usize = 5000;

/// Validation failure for a detection request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No credential was supplied.
    #[error("OpenAI API key is required")]
    MissingCredential,

    /// The credential does not carry the provider prefix.
    #[error("Invalid API key format")]
    MalformedCredential,

    /// The text is empty after trimming.
    #[error("Please provide text to analyze")]
    EmptyInput,

    /// The text is below the minimum length.
    #[error("Text must be at least {MIN_TEXT_LEN} characters long for accurate detection")]
    InputTooShort,

    /// The text exceeds the maximum length.
    #[error("Text is too long. Please provide text under {MAX_TEXT_LEN} characters")]
    InputTooLong,
}

/// A detection request that passed validation.
///
/// Borrowed views of the caller's text and credential; validation performs
/// no normalization of the text itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedRequest<'a> {
    /// The text to analyze, unchanged.
    pub text: &'a str,
    /// The well-prefixed credential, unchanged.
    pub credential: &'a str,
}

/// Validates raw text and credential for a detection request.
///
/// Checks run in a fixed order: credential presence, credential prefix,
/// empty text, minimum length, maximum length. Boundary lengths (exactly
/// 10 or exactly 5000 characters) are accepted.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn validate_request<'a>(
    text: &'a str,
    credential: &'a str,
) -> Result<ValidatedRequest<'a>, ValidationError> {
    if credential.is_empty() {
        return Err(ValidationError::MissingCredential);
    }
    if !credential.starts_with(CREDENTIAL_PREFIX) {
        return Err(ValidationError::MalformedCredential);
    }
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let len = text.chars().count();
    if len < MIN_TEXT_LEN {
        return Err(ValidationError::InputTooShort);
    }
    if len > MAX_TEXT_LEN {
        return Err(ValidationError::InputTooLong);
    }

    Ok(ValidatedRequest { text, credential })
}

// ============================================================================
// Tests
// ============================================================================
