//! Language-detection result types.
//!
//! This module contains the normalized output of a detection call:
//! - [`DetectionResult`] - Container with findings and the primary language
//! - [`LanguageFinding`] - A single detected language

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ============================================================================
// Detection Result
// ============================================================================

/// Normalized output of a language-detection call.
///
/// Produced by parsing the assistant text extracted from a provider
/// response. All three fields are required on the wire; a payload missing
/// any of them is rejected during normalization rather than defaulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Detected languages, ordered by the provider.
    pub languages: Vec<LanguageFinding>,
    /// The dominant language of the text.
    ///
    /// Expected to equal the `language` field of one of the entries in
    /// `languages` when the provider honors its contract. This is not
    /// independently enforced.
    pub primary_language: String,
    /// Whether more than one language was detected.
    pub is_multilingual: bool,
}

impl DetectionResult {
    /// Validates the parsed result.
    ///
    /// A successful detection must carry at least one finding, and every
    /// confidence must be a finite number in [0, 1]. This should be called
    /// after parsing a provider payload to catch malformed data.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidData` when `languages` is empty or any
    /// finding has an out-of-range confidence.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.languages.is_empty() {
            return Err(CoreError::InvalidData(
                "detection result has no languages".to_string(),
            ));
        }
        for finding in &self.languages {
            finding.validate()?;
        }
        Ok(())
    }

    /// Returns the finding matching `primary_language`, if any.
    pub fn primary_finding(&self) -> Option<&LanguageFinding> {
        self.languages
            .iter()
            .find(|f| f.language == self.primary_language)
    }

    /// Returns the number of detected languages.
    pub fn language_count(&self) -> usize {
        self.languages.len()
    }
}

// ============================================================================
// Language Finding
// ============================================================================

/// A single detected language.
///
/// Confidence values are independent per-language scores, not a probability
/// distribution; they are not expected to sum to 1 across findings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageFinding {
    /// Human-readable language name (e.g., "English").
    pub language: String,
    /// ISO-like language code (e.g., "en").
    pub language_code: String,
    /// Detection confidence in [0, 1].
    pub confidence: f64,
    /// Representative excerpt from the input text.
    pub sample_text: String,
}

impl LanguageFinding {
    /// Validates the finding.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidData` if `confidence` is negative,
    /// greater than 1, or not a finite number.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.confidence.is_finite() {
            return Err(CoreError::InvalidData(format!(
                "confidence for {} is not a finite number",
                self.language
            )));
        }
        if self.confidence < 0.0 || self.confidence > 1.0 {
            return Err(CoreError::InvalidData(format!(
                "confidence {} for {} out of valid range [0, 1]",
                self.confidence, self.language
            )));
        }
        Ok(())
    }

    /// Returns the confidence as a display percentage.
    pub fn confidence_percent(&self) -> f64 {
        self.confidence * 100.0
    }
}

// ============================================================================
// Tests
// ============================================================================
