//! Core error types for Langlens.

use thiserror::Error;

/// Core error type for Langlens operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Invalid data from an API response.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
