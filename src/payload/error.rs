//! Error types for payload encoding.

use thiserror::Error;

/// Error type for payload operations.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The payload could not be serialized to JSON.
    #[error("Failed to create JSON payload: {0}")]
    Encode(#[from] serde_json::Error),
}
