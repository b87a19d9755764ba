//! Error types for HTTP and webhook operations.

use thiserror::Error;

/// Error type for HTTP operations.
///
/// Describes what went wrong at the transport level.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The server did not respond within the configured timeout period.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error type for delivering a Slack message.
///
/// Every variant is terminal: the message is never resent.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The request could not be sent.
    #[error("Failed to send the request: {0}")]
    Http(#[from] HttpError),

    /// Slack answered with a status other than 200 OK.
    #[error(
        "Request failed with status {status}. Response from Slack: {}",
        .body.as_deref().unwrap_or("<non-UTF-8 body>")
    )]
    NonSuccessStatus {
        /// HTTP status code
        status: http::StatusCode,
        /// Response body, if valid UTF-8
        body: Option<String>,
    },
}
