//! Application execution logic.
//!
//! Builds the payload from validated settings and delivers it with a single
//! webhook request.

use thiserror::Error;

use slack_notify::config::Settings;
use slack_notify::payload::{self, PayloadError};
use slack_notify::webhook::{
    HttpClient, HttpError, ReqwestClient, SlackWebhook, WebhookError, WebhookSender,
};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to encode the payload.
    #[error(transparent)]
    Payload(#[from] PayloadError),

    /// Failed to create the HTTP client.
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] HttpError),

    /// Failed to deliver the message.
    #[error(transparent)]
    Webhook(#[from] WebhookError),
}

/// Sends the notification described by `settings`.
///
/// # Errors
///
/// Returns an error if the payload cannot be encoded, the request cannot be
/// sent, or Slack does not answer 200 OK.
pub async fn execute(settings: &Settings) -> Result<(), RunError> {
    let client = ReqwestClient::with_timeout(settings.timeout).map_err(RunError::Client)?;
    deliver(settings, client).await
}

/// Renders the payload and posts it through `client` unless this is a dry run.
///
/// The payload and Slack's reply are only logged in debug mode.
async fn deliver<H: HttpClient>(settings: &Settings, client: H) -> Result<(), RunError> {
    let json = payload::render(settings)?;
    if settings.debug {
        tracing::debug!("JSON payload: {json}");
    }

    if settings.dry_run {
        tracing::info!("[DRY-RUN] Payload not sent to {}", settings.webhook_url);
        return Ok(());
    }

    let webhook = SlackWebhook::new(client, settings.webhook_url.clone());
    let response = webhook.send(&json).await?;

    if settings.debug {
        tracing::debug!("Response from Slack: {response}");
    }
    tracing::info!("Slack message successfully sent! 🚀");
    Ok(())
}
