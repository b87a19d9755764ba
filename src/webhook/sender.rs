//! Webhook sender trait and Slack implementation.

use super::{HttpClient, HttpRequest, WebhookError};

/// Trait for delivering an encoded notification payload.
///
/// This abstraction keeps payload construction independent of how the
/// payload reaches Slack and enables testing with mocks.
pub trait WebhookSender: Send + Sync {
    /// Sends the JSON payload and returns the response body on success.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError`] if the request fails or Slack does not answer 200 OK.
    fn send(
        &self,
        payload: &str,
    ) -> impl std::future::Future<Output = Result<String, WebhookError>> + Send;
}

/// Slack incoming webhook.
///
/// Posts the JSON payload as a form submission with a single `payload`
/// field, the encoding Slack's incoming webhooks accept. Exactly one request
/// is made per send.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use slack_notify::webhook::{ReqwestClient, SlackWebhook};
/// use url::Url;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let webhook = SlackWebhook::new(
///     ReqwestClient::with_timeout(Duration::from_secs(30))?,
///     Url::parse("https://hooks.slack.com/services/T000/B000/XXXX")?,
/// );
/// # drop(webhook);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SlackWebhook<H> {
    client: H,
    url: url::Url,
}

impl<H> SlackWebhook<H> {
    /// Creates a webhook posting to `url` through `client`.
    #[must_use]
    pub const fn new(client: H, url: url::Url) -> Self {
        Self { client, url }
    }

    /// Builds the form-encoded POST request for the payload.
    fn build_request(&self, payload: &str) -> HttpRequest {
        HttpRequest::form(self.url.clone(), [("payload", payload)])
    }
}

impl<H: HttpClient> WebhookSender for SlackWebhook<H> {
    async fn send(&self, payload: &str) -> Result<String, WebhookError> {
        let request = self.build_request(payload);
        let response = self.client.request(request).await?;

        if response.is_accepted() {
            return Ok(response.body_text().unwrap_or_default().to_string());
        }

        Err(WebhookError::NonSuccessStatus {
            status: response.status,
            body: response.body_text().map(ToString::to_string),
        })
    }
}
