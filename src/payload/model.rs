//! Wire-format types for Slack incoming webhooks.

use serde::Serialize;

use super::PayloadError;

/// Request body accepted by a Slack incoming webhook.
///
/// Exactly one of `text` and `attachments` carries the message, depending on
/// the formatting mode. Optional overrides are omitted from the JSON when
/// absent rather than sent as empty strings or `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NotificationPayload {
    /// Message text (empty in attachment mode)
    pub text: String,

    /// Rich message blocks (empty in text mode)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,

    /// Channel override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,

    /// Username override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Emoji icon override, never set together with `icon_url`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,

    /// Icon image URL override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// A single message attachment with a colored side bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    /// Plain-text summary shown in notifications
    pub fallback: String,
    /// Attachment body
    pub text: String,
    /// Side bar color
    #[serde(skip_serializing_if = "String::is_empty")]
    pub color: String,
}

impl Attachment {
    /// Creates an attachment whose fallback and body are both `text`.
    #[must_use]
    pub fn new(text: impl Into<String>, color: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            fallback: text.clone(),
            text,
            color: color.into(),
        }
    }
}

impl NotificationPayload {
    /// Serializes the payload to its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Encode`] if serialization fails.
    pub fn to_json(&self) -> Result<String, PayloadError> {
        Ok(serde_json::to_string(self)?)
    }
}
