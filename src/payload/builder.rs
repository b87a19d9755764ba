//! Selection of success/failure values and payload assembly.

use crate::config::{FormattingMode, Settings, Variant};

use super::{Attachment, NotificationPayload, PayloadError};

/// Builds the notification payload for the given settings.
///
/// Each of color, message, username, emoji and icon URL is picked from its
/// [`Variant`]: the on-error value when the build failed and one was given,
/// the normal value otherwise. An icon URL, when present, suppresses the emoji.
#[must_use]
pub fn build(settings: &Settings) -> NotificationPayload {
    let failed = settings.build_failed;

    let color = select(&settings.color, failed, "color_on_error").unwrap_or_default();
    let text = select(&settings.message, failed, "message_on_error").unwrap_or_default();

    let mut payload = match settings.formatting_mode {
        FormattingMode::Attachment => NotificationPayload {
            attachments: vec![Attachment::new(text, color)],
            ..NotificationPayload::default()
        },
        FormattingMode::Text => NotificationPayload {
            text: text.to_string(),
            ..NotificationPayload::default()
        },
    };

    payload.channel.clone_from(&settings.channel);
    payload.username = select(&settings.username, failed, "from_username_on_error")
        .map(str::to_string);

    let emoji = select(&settings.emoji, failed, "emoji_on_error");
    let icon_url = select(&settings.icon_url, failed, "icon_url_on_error");

    // icon_url takes precedence over the emoji
    payload.icon_emoji = if icon_url.is_some() {
        None
    } else {
        emoji.map(str::to_string)
    };
    payload.icon_url = icon_url.map(str::to_string);

    if settings.debug {
        tracing::debug!(?payload, "Parameters");
    }
    payload
}

/// Builds the payload and encodes it as JSON.
///
/// # Errors
///
/// Returns [`PayloadError::Encode`] if the payload cannot be serialized.
pub fn render(settings: &Settings) -> Result<String, PayloadError> {
    build(settings).to_json()
}

/// Applies the override rule to one attribute.
///
/// `on_error_input` names the input that was expected when falling back.
fn select<'a>(variant: &'a Variant, build_failed: bool, on_error_input: &str) -> Option<&'a str> {
    if build_failed {
        if let Some(value) = variant.on_error() {
            return Some(value);
        }
        tracing::info!("Build failed but no {on_error_input} defined, using default.");
    }
    variant.normal()
}
