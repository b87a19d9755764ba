//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments and environment variables.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Slack message section
    #[serde(default)]
    pub slack: SlackSection,

    /// Step behavior section
    #[serde(default)]
    pub step: StepSection,
}

/// Slack message configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlackSection {
    /// Incoming webhook URL
    pub webhook_url: Option<String>,

    /// Channel override
    pub channel: Option<String>,

    /// Username the message is posted as
    pub from_username: Option<String>,

    /// Username used when the build failed
    pub from_username_on_error: Option<String>,

    /// Message text
    pub message: Option<String>,

    /// Message text used when the build failed
    pub message_on_error: Option<String>,

    /// Formatting mode: "text" or "attachment"
    pub formatting_mode: Option<String>,

    /// Attachment color
    pub color: Option<String>,

    /// Attachment color used when the build failed
    pub color_on_error: Option<String>,

    /// Emoji icon
    pub emoji: Option<String>,

    /// Emoji icon used when the build failed
    pub emoji_on_error: Option<String>,

    /// Icon image URL
    pub icon_url: Option<String>,

    /// Icon image URL used when the build failed
    pub icon_url_on_error: Option<String>,
}

/// Step behavior configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StepSection {
    /// Enable debug output
    #[serde(default)]
    pub is_debug_mode: bool,

    /// Request timeout in seconds
    pub timeout: Option<u64>,

    /// Build the payload without sending it
    #[serde(default)]
    pub dry_run: bool,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r##"# Slack Notify Configuration File
#
# Every value can also be set with a CLI flag or the environment variable
# of the same name (e.g. `webhook_url`). Flags and environment win over this file.

[slack]
# Slack incoming webhook URL (required)
# webhook_url = "https://hooks.slack.com/services/T000/B000/XXXX"

# Channel override, uses the webhook's default channel when unset
# channel = "#builds"

# Username the message is posted as
# from_username = "CI"
# from_username_on_error = "CI"

# Message text (required)
# message = "Build succeeded"
# message_on_error = "Build failed"

# Formatting mode (required): "text" or "attachment"
formatting_mode = "attachment"

# Attachment color (required): good, warning, danger or a hex code
color = "#3bc3a3"
color_on_error = "#f0741f"

# Emoji icon, ignored when an icon URL is set
# emoji = ":white_check_mark:"
# emoji_on_error = ":x:"

# Icon image URL
# icon_url = "https://example.com/ok.png"
# icon_url_on_error = "https://example.com/fail.png"

[step]
# Log the JSON payload and Slack's response
# is_debug_mode = false

# Request timeout in seconds (default: 30)
# timeout = 30

# Build the payload without sending it
# dry_run = false
"##
    .to_string()
}
