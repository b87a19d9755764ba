//! Resolved inputs and validated settings.
//!
//! Resolution happens in two steps so the raw inputs can be echoed to the
//! operator before validation rejects them:
//!
//! 1. [`SlackInputs`] merges CLI arguments, environment and the TOML file.
//! 2. [`SlackInputs::validate`] checks the required fields and produces [`Settings`].

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;
use super::variant::{Variant, non_empty};

/// How the message is rendered in Slack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormattingMode {
    /// Plain message text
    Text,
    /// A single attachment with a colored side bar
    Attachment,
}

impl FormattingMode {
    /// Returns the input value naming this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Attachment => "attachment",
        }
    }
}

impl fmt::Display for FormattingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormattingMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "attachment" => Ok(Self::Attachment),
            "" => Err(ConfigError::MissingFormattingMode),
            _ => Err(ConfigError::InvalidFormattingMode {
                value: s.to_string(),
            }),
        }
    }
}

/// Raw inputs after merging all configuration sources.
///
/// Absent string inputs are empty; nothing has been validated yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlackInputs {
    /// Incoming webhook URL
    pub webhook_url: String,
    /// Channel override
    pub channel: String,
    /// Username the message is posted as
    pub from_username: String,
    /// Username used when the build failed
    pub from_username_on_error: String,
    /// Message text
    pub message: String,
    /// Message text used when the build failed
    pub message_on_error: String,
    /// Formatting mode as given
    pub formatting_mode: String,
    /// Attachment color
    pub color: String,
    /// Attachment color used when the build failed
    pub color_on_error: String,
    /// Emoji icon
    pub emoji: String,
    /// Emoji icon used when the build failed
    pub emoji_on_error: String,
    /// Icon image URL
    pub icon_url: String,
    /// Icon image URL used when the build failed
    pub icon_url_on_error: String,
    /// Debug output enabled
    pub debug: bool,
    /// Whether the preceding build failed
    pub build_failed: bool,
    /// Request timeout in seconds as given; empty means the default
    pub timeout: String,
    /// Build the payload without sending it
    pub dry_run: bool,
}

impl fmt::Display for SlackInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Slack configs:")?;
        writeln!(f, " - webhook_url: {}", self.webhook_url)?;
        writeln!(f, " - channel: {}", self.channel)?;
        writeln!(f, " - from_username: {}", self.from_username)?;
        writeln!(f, " - from_username_on_error: {}", self.from_username_on_error)?;
        writeln!(f, " - message: {}", self.message)?;
        writeln!(f, " - message_on_error: {}", self.message_on_error)?;
        writeln!(f, " - formatting_mode: {}", self.formatting_mode)?;
        writeln!(f, " - color: {}", self.color)?;
        writeln!(f, " - color_on_error: {}", self.color_on_error)?;
        writeln!(f, " - emoji: {}", self.emoji)?;
        writeln!(f, " - emoji_on_error: {}", self.emoji_on_error)?;
        writeln!(f, " - icon_url: {}", self.icon_url)?;
        writeln!(f, " - icon_url_on_error: {}", self.icon_url_on_error)?;
        writeln!(f, "Other configs:")?;
        writeln!(f, " - is_debug_mode: {}", self.debug)?;
        writeln!(f, " - is_build_failed: {}", self.build_failed)?;
        writeln!(f, " - timeout: {}", self.timeout)?;
        write!(f, " - dry_run: {}", self.dry_run)
    }
}

impl SlackInputs {
    /// Merges CLI arguments (and their environment variables) with an optional TOML config.
    ///
    /// Non-empty CLI/environment values win over TOML values. Boolean flags
    /// are enabled if either source enables them.
    #[must_use]
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Self {
        let slack = toml.map(|t| &t.slack);
        let file_timeout = toml
            .and_then(|t| t.step.timeout)
            .map(|secs| secs.to_string());

        Self {
            webhook_url: merge(
                cli.webhook_url.as_deref(),
                slack.and_then(|s| s.webhook_url.as_deref()),
            ),
            channel: merge(cli.channel.as_deref(), slack.and_then(|s| s.channel.as_deref())),
            from_username: merge(
                cli.from_username.as_deref(),
                slack.and_then(|s| s.from_username.as_deref()),
            ),
            from_username_on_error: merge(
                cli.from_username_on_error.as_deref(),
                slack.and_then(|s| s.from_username_on_error.as_deref()),
            ),
            message: merge(cli.message.as_deref(), slack.and_then(|s| s.message.as_deref())),
            message_on_error: merge(
                cli.message_on_error.as_deref(),
                slack.and_then(|s| s.message_on_error.as_deref()),
            ),
            formatting_mode: merge(
                cli.formatting_mode.as_deref(),
                slack.and_then(|s| s.formatting_mode.as_deref()),
            ),
            color: merge(cli.color.as_deref(), slack.and_then(|s| s.color.as_deref())),
            color_on_error: merge(
                cli.color_on_error.as_deref(),
                slack.and_then(|s| s.color_on_error.as_deref()),
            ),
            emoji: merge(cli.emoji.as_deref(), slack.and_then(|s| s.emoji.as_deref())),
            emoji_on_error: merge(
                cli.emoji_on_error.as_deref(),
                slack.and_then(|s| s.emoji_on_error.as_deref()),
            ),
            icon_url: merge(cli.icon_url.as_deref(), slack.and_then(|s| s.icon_url.as_deref())),
            icon_url_on_error: merge(
                cli.icon_url_on_error.as_deref(),
                slack.and_then(|s| s.icon_url_on_error.as_deref()),
            ),
            debug: cli.debug_requested() || toml.is_some_and(|t| t.step.is_debug_mode),
            build_failed: cli.build_failed(),
            timeout: merge(cli.timeout.as_deref(), file_timeout.as_deref()),
            dry_run: cli.dry_run || toml.is_some_and(|t| t.step.dry_run),
        }
    }

    /// Loads and merges inputs from CLI, environment and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Ok(Self::from_raw(cli, toml.as_ref()))
    }

    /// Validates the inputs and produces immutable [`Settings`].
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// webhook URL, message, color, formatting mode, then URL syntax and timeout.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] describing the first invalid input.
    pub fn validate(self) -> Result<Settings, ConfigError> {
        if self.webhook_url.is_empty() {
            return Err(ConfigError::MissingWebhookUrl);
        }
        if self.message.is_empty() {
            return Err(ConfigError::MissingMessage);
        }
        if self.color.is_empty() {
            return Err(ConfigError::MissingColor);
        }
        let formatting_mode = self.formatting_mode.parse::<FormattingMode>()?;

        let webhook_url =
            Url::parse(&self.webhook_url).map_err(|e| ConfigError::InvalidWebhookUrl {
                url: self.webhook_url.clone(),
                reason: e.to_string(),
            })?;

        let timeout = parse_timeout(&self.timeout)?;

        Ok(Settings {
            webhook_url,
            channel: non_empty(self.channel),
            username: Variant::new(self.from_username, self.from_username_on_error),
            message: Variant::new(self.message, self.message_on_error),
            formatting_mode,
            color: Variant::new(self.color, self.color_on_error),
            emoji: Variant::new(self.emoji, self.emoji_on_error),
            icon_url: Variant::new(self.icon_url, self.icon_url_on_error),
            debug: self.debug,
            build_failed: self.build_failed,
            timeout,
            dry_run: self.dry_run,
        })
    }
}

/// Fully validated settings, constructed once and read-only afterwards.
///
/// `message` and `color` always carry a normal value; the webhook URL has
/// been parsed and the formatting mode is one of the known modes.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Incoming webhook URL
    pub webhook_url: Url,

    /// Channel override
    pub channel: Option<String>,

    /// Username the message is posted as
    pub username: Variant,

    /// Message text
    pub message: Variant,

    /// How the message is rendered
    pub formatting_mode: FormattingMode,

    /// Attachment color
    pub color: Variant,

    /// Emoji icon
    pub emoji: Variant,

    /// Icon image URL
    pub icon_url: Variant,

    /// Debug output enabled
    pub debug: bool,

    /// Whether the preceding build failed
    pub build_failed: bool,

    /// Request timeout
    pub timeout: Duration,

    /// Build the payload without sending it
    pub dry_run: bool,
}

/// Picks the CLI/environment value unless it is absent or empty, then the file value.
fn merge(arg: Option<&str>, file: Option<&str>) -> String {
    arg.filter(|v| !v.is_empty())
        .or(file)
        .unwrap_or_default()
        .to_string()
}

/// Parses a timeout in whole seconds. Empty falls back to the default.
fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    if value.is_empty() {
        return Ok(Duration::from_secs(defaults::TIMEOUT_SECS));
    }

    let secs = value
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidDuration {
            field: "timeout",
            reason: format!("'{value}' is not a whole number of seconds: {e}"),
        })?;

    if secs == 0 {
        return Err(ConfigError::InvalidDuration {
            field: "timeout",
            reason: "must be greater than 0".to_string(),
        });
    }

    Ok(Duration::from_secs(secs))
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
