//! CLI argument parsing using clap.
//!
//! Every Slack input can be given as a flag or through the environment
//! variable named after it, which is how build pipelines hand inputs to a step.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;

/// Slack Notify: build-pipeline Slack notifications
///
/// Posts a message to a Slack incoming webhook, picking the success or
/// failure variant of each input based on the preceding build's status.
#[derive(Debug, Parser)]
#[command(name = "slack-notify")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Slack incoming webhook URL
    #[arg(long = "webhook-url", env = "webhook_url")]
    pub webhook_url: Option<String>,

    /// Channel override (e.g. #builds)
    #[arg(long, env = "channel")]
    pub channel: Option<String>,

    /// Username the message is posted as
    #[arg(long = "from-username", env = "from_username")]
    pub from_username: Option<String>,

    /// Username the message is posted as when the build failed
    #[arg(long = "from-username-on-error", env = "from_username_on_error")]
    pub from_username_on_error: Option<String>,

    /// Message text
    #[arg(long, env = "message")]
    pub message: Option<String>,

    /// Message text when the build failed
    #[arg(long = "message-on-error", env = "message_on_error")]
    pub message_on_error: Option<String>,

    /// Formatting mode: 'text' or 'attachment'
    #[arg(long = "formatting-mode", env = "formatting_mode")]
    pub formatting_mode: Option<String>,

    /// Attachment color (e.g. good, danger, #3bc3a3)
    #[arg(long, env = "color")]
    pub color: Option<String>,

    /// Attachment color when the build failed
    #[arg(long = "color-on-error", env = "color_on_error")]
    pub color_on_error: Option<String>,

    /// Emoji icon (e.g. :ghost:)
    #[arg(long, env = "emoji")]
    pub emoji: Option<String>,

    /// Emoji icon when the build failed
    #[arg(long = "emoji-on-error", env = "emoji_on_error")]
    pub emoji_on_error: Option<String>,

    /// Icon image URL (takes precedence over the emoji)
    #[arg(long = "icon-url", env = "icon_url")]
    pub icon_url: Option<String>,

    /// Icon image URL when the build failed
    #[arg(long = "icon-url-on-error", env = "icon_url_on_error")]
    pub icon_url_on_error: Option<String>,

    /// Debug mode, enabled by 'yes'
    #[arg(long = "debug-mode", env = "is_debug_mode", value_name = "yes|no")]
    pub debug_mode: Option<String>,

    /// Status of the preceding build ('0' means success)
    #[arg(long = "build-status", env = "STEPLIB_BUILD_STATUS")]
    pub build_status: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "SLACK_NOTIFY_TIMEOUT", value_name = "SECS")]
    pub timeout: Option<String>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Build and log the payload without sending it
    #[arg(long)]
    pub dry_run: bool,
}

/// Subcommands for slack-notify
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line and environment.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if debug mode was requested on the command line or environment.
    #[must_use]
    pub fn debug_requested(&self) -> bool {
        self.debug_mode.as_deref() == Some(defaults::DEBUG_MODE_ENABLED)
    }

    /// Returns true unless the build status equals the success sentinel.
    #[must_use]
    pub fn build_failed(&self) -> bool {
        self.build_status.as_deref() != Some(defaults::BUILD_STATUS_SUCCESS)
    }
}
