//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
/// Validation errors are reported before any network activity takes place.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// No webhook URL was provided.
    #[error("No Webhook URL parameter specified!")]
    MissingWebhookUrl,

    /// No message was provided.
    #[error("No Message parameter specified!")]
    MissingMessage,

    /// No color was provided.
    #[error("No Color parameter specified!")]
    MissingColor,

    /// No formatting mode was provided.
    #[error("No FormattingMode parameter specified!")]
    MissingFormattingMode,

    /// Formatting mode is neither `text` nor `attachment`.
    #[error("Invalid FormattingMode '{value}': expected text or attachment")]
    InvalidFormattingMode {
        /// The invalid value provided
        value: String,
    },

    /// Webhook URL could not be parsed.
    #[error("Invalid Webhook URL '{url}': {reason}")]
    InvalidWebhookUrl {
        /// The invalid URL string
        url: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Invalid duration value (not a whole number of seconds, or zero).
    #[error("Invalid duration for {field}: {reason}")]
    InvalidDuration {
        /// Name of the field
        field: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl ConfigError {
    /// Returns true if the error is caused by a required input being absent.
    #[must_use]
    pub const fn is_missing_input(&self) -> bool {
        matches!(
            self,
            Self::MissingWebhookUrl
                | Self::MissingMessage
                | Self::MissingColor
                | Self::MissingFormattingMode
        )
    }
}
