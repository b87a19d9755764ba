//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use slack_notify::config::ConfigError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Message delivered, dry run finished, or init succeeded (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Any failure (exit code 1) - invalid input, encoding, network or Slack error.
    pub const FAILURE: ExitCode = ExitCode::FAILURE;
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        e if e.is_missing_input() => {
            eprintln!(
                "\nSet the input through its environment variable (e.g. webhook_url), \
                 the matching flag (see --help), or a config file ('slack-notify init')."
            );
        }
        ConfigError::InvalidFormattingMode { .. } => {
            eprintln!("\nAccepted formatting modes: text, attachment.");
        }
        ConfigError::InvalidDuration { .. } => {
            eprintln!("\nThe timeout is a whole number of seconds greater than 0 (e.g. 30).");
        }
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'slack-notify init' to generate a configuration template.");
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
