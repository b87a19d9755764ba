//! Default values for configuration options.
//!
//! Centralized constants to avoid magic values scattered across the codebase.

/// Default request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 30;

/// Build status value reported by the pipeline when the build succeeded.
///
/// Any other value, including an absent one, means the build failed.
pub const BUILD_STATUS_SUCCESS: &str = "0";

/// Debug mode value that enables debug output.
pub const DEBUG_MODE_ENABLED: &str = "yes";

/// Default output path for the `init` subcommand.
pub const CONFIG_FILE: &str = "slack-notify.toml";
