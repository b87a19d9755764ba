//! Configuration layer for Slack Notify.
//!
//! This module provides:
//! - CLI argument and environment parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Merged, unvalidated inputs ([`SlackInputs`])
//! - Validated settings ([`Settings`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Input values are resolved with the following priority (highest to lowest):
//!
//! 1. **CLI arguments or environment variables** - each flag is backed by the
//!    environment variable the pipeline sets (e.g. `--message` / `message`)
//! 2. **TOML config file** - values from the file given with `--config`
//! 3. **Built-in defaults** - only the timeout has one
//!
//! Empty values count as absent, so an empty environment variable does not
//! shadow a value from the config file.
//!
//! # Boolean Flag Semantics
//!
//! `debug` and `dry_run` use OR semantics: if either source enables them,
//! they are enabled.
//!
//! # Build Status
//!
//! The build is considered failed unless `STEPLIB_BUILD_STATUS` (or
//! `--build-status`) is exactly `0`. It cannot be set from the config file.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;
mod variant;


pub use cli::{Cli, Command};
pub use error::ConfigError;
pub use self::toml::{TomlConfig, default_config_template};
pub use validated::{FormattingMode, Settings, SlackInputs, write_default_config};
pub use variant::Variant;
