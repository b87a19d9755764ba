//! Slack Notify: build-pipeline Slack notifications
//!
//! Entry point for the slack-notify application.

use slack_notify::config::{Cli, Command, SlackInputs, write_default_config};
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Handle init subcommand
    if let Some(Command::Init { output }) = &cli.command {
        return handle_init(output);
    }

    // Merge inputs; only a broken config file fails here
    let inputs = match SlackInputs::load(&cli) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::FAILURE;
        }
    };

    setup_tracing(inputs.debug);
    tracing::info!("{inputs}");

    let settings = match inputs.validate() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Issue with input: {e}");
            print_config_hint(&e);
            return exit_code::FAILURE;
        }
    };

    run_application(&settings)
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::FAILURE
        }
    }
}

/// Runs the notification on a single-threaded runtime.
///
/// Excluded from coverage - requires network access.
#[cfg(not(tarpaulin_include))]
fn run_application(settings: &slack_notify::config::Settings) -> ExitCode {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to create Tokio runtime: {e}");
            return exit_code::FAILURE;
        }
    };

    match runtime.block_on(run::execute(settings)) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            tracing::error!("Slack message was not sent");
            exit_code::FAILURE
        }
    }
}
