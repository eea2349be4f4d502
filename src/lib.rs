//! Core library entry for the `idioms` CLI.
//!
//! Demonstrates typed identifier generation, a context-owned shared
//! instance, printable and cloneable capabilities, and domain errors
//! returned as plain results.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod objects;
pub mod ports;
pub mod telemetry;

use clap::Parser;

use crate::config::Config;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version land here and are not failures.
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };

    let config = Config::from_env().with_verbose(cli.verbose);
    telemetry::init(&config);
    tracing::debug!(filter = %config.log_filter, "configuration loaded");

    commands::dispatch(cli.command.as_ref())
}
