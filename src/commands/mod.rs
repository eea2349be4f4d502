//! Command dispatch and handlers.

pub mod demo;
pub mod ids;

use std::io::{self, Write};

use crate::cli::Command;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler against a live context.
///
/// A missing command runs the demo.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: Option<&Command>) -> Result<(), String> {
    let mut ctx = ServiceContext::live();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatch_with_context(command, &mut ctx, &mut out)?;
    out.flush().map_err(write_error)
}

/// Dispatch a command with the given service context and output sink.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(
    command: Option<&Command>,
    ctx: &mut ServiceContext,
    out: &mut dyn Write,
) -> Result<(), String> {
    match command {
        None | Some(Command::Demo) => demo::run(ctx, out),
        Some(Command::Ids { count, format }) => ids::run(ctx, out, *count, *format),
    }
}

pub(crate) fn write_error(err: io::Error) -> String {
    format!("Failed to write output: {err}")
}
