//! Binary entrypoint for the `idioms` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match idioms::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
