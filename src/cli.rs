//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

/// Largest `--count` accepted by `ids`.
pub const MAX_IDS: u64 = 1_000_000;

/// Top-level CLI parser for `idioms`.
#[derive(Debug, Parser)]
#[command(name = "idioms", version, about = "Walk through classic object idioms")]
pub struct Cli {
    /// Log debug diagnostics to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
    /// The command to execute; runs the demo when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the fixed demonstration sequence.
    Demo,
    /// Print fresh identifiers from one generator.
    Ids {
        /// How many identifiers to generate.
        #[arg(
            short,
            long,
            default_value_t = 1,
            value_parser = clap::value_parser!(u64).range(0..=MAX_IDS)
        )]
        count: u64,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output formats for `ids`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One identifier per line.
    Text,
    /// A JSON array of records.
    Json,
}
