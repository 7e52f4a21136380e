// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::Parser;

/// Command-line arguments for `proc-chain`.
///
/// The only input is the chain state handed down by the parent link. It is
/// kept as raw text: a malformed value is a recoverable condition handled by
/// the orchestrator, not a usage error.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "proc-chain",
    version,
    about = "Relaunch this program with an incremented counter until a bound is reached.",
    long_about = None
)]
pub struct CliArgs {
    /// Current chain state (decimal). Missing or malformed means 0.
    ///
    /// Only the first value is consulted; any further values are ignored.
    #[arg(
        value_name = "STATE",
        num_args = 0..,
        allow_hyphen_values = true,
        allow_negative_numbers = true
    )]
    pub args: Vec<String>,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
