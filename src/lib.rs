// src/lib.rs

pub mod chain;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod sink;
pub mod types;

use anyhow::{Context, Result};
use tracing::debug;

use crate::chain::run_link;
use crate::cli::CliArgs;
use crate::config::{ChainSettings, ConfigFile};
use crate::exec::OsLauncher;
use crate::sink::build_sink;

/// High-level entry point used by `main.rs`.
///
/// Runs this process's link of the chain with the production launcher and
/// the configured sink, returning the exit code the process should report.
/// A launch failure comes back as an error; `main` turns it into exit code 1.
pub async fn run(args: CliArgs, cfg: &ConfigFile) -> Result<i32> {
    let settings = ChainSettings::from(cfg);
    debug!(?settings, sink = ?cfg.logging.sink, pid = std::process::id(), "link configured");

    let mut sink = build_sink(cfg.logging.sink);
    let mut launcher = OsLauncher::new();

    let outcome = run_link(&args.args, &settings, &mut launcher, &mut sink)
        .await
        .context("running chain link")?;

    debug!(?outcome, "link finished");
    Ok(outcome.exit_code)
}
