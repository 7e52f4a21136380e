// src/logging.rs

//! Logging setup for `proc-chain` using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the log level:
//! 1. `PROC_CHAIN_LOG` environment variable (e.g. "info", "debug")
//! 2. `[logging].level` from the config file
//! 3. default to `info`
//!
//! Logs are sent to STDERR so that stdout carries only console-sink output.

use anyhow::Result;
use tracing_subscriber::fmt;

/// Environment variable overriding the configured level.
pub const LOG_ENV_VAR: &str = "PROC_CHAIN_LOG";

/// Initialise global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging(config_level: &str) -> Result<()> {
    let level = resolve_level(std::env::var(LOG_ENV_VAR).ok().as_deref(), config_level);

    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing tracing subscriber: {e}"))?;

    Ok(())
}

/// Pick the effective level: env override first, then config, then `info`.
/// Unknown strings are skipped rather than rejected.
pub fn resolve_level(env_level: Option<&str>, config_level: &str) -> tracing::Level {
    env_level
        .and_then(parse_level_str)
        .or_else(|| parse_level_str(config_level))
        .unwrap_or(tracing::Level::INFO)
}

pub(crate) fn parse_level_str(s: &str) -> Option<tracing::Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(tracing::Level::ERROR),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "info" => Some(tracing::Level::INFO),
        "debug" => Some(tracing::Level::DEBUG),
        "trace" => Some(tracing::Level::TRACE),
        _ => None,
    }
}
