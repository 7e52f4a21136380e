// src/config/model.rs

use serde::Deserialize;

use crate::types::{ExitCodePolicy, LaunchMode, SinkKind};

/// Default ceiling on the chain state.
pub const DEFAULT_BOUND: u64 = 10;

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [chain]
/// bound = 10
/// exit_code_policy = "propagate"
/// launch_mode = "direct"
///
/// [logging]
/// sink = "console"
/// level = "info"
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub chain: ChainSection,

    #[serde(default)]
    pub logging: LoggingSection,
}

/// Validated configuration. Only constructible through
/// `ConfigFile::try_from(RawConfigFile)` (or [`ConfigFile::default`]).
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    pub chain: ChainSection,
    pub logging: LoggingSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(chain: ChainSection, logging: LoggingSection) -> Self {
        Self { chain, logging }
    }
}

/// `[chain]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainSection {
    /// Highest state a link may be started with.
    #[serde(default = "default_bound")]
    pub bound: u64,

    /// `"propagate"` (default) or `"always_zero"`.
    #[serde(default)]
    pub exit_code_policy: ExitCodePolicy,

    /// `"direct"` (default) or `"shell"`.
    #[serde(default)]
    pub launch_mode: LaunchMode,
}

fn default_bound() -> u64 {
    DEFAULT_BOUND
}

impl Default for ChainSection {
    fn default() -> Self {
        Self {
            bound: default_bound(),
            exit_code_policy: ExitCodePolicy::default(),
            launch_mode: LaunchMode::default(),
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    /// `"console"` (default) or `"structured"`.
    #[serde(default)]
    pub sink: SinkKind,

    /// Diagnostic level for the `tracing` subscriber. Overridden by
    /// `PROC_CHAIN_LOG`.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            sink: SinkKind::default(),
            level: default_level(),
        }
    }
}
