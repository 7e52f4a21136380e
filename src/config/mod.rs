// src/config/mod.rs

//! Configuration loading and validation for proc-chain.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Locate and load a config file (`loader.rs`).
//! - Validate the raw model into a [`ConfigFile`] (`validate.rs`).
//! - Extract the orchestrator's parameters ([`ChainSettings`]).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_default, load_from_path, load_with_override};
pub use model::{ChainSection, ConfigFile, LoggingSection, RawConfigFile};

use crate::chain::ChainBound;
use crate::types::{ExitCodePolicy, LaunchMode};

/// Process-wide chain parameters, fixed before the first link runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainSettings {
    pub bound: ChainBound,
    pub exit_code_policy: ExitCodePolicy,
    pub launch_mode: LaunchMode,
}

impl ChainSettings {
    pub fn with_bound(bound: u64) -> Self {
        Self {
            bound: ChainBound::new(bound),
            exit_code_policy: ExitCodePolicy::default(),
            launch_mode: LaunchMode::default(),
        }
    }
}

impl From<&ConfigFile> for ChainSettings {
    fn from(cfg: &ConfigFile) -> Self {
        Self {
            bound: ChainBound::new(cfg.chain.bound),
            exit_code_policy: cfg.chain.exit_code_policy,
            launch_mode: cfg.chain.launch_mode,
        }
    }
}
