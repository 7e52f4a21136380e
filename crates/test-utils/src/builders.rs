#![allow(dead_code)]

use proc_chain::config::{ChainSettings, ConfigFile, RawConfigFile};
use proc_chain::types::{ExitCodePolicy, LaunchMode, SinkKind};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn bound(mut self, bound: u64) -> Self {
        self.config.chain.bound = bound;
        self
    }

    pub fn exit_code_policy(mut self, policy: ExitCodePolicy) -> Self {
        self.config.chain.exit_code_policy = policy;
        self
    }

    pub fn launch_mode(mut self, mode: LaunchMode) -> Self {
        self.config.chain.launch_mode = mode;
        self
    }

    pub fn sink(mut self, sink: SinkKind) -> Self {
        self.config.logging.sink = sink;
        self
    }

    pub fn level(mut self, level: &str) -> Self {
        self.config.logging.level = level.to_string();
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }

    pub fn settings(self) -> ChainSettings {
        ChainSettings::from(&self.build())
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
