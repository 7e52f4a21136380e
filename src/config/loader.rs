// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{ChainError, Result};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "PROC_CHAIN_CONFIG";

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run basic validation.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Resolve and load the configuration for this process.
///
/// - If `PROC_CHAIN_CONFIG` is set, that file must exist and is loaded.
/// - Otherwise `ProcChain.toml` in the working directory is loaded if present.
/// - Otherwise built-in defaults are used.
///
/// Every link runs this once at startup. Children inherit the environment and
/// working directory, so the whole chain sees the same configuration.
pub fn load_default() -> Result<ConfigFile> {
    load_with_override(std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
}

/// Resolution logic behind [`load_default`], with the env lookup lifted out.
pub fn load_with_override(explicit: Option<PathBuf>) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(ChainError::ConfigError(format!(
                "{CONFIG_ENV_VAR} points to {:?}, which is not a file",
                path
            )));
        }
        debug!(path = ?path, "loading config from {CONFIG_ENV_VAR}");
        return load_and_validate(&path);
    }

    let path = default_config_path();
    if path.is_file() {
        debug!(path = ?path, "loading config from working directory");
        load_and_validate(&path)
    } else {
        debug!("no config file found; using defaults");
        Ok(ConfigFile::default())
    }
}

/// Default config location: `ProcChain.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("ProcChain.toml")
}
