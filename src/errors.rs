// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChainError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// The next link could not be started or awaited.
    #[error("Launch failure: {0}")]
    LaunchFailure(String),
}

impl ChainError {
    pub fn is_launch_failure(&self) -> bool {
        matches!(self, ChainError::LaunchFailure(_))
    }
}

pub type Result<T> = std::result::Result<T, ChainError>;
