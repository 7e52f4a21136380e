// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{ChainError, Result};
use crate::logging::parse_level_str;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::ChainError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.chain, raw.logging))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    // exit_code_policy, launch_mode and sink are strongly typed and validated
    // during deserialization.
    validate_logging(cfg)?;
    Ok(())
}

/// Spellings accepted by `parse_level_str`.
const ACCEPTED_LEVELS: [&str; 6] = ["error", "warn", "warning", "info", "debug", "trace"];

fn validate_logging(cfg: &RawConfigFile) -> Result<()> {
    if parse_level_str(&cfg.logging.level).is_none() {
        return Err(ChainError::ConfigError(format!(
            "[logging].level must be one of {} (got '{}')",
            ACCEPTED_LEVELS.join(", "),
            cfg.logging.level
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_levels_match_the_parser() {
        for level in ACCEPTED_LEVELS {
            assert!(parse_level_str(level).is_some(), "{level}");
        }
    }
}
