// tests/config_loading.rs

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use proc_chain::config::model::DEFAULT_BOUND;
use proc_chain::config::{ChainSettings, load_and_validate, load_with_override};
use proc_chain::errors::ChainError;
use proc_chain::types::{ExitCodePolicy, LaunchMode, SinkKind};

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn empty_file_uses_defaults() {
    let file = config_file("");
    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.chain.bound, DEFAULT_BOUND);
    assert_eq!(cfg.chain.exit_code_policy, ExitCodePolicy::Propagate);
    assert_eq!(cfg.chain.launch_mode, LaunchMode::Direct);
    assert_eq!(cfg.logging.sink, SinkKind::Console);
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn full_file_is_read_into_settings() {
    let file = config_file(
        r#"
[chain]
bound = 500
exit_code_policy = "always_zero"
launch_mode = "shell"

[logging]
sink = "structured"
level = "debug"
"#,
    );

    let cfg = load_and_validate(file.path()).unwrap();
    let settings = ChainSettings::from(&cfg);

    assert_eq!(settings.bound.value(), 500);
    assert_eq!(settings.exit_code_policy, ExitCodePolicy::AlwaysZero);
    assert_eq!(settings.launch_mode, LaunchMode::Shell);
    assert_eq!(cfg.logging.sink, SinkKind::Structured);
}

#[test]
fn unknown_log_level_is_a_config_error() {
    let file = config_file(
        r#"
[logging]
level = "chatty"
"#,
    );

    match load_and_validate(file.path()) {
        Err(ChainError::ConfigError(msg)) => {
            assert!(msg.contains("[logging].level"));
            assert!(msg.contains("chatty"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn level_error_lists_every_accepted_spelling() {
    let file = config_file("[logging]\nlevel = \"loud\"\n");

    match load_and_validate(file.path()) {
        Err(ChainError::ConfigError(msg)) => {
            for level in ["error", "warn", "warning", "info", "debug", "trace"] {
                assert!(msg.contains(level), "{level} missing from: {msg}");
            }
        }
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn warning_is_an_accepted_level() {
    let file = config_file("[logging]\nlevel = \"warning\"\n");
    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(cfg.logging.level, "warning");
}

#[test]
fn unknown_policy_is_rejected_while_parsing() {
    let file = config_file(
        r#"
[chain]
exit_code_policy = "sometimes"
"#,
    );

    match load_and_validate(file.path()) {
        Err(ChainError::TomlError(_)) => {}
        Err(e) => panic!("Expected TomlError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn negative_bound_is_rejected_while_parsing() {
    let file = config_file("[chain]\nbound = -1\n");
    assert!(matches!(
        load_and_validate(file.path()),
        Err(ChainError::TomlError(_))
    ));
}

#[test]
fn unknown_keys_are_rejected() {
    let file = config_file("[chain]\nbonud = 3\n");
    assert!(matches!(
        load_and_validate(file.path()),
        Err(ChainError::TomlError(_))
    ));
}

#[test]
fn explicit_path_must_exist() {
    let missing = PathBuf::from("/definitely/not/here/ProcChain.toml");

    match load_with_override(Some(missing)) {
        Err(ChainError::ConfigError(msg)) => assert!(msg.contains("PROC_CHAIN_CONFIG")),
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn explicit_path_is_loaded() {
    let file = config_file("[chain]\nbound = 2\n");
    let cfg = load_with_override(Some(file.path().to_path_buf())).unwrap();
    assert_eq!(cfg.chain.bound, 2);
}
