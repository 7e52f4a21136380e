// src/exec/command.rs

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

use crate::errors::{ChainError, Result};
use crate::types::LaunchMode;

use super::backend::LaunchRequest;

/// Build the OS command for a launch request.
///
/// stdio is inherited so every link writes to the same console. In shell
/// mode the program and its arguments are passed as positional parameters,
/// never spliced into the script text.
pub fn build_command(request: &LaunchRequest) -> Command {
    let mut cmd = match request.mode {
        LaunchMode::Direct => {
            let mut c = Command::new(&request.program);
            c.args(&request.args);
            c
        }
        LaunchMode::Shell if cfg!(windows) => {
            let mut c = Command::new("cmd");
            c.arg("/C").arg(&request.program).args(&request.args);
            c
        }
        LaunchMode::Shell => {
            let mut c = Command::new("sh");
            c.arg("-c")
                .arg(r#"exec "$0" "$@""#)
                .arg(&request.program)
                .args(&request.args);
            c
        }
    };

    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .kill_on_drop(false);

    cmd
}

/// Fail unless `program` is a regular file the OS would agree to execute.
///
/// Shell mode needs this: `sh` itself always starts, and a missing or
/// non-executable target only shows up later as exit status 127/126.
pub fn ensure_launchable(program: &Path) -> Result<()> {
    let meta = std::fs::metadata(program).map_err(|e| {
        ChainError::LaunchFailure(format!("cannot launch {:?}: {e}", program))
    })?;
    if !meta.is_file() {
        return Err(ChainError::LaunchFailure(format!(
            "cannot launch {:?}: not a regular file",
            program
        )));
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if meta.permissions().mode() & 0o111 == 0 {
            return Err(ChainError::LaunchFailure(format!(
                "cannot launch {:?}: not executable",
                program
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;
    use std::path::PathBuf;

    fn request(mode: LaunchMode) -> LaunchRequest {
        LaunchRequest {
            program: PathBuf::from("/opt/bin/proc-chain"),
            args: vec!["3".to_string()],
            mode,
        }
    }

    #[test]
    fn direct_runs_program_with_state() {
        let cmd = build_command(&request(LaunchMode::Direct));
        let std_cmd = cmd.as_std();
        assert_eq!(std_cmd.get_program(), OsStr::new("/opt/bin/proc-chain"));
        let args: Vec<_> = std_cmd.get_args().collect();
        assert_eq!(args, vec![OsStr::new("3")]);
    }

    #[cfg(unix)]
    #[test]
    fn shell_passes_program_as_positional() {
        let cmd = build_command(&request(LaunchMode::Shell));
        let std_cmd = cmd.as_std();
        assert_eq!(std_cmd.get_program(), OsStr::new("sh"));
        let args: Vec<_> = std_cmd.get_args().collect();
        assert_eq!(
            args,
            vec![
                OsStr::new("-c"),
                OsStr::new(r#"exec "$0" "$@""#),
                OsStr::new("/opt/bin/proc-chain"),
                OsStr::new("3"),
            ]
        );
    }

    #[test]
    fn missing_program_is_not_launchable() {
        let err = ensure_launchable(Path::new("/nope/missing")).unwrap_err();
        assert!(err.is_launch_failure());
    }

    #[test]
    fn directory_is_not_launchable() {
        let dir = tempfile::tempdir().unwrap();
        let err = ensure_launchable(dir.path()).unwrap_err();
        assert!(err.to_string().contains("not a regular file"));
    }

    #[cfg(unix)]
    #[test]
    fn file_without_exec_bit_is_not_launchable() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = ensure_launchable(file.path()).unwrap_err();
        assert!(err.to_string().contains("not executable"));
    }

    #[test]
    fn running_test_binary_is_launchable() {
        let exe = std::env::current_exe().unwrap();
        ensure_launchable(&exe).unwrap();
    }
}
