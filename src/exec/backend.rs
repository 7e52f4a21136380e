// src/exec/backend.rs

//! Pluggable process launcher abstraction.
//!
//! The orchestrator talks to a `ProcessLauncher` instead of spawning
//! processes itself. This makes it easy to swap in a fake launcher in tests
//! while keeping the production implementation here.
//!
//! - `OsLauncher` is the implementation used by `proc-chain`. It resolves
//!   the running executable and spawns it through `tokio::process`.
//! - Tests can provide their own `ProcessLauncher` that, for example, records
//!   launch requests and returns scripted exit codes.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use tracing::{debug, info};

use crate::errors::{ChainError, Result};
use crate::types::LaunchMode;

use super::command::{build_command, ensure_launchable};

/// Exit code reported for a child that terminated without one (e.g. killed
/// by a signal).
pub const NO_EXIT_CODE: i32 = -1;

/// One request to start a program and wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub mode: LaunchMode,
}

/// Trait abstracting how the next link is started.
///
/// Production code uses [`OsLauncher`]; tests can provide their own
/// implementation that doesn't spawn real processes.
pub trait ProcessLauncher: Send {
    /// Absolute path of the program that is currently running.
    fn current_executable(&self) -> Result<PathBuf>;

    /// Start the requested program and resolve once it has exited, yielding
    /// its exit code.
    fn launch_and_wait(
        &mut self,
        request: LaunchRequest,
    ) -> Pin<Box<dyn Future<Output = Result<i32>> + Send + '_>>;
}

/// Launcher backed by the host OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsLauncher;

impl OsLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessLauncher for OsLauncher {
    fn current_executable(&self) -> Result<PathBuf> {
        let exe = std::env::current_exe().map_err(|e| {
            ChainError::LaunchFailure(format!("resolving current executable: {e}"))
        })?;
        if exe.is_absolute() {
            Ok(exe)
        } else {
            std::fs::canonicalize(&exe).map_err(|e| {
                ChainError::LaunchFailure(format!("canonicalizing executable {:?}: {e}", exe))
            })
        }
    }

    fn launch_and_wait(
        &mut self,
        request: LaunchRequest,
    ) -> Pin<Box<dyn Future<Output = Result<i32>> + Send + '_>> {
        Box::pin(async move {
            if request.mode == LaunchMode::Shell {
                ensure_launchable(&request.program)?;
            }
            let mut cmd = build_command(&request);

            let mut child = cmd.spawn().map_err(|e| {
                ChainError::LaunchFailure(format!(
                    "spawning {:?} with {:?}: {e}",
                    request.program, request.args
                ))
            })?;

            debug!(
                program = ?request.program,
                args = ?request.args,
                child_pid = child.id(),
                "child process started"
            );

            // No timeout and no cancellation: the parent waits for as long as
            // the child runs.
            let status = child.wait().await.map_err(|e| {
                ChainError::LaunchFailure(format!("waiting for {:?}: {e}", request.program))
            })?;

            let code = status.code().unwrap_or(NO_EXIT_CODE);
            info!(
                exit_code = code,
                success = status.success(),
                "child process exited"
            );
            Ok(code)
        })
    }
}
