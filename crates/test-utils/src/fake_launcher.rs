use std::collections::VecDeque;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use proc_chain::errors::{ChainError, Result};
use proc_chain::exec::{LaunchRequest, ProcessLauncher};

/// A fake launcher that:
/// - records every launch request
/// - returns scripted exit codes (0 once the script runs out)
/// - can be told to fail executable resolution or the launch itself.
#[derive(Debug, Clone)]
pub struct FakeLauncher {
    executable: Option<PathBuf>,
    exit_codes: VecDeque<i32>,
    fail_launch: bool,
    requests: Arc<Mutex<Vec<LaunchRequest>>>,
}

impl FakeLauncher {
    pub const EXECUTABLE: &'static str = "/fake/bin/proc-chain";

    pub fn new() -> Self {
        Self {
            executable: Some(PathBuf::from(Self::EXECUTABLE)),
            exit_codes: VecDeque::new(),
            fail_launch: false,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Children exit with these codes, in order.
    pub fn with_exit_codes(mut self, codes: impl IntoIterator<Item = i32>) -> Self {
        self.exit_codes = codes.into_iter().collect();
        self
    }

    /// `current_executable` fails.
    pub fn unresolvable(mut self) -> Self {
        self.executable = None;
        self
    }

    /// `launch_and_wait` fails as if the OS rejected the spawn.
    pub fn failing_launch(mut self) -> Self {
        self.fail_launch = true;
        self
    }

    /// Requests that reached the "OS", i.e. excluding rejected launches.
    pub fn requests(&self) -> Vec<LaunchRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn launch_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Default for FakeLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessLauncher for FakeLauncher {
    fn current_executable(&self) -> Result<PathBuf> {
        self.executable.clone().ok_or_else(|| {
            ChainError::LaunchFailure("resolving current executable: not found".to_string())
        })
    }

    fn launch_and_wait(
        &mut self,
        request: LaunchRequest,
    ) -> Pin<Box<dyn Future<Output = Result<i32>> + Send + '_>> {
        Box::pin(async move {
            if self.fail_launch {
                return Err(ChainError::LaunchFailure(format!(
                    "spawning {:?}: permission denied",
                    request.program
                )));
            }
            self.requests.lock().unwrap().push(request);
            Ok(self.exit_codes.pop_front().unwrap_or(0))
        })
    }
}
