use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use proc_chain::chain::{exit_code_of, run_link};
use proc_chain::config::ChainSettings;
use proc_chain::errors::{ChainError, Result};
use proc_chain::exec::{LaunchRequest, ProcessLauncher};

use crate::recording_sink::RecordingSink;

/// A launcher that runs every "child" in-process by calling `run_link`
/// recursively, so a whole chain can be observed without spawning.
///
/// Each simulated child sees the same settings and writes into the same
/// [`RecordingSink`]. A child that fails maps to exit code 1, exactly as the
/// real binary does.
#[derive(Debug, Clone)]
pub struct ChainSimulator {
    settings: ChainSettings,
    sink: RecordingSink,
    fail_launch_of: Option<String>,
    launched: Arc<Mutex<Vec<Vec<String>>>>,
}

impl ChainSimulator {
    pub fn new(settings: ChainSettings, sink: RecordingSink) -> Self {
        Self {
            settings,
            sink,
            fail_launch_of: None,
            launched: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Launching the link that would carry `state` fails.
    pub fn fail_launch_of(mut self, state: u64) -> Self {
        self.fail_launch_of = Some(state.to_string());
        self
    }

    /// Argument lists of every simulated child, in launch order.
    pub fn launched(&self) -> Vec<Vec<String>> {
        self.launched.lock().unwrap().clone()
    }
}

impl ProcessLauncher for ChainSimulator {
    fn current_executable(&self) -> Result<PathBuf> {
        Ok(PathBuf::from("/sim/bin/proc-chain"))
    }

    fn launch_and_wait(
        &mut self,
        request: LaunchRequest,
    ) -> Pin<Box<dyn Future<Output = Result<i32>> + Send + '_>> {
        Box::pin(async move {
            let rejected = self
                .fail_launch_of
                .as_ref()
                .is_some_and(|s| request.args.first() == Some(s));
            if rejected {
                return Err(ChainError::LaunchFailure(format!(
                    "simulated spawn failure for {:?}",
                    request.args
                )));
            }
            self.launched.lock().unwrap().push(request.args.clone());

            let settings = self.settings;
            let mut sink = self.sink.clone();
            let result = run_link(&request.args, &settings, self, &mut sink).await;
            Ok(exit_code_of(&result))
        })
    }
}
