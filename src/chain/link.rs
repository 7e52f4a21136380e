// src/chain/link.rs

//! One link of the chain, run end to end.

use tracing::debug;

use crate::chain::state::{ChainState, LinkDecision, StateSource, evaluate};
use crate::config::ChainSettings;
use crate::errors::Result;
use crate::exec::{LaunchRequest, ProcessLauncher};
use crate::sink::{LifecycleEvent, OutputSink};
use crate::types::ExitCodePolicy;

/// Process exit code for a link that failed before its child could report.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// How a link ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    /// No child was launched; this link is the end of the chain.
    BoundReached { state: ChainState },
    /// A child carrying `next` ran to completion.
    ChildExited {
        next: ChainState,
        child_exit_code: i32,
    },
}

/// A link's outcome together with the exit code the process should report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome {
    pub outcome: LinkOutcome,
    pub exit_code: i32,
}

impl ExitOutcome {
    fn bound_reached(state: ChainState) -> Self {
        Self {
            outcome: LinkOutcome::BoundReached { state },
            exit_code: 0,
        }
    }

    fn child_exited(next: ChainState, child_exit_code: i32, policy: ExitCodePolicy) -> Self {
        let exit_code = match policy {
            ExitCodePolicy::Propagate => child_exit_code,
            ExitCodePolicy::AlwaysZero => 0,
        };
        Self {
            outcome: LinkOutcome::ChildExited {
                next,
                child_exit_code,
            },
            exit_code,
        }
    }
}

/// Map a link result to the exit code of its process.
pub fn exit_code_of(result: &Result<ExitOutcome>) -> i32 {
    match result {
        Ok(outcome) => outcome.exit_code,
        Err(_) => FAILURE_EXIT_CODE,
    }
}

/// Run one link: resolve the state from `args`, then either stop at the
/// bound or launch the next link and wait for it.
///
/// Only `args[0]` is consulted. Failing to resolve the executable or to
/// start/await the child records a `LaunchFailed` event and returns
/// [`crate::errors::ChainError::LaunchFailure`]; nothing is retried.
pub async fn run_link<L, S>(
    args: &[String],
    settings: &ChainSettings,
    launcher: &mut L,
    sink: &mut S,
) -> Result<ExitOutcome>
where
    L: ProcessLauncher + ?Sized,
    S: OutputSink + ?Sized,
{
    if args.len() > 1 {
        debug!(ignored = ?&args[1..], "only the first argument carries state");
    }

    let (state, source) = ChainState::parse_arg(args.first().map(String::as_str));
    if let StateSource::Malformed(raw) = &source {
        debug!(raw = %raw, "state argument is not a non-negative integer; using 0");
    }
    emit(
        sink,
        LifecycleEvent::LinkStarted {
            state,
            source,
            args: args.to_vec(),
        },
    );

    let next = match evaluate(state, settings.bound) {
        LinkDecision::Terminal => {
            debug!(%state, bound = %settings.bound, "terminal link");
            emit(
                sink,
                LifecycleEvent::BoundReached {
                    state,
                    bound: settings.bound,
                },
            );
            return Ok(ExitOutcome::bound_reached(state));
        }
        LinkDecision::Spawn(next) => next,
    };

    let child_exit_code = match launch_next(next, settings, launcher).await {
        Ok(code) => code,
        Err(err) => {
            emit(
                sink,
                LifecycleEvent::LaunchFailed {
                    next,
                    reason: err.to_string(),
                },
            );
            return Err(err);
        }
    };

    emit(
        sink,
        LifecycleEvent::ChildExited {
            next,
            exit_code: child_exit_code,
        },
    );

    Ok(ExitOutcome::child_exited(
        next,
        child_exit_code,
        settings.exit_code_policy,
    ))
}

async fn launch_next<L>(
    next: ChainState,
    settings: &ChainSettings,
    launcher: &mut L,
) -> Result<i32>
where
    L: ProcessLauncher + ?Sized,
{
    let program = launcher.current_executable()?;
    debug!(program = ?program, %next, mode = ?settings.launch_mode, "launching next link");

    let request = LaunchRequest {
        program,
        args: vec![next.to_arg()],
        mode: settings.launch_mode,
    };
    launcher.launch_and_wait(request).await
}

fn emit<S: OutputSink + ?Sized>(sink: &mut S, event: LifecycleEvent) {
    sink.record(event.level(), &event);
}

