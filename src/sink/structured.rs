// src/sink/structured.rs

use tracing::{error, info, warn};

use super::{EventLevel, LifecycleEvent, OutputSink};

/// Emits lifecycle events through `tracing`, tagged with this process's pid.
#[derive(Debug, Clone, Copy)]
pub struct StructuredSink {
    pid: u32,
}

impl StructuredSink {
    pub fn new() -> Self {
        Self {
            pid: std::process::id(),
        }
    }
}

impl Default for StructuredSink {
    fn default() -> Self {
        Self::new()
    }
}

// `tracing` macros need the level at compile time.
macro_rules! emit {
    ($level:expr, $($rest:tt)+) => {
        match $level {
            EventLevel::Information => info!($($rest)+),
            EventLevel::Warning => warn!($($rest)+),
            EventLevel::Error => error!($($rest)+),
        }
    };
}

impl OutputSink for StructuredSink {
    fn record(&mut self, level: EventLevel, event: &LifecycleEvent) {
        let pid = self.pid;
        match event {
            LifecycleEvent::LinkStarted {
                state,
                source,
                args,
            } => emit!(
                level,
                pid,
                state = state.value(),
                source = ?source,
                args = ?args,
                "link started"
            ),
            LifecycleEvent::BoundReached { state, bound } => emit!(
                level,
                pid,
                state = state.value(),
                bound = bound.value(),
                "bound reached"
            ),
            LifecycleEvent::ChildExited { next, exit_code } => emit!(
                level,
                pid,
                next = next.value(),
                exit_code,
                "child exited"
            ),
            LifecycleEvent::LaunchFailed { next, reason } => emit!(
                level,
                pid,
                next = next.value(),
                reason = %reason,
                "child launch failed"
            ),
        }
    }
}
