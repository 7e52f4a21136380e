// src/sink/mod.rs

//! Output sinks for chain lifecycle events.
//!
//! - [`console`] writes one plain line per event (stdout in production).
//! - [`structured`] emits one `tracing` event per lifecycle event, with
//!   structured fields.
//!
//! The orchestrator only sees the [`OutputSink`] trait, so tests can plug in
//! a recording sink.

pub mod console;
pub mod structured;

use std::fmt;

use crate::chain::{ChainBound, ChainState, StateSource};
use crate::types::SinkKind;

pub use console::ConsoleSink;
pub use structured::StructuredSink;

/// Severity attached to a recorded event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventLevel {
    Information,
    Warning,
    Error,
}

impl fmt::Display for EventLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventLevel::Information => "INF",
            EventLevel::Warning => "WRN",
            EventLevel::Error => "ERR",
        };
        f.write_str(s)
    }
}

/// Something that happened in the life of one link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// State resolved from the raw arguments.
    LinkStarted {
        state: ChainState,
        source: StateSource,
        args: Vec<String>,
    },
    /// The successor would exceed the bound; no child is launched.
    BoundReached { state: ChainState, bound: ChainBound },
    /// The child carrying `next` exited.
    ChildExited { next: ChainState, exit_code: i32 },
    /// The child carrying `next` could not be launched or awaited.
    LaunchFailed { next: ChainState, reason: String },
}

impl LifecycleEvent {
    /// Level this event is recorded at.
    pub fn level(&self) -> EventLevel {
        match self {
            LifecycleEvent::LinkStarted {
                source: StateSource::Malformed(_),
                ..
            } => EventLevel::Warning,
            LifecycleEvent::LinkStarted { .. } | LifecycleEvent::BoundReached { .. } => {
                EventLevel::Information
            }
            LifecycleEvent::ChildExited { exit_code, .. } => {
                if *exit_code == 0 {
                    EventLevel::Information
                } else {
                    EventLevel::Warning
                }
            }
            LifecycleEvent::LaunchFailed { .. } => EventLevel::Error,
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleEvent::LinkStarted {
                state,
                source,
                args,
            } => {
                write!(f, "start [{}] state={state}", args.join(", "))?;
                match source {
                    StateSource::Argument => Ok(()),
                    StateSource::Absent => write!(f, " (no state argument, starting at 0)"),
                    StateSource::Malformed(raw) => {
                        write!(f, " (malformed state argument {raw:?}, starting at 0)")
                    }
                }
            }
            LifecycleEvent::BoundReached { state, bound } => {
                write!(f, "reached bound {bound} at state {state}")
            }
            LifecycleEvent::ChildExited { next, exit_code } => {
                write!(f, "ending -- child {next} exited with code {exit_code}")
            }
            LifecycleEvent::LaunchFailed { next, reason } => {
                write!(f, "failed to launch child {next}: {reason}")
            }
        }
    }
}

/// Destination for lifecycle events.
pub trait OutputSink: Send {
    fn record(&mut self, level: EventLevel, event: &LifecycleEvent);
}

impl<S: OutputSink + ?Sized> OutputSink for Box<S> {
    fn record(&mut self, level: EventLevel, event: &LifecycleEvent) {
        (**self).record(level, event)
    }
}

/// Build the sink selected by `[logging].sink`.
pub fn build_sink(kind: SinkKind) -> Box<dyn OutputSink> {
    match kind {
        SinkKind::Console => Box::new(ConsoleSink::stdout()),
        SinkKind::Structured => Box::new(StructuredSink::new()),
    }
}
