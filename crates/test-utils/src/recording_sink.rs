use std::sync::{Arc, Mutex};

use proc_chain::chain::ChainState;
use proc_chain::sink::{EventLevel, LifecycleEvent, OutputSink};

/// A sink that keeps every recorded event. Clones share the same log, so a
/// whole simulated chain can write into one place.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<(EventLevel, LifecycleEvent)>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(EventLevel, LifecycleEvent)> {
        self.events.lock().unwrap().clone()
    }

    /// States of every `LinkStarted` event, in order.
    pub fn started_states(&self) -> Vec<u64> {
        self.events()
            .into_iter()
            .filter_map(|(_, ev)| match ev {
                LifecycleEvent::LinkStarted { state, .. } => Some(state.value()),
                _ => None,
            })
            .collect()
    }

    /// `next` of every `ChildExited` event, in order.
    pub fn exited_children(&self) -> Vec<u64> {
        self.events()
            .into_iter()
            .filter_map(|(_, ev)| match ev {
                LifecycleEvent::ChildExited { next, .. } => Some(next.value()),
                _ => None,
            })
            .collect()
    }

    pub fn count_bound_reached(&self) -> usize {
        self.events()
            .iter()
            .filter(|(_, ev)| matches!(ev, LifecycleEvent::BoundReached { .. }))
            .count()
    }

    pub fn launch_failures(&self) -> Vec<ChainState> {
        self.events()
            .into_iter()
            .filter_map(|(_, ev)| match ev {
                LifecycleEvent::LaunchFailed { next, .. } => Some(next),
                _ => None,
            })
            .collect()
    }
}

impl OutputSink for RecordingSink {
    fn record(&mut self, level: EventLevel, event: &LifecycleEvent) {
        self.events.lock().unwrap().push((level, event.clone()));
    }
}
