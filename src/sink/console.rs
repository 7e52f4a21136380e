// src/sink/console.rs

use std::io::{self, Write};

use super::{EventLevel, LifecycleEvent, OutputSink};

/// Writes `[LVL] message` lines to a writer, stdout by default.
///
/// Each line is flushed immediately: children inherit the same stdout, and
/// their lines must not overtake a parent's buffered ones.
pub struct ConsoleSink<W: Write + Send = io::Stdout> {
    out: W,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> OutputSink for ConsoleSink<W> {
    fn record(&mut self, level: EventLevel, event: &LifecycleEvent) {
        // A closed stdout must not take the chain down with it.
        let _ = writeln!(self.out, "[{level}] {event}");
        let _ = self.out.flush();
    }
}
