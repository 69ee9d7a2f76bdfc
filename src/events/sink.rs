//! Event sinks.

use std::io::{self, Write};

use super::event::GameEvent;

/// Receives session events as they happen.
pub trait EventSink {
    /// Handle one event.
    fn emit(&mut self, event: &GameEvent);
}

/// Collects every event, in order.
impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: &GameEvent) {
        (**self).emit(event);
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &GameEvent) {}
}

/// Writes one line per event, with a blank line after each session.
///
/// Write failures don't interrupt the session. The first one is kept and
/// returned by [`LineReporter::finish`]; later events are dropped.
#[derive(Debug)]
pub struct LineReporter<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl LineReporter<io::Stdout> {
    /// Report to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> LineReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Flush and hand back the writer, or the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_event(&mut self, event: &GameEvent) -> io::Result<()> {
        writeln!(self.out, "{}", event)?;
        if matches!(event, GameEvent::SessionEnded { .. }) {
            writeln!(self.out)?;
        }
        Ok(())
    }
}

impl<W: Write> EventSink for LineReporter<W> {
    fn emit(&mut self, event: &GameEvent) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.write_event(event) {
            tracing::error!(error = %err, "failed to report event");
            self.error = Some(err);
        }
    }
}
