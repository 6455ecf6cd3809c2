use super::{InputEvent, InputProvider};

/// Input source that never produces events.
#[derive(Default, Debug, Clone, Copy)]
pub struct MockInput;

impl MockInput {
    pub const fn new() -> Self {
        Self
    }
}

impl InputProvider for MockInput {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self, _now_ms: u64) -> Result<Option<InputEvent>, Self::Error> {
        Ok(None)
    }
}

/// Event stamped with the host time at which it is delivered.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimedEvent {
    pub at_ms: u64,
    pub event: InputEvent,
}

impl TimedEvent {
    pub const fn new(at_ms: u64, event: InputEvent) -> Self {
        Self { at_ms, event }
    }
}

/// Replays a fixed timeline. Events become available once the clock reaches
/// their timestamp; the slice must be ordered by `at_ms`.
#[derive(Debug, Clone)]
pub struct ScriptedInput<'a> {
    events: &'a [TimedEvent],
    cursor: usize,
}

impl<'a> ScriptedInput<'a> {
    pub const fn new(events: &'a [TimedEvent]) -> Self {
        Self { events, cursor: 0 }
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.events.len()
    }

    /// Timestamp of the next undelivered event.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.events.get(self.cursor).map(|timed| timed.at_ms)
    }
}

impl InputProvider for ScriptedInput<'_> {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self, now_ms: u64) -> Result<Option<InputEvent>, Self::Error> {
        let Some(timed) = self.events.get(self.cursor).copied() else {
            return Ok(None);
        };
        if timed.at_ms > now_ms {
            return Ok(None);
        }
        self.cursor = self.cursor.saturating_add(1);
        Ok(Some(timed.event))
    }
}
