//! Input abstraction layer.

mod mock;

pub use mock::{MockInput, ScriptedInput, TimedEvent};

/// Arrow keys recognised by the navigator. Anything else maps to `Other`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavKey {
    ArrowDown,
    ArrowRight,
    ArrowUp,
    ArrowLeft,
    Other,
}

impl NavKey {
    pub const fn is_forward(self) -> bool {
        matches!(self, Self::ArrowDown | Self::ArrowRight)
    }

    pub const fn is_backward(self) -> bool {
        matches!(self, Self::ArrowUp | Self::ArrowLeft)
    }
}

/// Logical actions delivered by the host toolkit, in delivery order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    /// Vertical wheel delta in pixels. Positive scrolls forward.
    Wheel { delta_y: i32 },
    /// Finger down at vertical position `y`.
    TouchStart { y: i32 },
    /// Finger lifted at vertical position `y`.
    TouchEnd { y: i32 },
    Key(NavKey),
    /// Step indicator clicked.
    Select(usize),
    /// Previous-step button.
    Previous,
    /// Next-step button.
    Next,
    Reset,
    /// Any pointer press inside the navigator, including ones that miss controls.
    PointerDown,
    Focus(bool),
}

/// What the host should do with the toolkit event that produced an [`InputEvent`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EventDisposition {
    /// Handled here; suppress the default behaviour (page scrolling).
    Consumed,
    /// At a boundary; let the enclosing scroll container take over.
    PassThrough,
    /// Not relevant to the navigator (noise, unfocused keys, after teardown).
    Ignored,
}

impl EventDisposition {
    pub const fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self, now_ms: u64) -> Result<Option<InputEvent>, Self::Error>;
}
