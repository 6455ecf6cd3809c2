//! Stepped navigator: a current-step index over a fixed sequence, moved by
//! wheel, touch, keyboard and direct selection.

use core::{cell::Cell, fmt};
use std::rc::Rc;

use heapless::{String as HeaplessString, Vec as HeaplessVec};
use log::{debug, trace};

use crate::{
    hint::{HintConfig, HintPhase, HintTimer},
    input::{EventDisposition, InputEvent, InputProvider, NavKey},
    render::{AnimationFrame, AnimationKind, AnimationSpec, NavigatorView},
    step::Step,
    text_policy::{position_label, summary_line},
    viewport::ViewportWatcher,
};

pub const MAX_STEPS: usize = 16;
const SUMMARY_BYTES: usize = 96;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NavigatorConfig {
    /// Minimum spacing between accepted wheel/touch transitions.
    pub debounce_ms: u32,
    /// Wheel deltas below this magnitude are trackpad noise.
    pub wheel_threshold: u32,
    /// Swipes shorter than this are taps.
    pub touch_threshold: u32,
    pub transition_ms: u16,
    pub reduced_motion: bool,
    pub hint: HintConfig,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 400,
            wheel_threshold: 30,
            touch_threshold: 40,
            transition_ms: 250,
            reduced_motion: false,
            hint: HintConfig::default(),
        }
    }
}

impl NavigatorConfig {
    pub const fn with_debounce_ms(mut self, debounce_ms: u32) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub const fn with_wheel_threshold(mut self, wheel_threshold: u32) -> Self {
        self.wheel_threshold = wheel_threshold;
        self
    }

    pub const fn with_touch_threshold(mut self, touch_threshold: u32) -> Self {
        self.touch_threshold = touch_threshold;
        self
    }

    pub const fn with_transition_ms(mut self, transition_ms: u16) -> Self {
        self.transition_ms = transition_ms;
        self
    }

    pub const fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    pub const fn with_hint(mut self, hint: HintConfig) -> Self {
        self.hint = hint;
        self
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavigatorError {
    NoSteps,
    TooManySteps { given: usize, capacity: usize },
}

impl fmt::Display for NavigatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSteps => f.write_str("navigator needs at least one step"),
            Self::TooManySteps { given, capacity } => {
                write!(f, "navigator holds at most {capacity} steps, got {given}")
            }
        }
    }
}

impl std::error::Error for NavigatorError {}

/// Handle returned by [`StepNavigator::subscribe`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ListenerId(u32);

/// Receives the new zero-based index after every accepted change.
pub type StepListener = Box<dyn FnMut(usize)>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Direction {
    Forward,
    Backward,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GestureSource {
    Wheel,
    Touch,
}

impl GestureSource {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Wheel => "wheel",
            Self::Touch => "touch",
        }
    }
}

pub struct StepNavigator {
    steps: HeaplessVec<Step, MAX_STEPS>,
    config: NavigatorConfig,
    index: usize,
    hint: HintTimer,
    focused: bool,
    visible: bool,
    viewport_entered: Rc<Cell<bool>>,
    /// Shared by wheel and touch; keyboard and selection never touch it.
    last_gesture_ms: Option<u64>,
    touch_start_y: Option<i32>,
    transition: Option<AnimationSpec>,
    pending_redraw: bool,
    clock_ms: u64,
    listeners: Vec<(ListenerId, StepListener)>,
    next_listener_id: u32,
    disposed: bool,
}

include!("view.rs");
include!("input.rs");
include!("navigation.rs");
include!("runtime.rs");

#[cfg(test)]
mod tests;
