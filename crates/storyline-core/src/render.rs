//! View models and animation metadata handed to the rendering layer.

use crate::step::{Step, StepContent};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnimationKind {
    /// Content enters from below.
    Advance,
    /// Content enters from above.
    Retreat,
    /// Direct selection or reset.
    Jump,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationFrame {
    pub kind: AnimationKind,
    /// 0..=100
    pub progress_pct: u8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationSpec {
    pub kind: AnimationKind,
    pub start_ms: u64,
    pub duration_ms: u16,
}

impl AnimationSpec {
    pub const fn new(kind: AnimationKind, start_ms: u64, duration_ms: u16) -> Self {
        Self {
            kind,
            start_ms,
            duration_ms,
        }
    }

    pub fn frame(self, now_ms: u64) -> Option<AnimationFrame> {
        let duration = self.duration_ms.max(1) as u64;
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= duration {
            return None;
        }

        let progress = ((elapsed * 100) / duration).min(100) as u8;
        Some(AnimationFrame {
            kind: self.kind,
            progress_pct: progress,
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IndicatorState {
    Done,
    Active,
    Upcoming,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StepIndicatorView<'a> {
    pub index: usize,
    pub label: &'a str,
    pub icon: &'a str,
    pub state: IndicatorState,
}

/// Navigator snapshot consumed by the host renderer.
#[derive(Clone, Copy, Debug)]
pub struct NavigatorView<'a> {
    pub steps: &'a [Step],
    pub active: usize,
    /// `"{active + 1}/{total}"`.
    pub position_label: &'a str,
    /// Compact single-line preview of the active step's description.
    pub summary: &'a str,
    pub hint: Option<&'a str>,
    pub focused: bool,
    pub animation: Option<AnimationFrame>,
}

impl<'a> NavigatorView<'a> {
    pub fn total(&self) -> usize {
        self.steps.len()
    }

    pub fn current(&self) -> &'a Step {
        &self.steps[self.active]
    }

    pub fn can_retreat(&self) -> bool {
        self.active > 0
    }

    pub fn can_advance(&self) -> bool {
        self.active + 1 < self.steps.len()
    }

    /// Progress bar segments lit up to and including the active step.
    pub fn filled_segments(&self) -> usize {
        self.active + 1
    }

    pub fn indicators(&self) -> impl Iterator<Item = StepIndicatorView<'a>> + '_ {
        let active = self.active;
        self.steps
            .iter()
            .enumerate()
            .map(move |(index, step)| StepIndicatorView {
                index,
                label: step.label,
                icon: step.display_icon(),
                state: if index == active {
                    IndicatorState::Active
                } else if index < active {
                    IndicatorState::Done
                } else {
                    IndicatorState::Upcoming
                },
            })
    }

    pub fn content(&self) -> StepContent<'a> {
        let step = self.current();
        StepContent::new(step.body, step.variant)
    }
}
