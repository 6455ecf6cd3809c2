//! One-shot "how to interact" hint with delayed show and timed auto-hide.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HintConfig {
    pub text: &'static str,
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub enabled: bool,
}

impl Default for HintConfig {
    fn default() -> Self {
        Self {
            text: "Scroll to explore steps",
            delay_ms: 800,
            duration_ms: 4_000,
            enabled: true,
        }
    }
}

impl HintConfig {
    pub const fn with_text(mut self, text: &'static str) -> Self {
        self.text = text;
        self
    }

    pub const fn with_delay_ms(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub const fn with_duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HintPhase {
    /// Waiting for the host view to become visible.
    Idle,
    Scheduled { show_at_ms: u64, hide_at_ms: u64 },
    Visible { hide_at_ms: u64 },
    /// Terminal.
    Dismissed,
}

#[derive(Clone, Copy, Debug)]
pub struct HintTimer {
    config: HintConfig,
    phase: HintPhase,
}

impl HintTimer {
    pub const fn new(config: HintConfig) -> Self {
        Self {
            config,
            phase: HintPhase::Idle,
        }
    }

    pub const fn phase(&self) -> HintPhase {
        self.phase
    }

    pub const fn text(&self) -> &'static str {
        self.config.text
    }

    pub const fn is_visible(&self) -> bool {
        matches!(self.phase, HintPhase::Visible { .. })
    }

    pub const fn is_dismissed(&self) -> bool {
        matches!(self.phase, HintPhase::Dismissed)
    }

    /// Starts both deadlines. Only the first call after construction counts.
    pub fn arm(&mut self, now_ms: u64) -> bool {
        if !matches!(self.phase, HintPhase::Idle) {
            return false;
        }
        if !self.config.enabled {
            self.phase = HintPhase::Dismissed;
            return false;
        }

        let show_at_ms = now_ms.saturating_add(self.config.delay_ms as u64);
        let hide_at_ms = show_at_ms.saturating_add(self.config.duration_ms as u64);
        self.phase = HintPhase::Scheduled {
            show_at_ms,
            hide_at_ms,
        };
        true
    }

    /// Returns `true` when the hint was visible and just went away.
    pub fn dismiss(&mut self) -> bool {
        let was_visible = self.is_visible();
        self.phase = HintPhase::Dismissed;
        was_visible
    }

    /// Drops any pending deadline without ever showing again.
    pub fn cancel(&mut self) {
        self.phase = HintPhase::Dismissed;
    }

    /// Advances deadlines. Returns `true` when visibility changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.phase {
            HintPhase::Scheduled {
                show_at_ms,
                hide_at_ms,
            } => {
                if now_ms >= hide_at_ms {
                    self.phase = HintPhase::Dismissed;
                    false
                } else if now_ms >= show_at_ms {
                    self.phase = HintPhase::Visible { hide_at_ms };
                    true
                } else {
                    false
                }
            }
            HintPhase::Visible { hide_at_ms } => {
                if now_ms >= hide_at_ms {
                    self.phase = HintPhase::Dismissed;
                    true
                } else {
                    false
                }
            }
            HintPhase::Idle | HintPhase::Dismissed => false,
        }
    }
}
