//! Canned timed sequences: cue lists revealed against the host clock.

use core::fmt;

use heapless::Vec as HeaplessVec;
use log::debug;

pub const MAX_CUES: usize = 32;

/// Line offsets of the canned test-suite run.
pub const TEST_RUN_CUES_MS: [u32; 21] = [
    0, 200, 400, 600, 750, 850, 950, 1050, 1150, 1300, 1400, 1500, 1600, 1700, 1850, 1950, 2050,
    2200, 2400, 2550, 2700,
];
pub const TEST_RUN_TOTAL_MS: u32 = 3000;
pub const FLOW_INTERVAL_MS: u32 = 1200;

pub const COVERAGE_RAMP: Ramp = Ramp {
    from: 20,
    to: 87,
    start_ms: 2400,
    span_ms: 600,
    steps: 30,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlaybackError {
    TooManyCues { given: usize, capacity: usize },
    UnorderedCues { index: usize },
    CueAfterEnd { index: usize },
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyCues { given, capacity } => {
                write!(f, "{given} cues exceed capacity of {capacity}")
            }
            Self::UnorderedCues { index } => write!(f, "cue {index} precedes its predecessor"),
            Self::CueAfterEnd { index } => write!(f, "cue {index} falls after the total duration"),
        }
    }
}

impl std::error::Error for PlaybackError {}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlaybackPhase {
    Idle,
    Running { started_at_ms: u64 },
    Finished,
}

#[derive(Clone, Debug)]
pub struct Playback {
    cues: HeaplessVec<u32, MAX_CUES>,
    total_ms: u32,
    phase: PlaybackPhase,
    revealed: usize,
}

impl Playback {
    pub fn new(cues_ms: &[u32], total_ms: u32) -> Result<Self, PlaybackError> {
        for (index, pair) in cues_ms.windows(2).enumerate() {
            if pair[1] < pair[0] {
                return Err(PlaybackError::UnorderedCues { index: index + 1 });
            }
        }
        if let Some(index) = cues_ms.iter().position(|&cue| cue > total_ms) {
            return Err(PlaybackError::CueAfterEnd { index });
        }

        let cues: HeaplessVec<u32, MAX_CUES> =
            HeaplessVec::from_slice(cues_ms).map_err(|()| PlaybackError::TooManyCues {
                given: cues_ms.len(),
                capacity: MAX_CUES,
            })?;

        Ok(Self {
            cues,
            total_ms,
            phase: PlaybackPhase::Idle,
            revealed: 0,
        })
    }

    /// One cue every `interval_ms`, complete one interval after the last.
    pub fn uniform(count: usize, interval_ms: u32) -> Result<Self, PlaybackError> {
        if count > MAX_CUES {
            return Err(PlaybackError::TooManyCues {
                given: count,
                capacity: MAX_CUES,
            });
        }

        let mut cues = [0u32; MAX_CUES];
        for (index, cue) in cues.iter_mut().take(count).enumerate() {
            *cue = interval_ms.saturating_mul(index as u32);
        }
        Self::new(&cues[..count], interval_ms.saturating_mul(count as u32))
    }

    pub fn test_run() -> Result<Self, PlaybackError> {
        Self::new(&TEST_RUN_CUES_MS, TEST_RUN_TOTAL_MS)
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    pub fn cue_count(&self) -> usize {
        self.cues.len()
    }

    pub fn total_ms(&self) -> u32 {
        self.total_ms
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, PlaybackPhase::Running { .. })
    }

    pub fn is_finished(&self) -> bool {
        self.phase == PlaybackPhase::Finished
    }

    /// Number of cues revealed so far; stays at the full count once finished.
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// Latest revealed cue while running.
    pub fn current(&self) -> Option<usize> {
        if self.is_running() {
            self.revealed.checked_sub(1)
        } else {
            None
        }
    }

    pub fn elapsed_ms(&self, now_ms: u64) -> Option<u64> {
        match self.phase {
            PlaybackPhase::Running { started_at_ms } => Some(now_ms.saturating_sub(started_at_ms)),
            _ => None,
        }
    }

    /// Refused while a run is in flight. Cues at offset 0 appear immediately.
    pub fn start(&mut self, now_ms: u64) -> bool {
        if self.is_running() {
            return false;
        }

        self.phase = PlaybackPhase::Running {
            started_at_ms: now_ms,
        };
        self.revealed = 0;
        self.tick(now_ms);
        true
    }

    /// Returns true when the revealed set or the phase changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let Some(elapsed) = self.elapsed_ms(now_ms) else {
            return false;
        };

        let before = self.revealed;
        while self.revealed < self.cues.len() && u64::from(self.cues[self.revealed]) <= elapsed {
            self.revealed += 1;
        }

        if elapsed >= u64::from(self.total_ms) {
            self.revealed = self.cues.len();
            self.phase = PlaybackPhase::Finished;
            debug!("playback: finished cues={}", self.revealed);
            return true;
        }

        self.revealed != before
    }

    /// Drops pending cues; what was revealed stays revealed.
    pub fn cancel(&mut self) {
        if self.is_running() {
            self.phase = PlaybackPhase::Idle;
        }
    }

    pub fn reset(&mut self) {
        self.phase = PlaybackPhase::Idle;
        self.revealed = 0;
    }
}

/// Stepped counter interpolated from `from` to `to`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Ramp {
    pub from: u32,
    pub to: u32,
    pub start_ms: u32,
    pub span_ms: u32,
    pub steps: u32,
}

impl Ramp {
    pub fn value_at(&self, elapsed_ms: u64) -> u32 {
        let Some(into) = elapsed_ms.checked_sub(u64::from(self.start_ms)) else {
            return self.from;
        };
        if self.steps == 0 || self.span_ms == 0 {
            return self.to;
        }

        let step = (into.saturating_mul(u64::from(self.steps)) / u64::from(self.span_ms))
            .min(u64::from(self.steps));
        let fraction = step as f64 / f64::from(self.steps);
        let value = f64::from(self.from) + (f64::from(self.to) - f64::from(self.from)) * fraction;
        value.round() as u32
    }
}
