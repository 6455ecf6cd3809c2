use storyline_core::input::{InputEvent, NavKey, TimedEvent};

/// Section scrolls into view here; the hint arms on the following tick.
pub const ENTER_VIEW_MS: u64 = 200;
pub const END_MS: u64 = 6_000;

pub const SCRIPT: [TimedEvent; 12] = [
    TimedEvent::new(2_000, InputEvent::Wheel { delta_y: 60 }),
    TimedEvent::new(2_050, InputEvent::Wheel { delta_y: 60 }),
    TimedEvent::new(2_100, InputEvent::Wheel { delta_y: 12 }),
    TimedEvent::new(2_600, InputEvent::TouchStart { y: 500 }),
    TimedEvent::new(2_650, InputEvent::TouchEnd { y: 440 }),
    TimedEvent::new(3_200, InputEvent::Focus(true)),
    TimedEvent::new(3_300, InputEvent::Key(NavKey::ArrowDown)),
    TimedEvent::new(3_350, InputEvent::Key(NavKey::ArrowRight)),
    TimedEvent::new(4_000, InputEvent::Wheel { delta_y: 80 }),
    TimedEvent::new(4_500, InputEvent::Select(1)),
    TimedEvent::new(5_000, InputEvent::Key(NavKey::ArrowUp)),
    TimedEvent::new(5_500, InputEvent::Reset),
];

/// Intersection ratio reported by the simulated page.
pub fn visibility_at(now_ms: u64) -> f32 {
    if now_ms < ENTER_VIEW_MS { 0.1 } else { 0.6 }
}
