//! Scroll-driven step navigation and the small deterministic helpers that
//! surround it: hint timers, viewport gating, canned playback sequences and
//! the decorative constellation generator.

pub mod app;
pub mod constellation;
pub mod hint;
pub mod input;
pub mod playback;
pub mod render;
pub mod sections;
pub mod step;
pub mod text;
pub mod text_policy;
pub mod viewport;
