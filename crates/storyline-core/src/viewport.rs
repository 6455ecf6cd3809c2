//! Viewport visibility capability.
//!
//! Platform adapters translate their native intersection notifications into
//! [`ThresholdWatcher::observe`] calls; everything above that sees only the
//! [`ViewportWatcher`] trait.

use std::{cell::Cell, rc::Rc};

use log::trace;

/// Callback invoked when the watched element enters the viewport.
pub type EnterCallback = Box<dyn FnMut()>;

pub trait ViewportWatcher {
    /// Registers `callback` for the first viewport entry.
    fn on_enter(&mut self, callback: EnterCallback);

    /// Stops watching and drops every registered callback.
    fn dispose(&mut self);
}

pub const HINT_VISIBILITY_THRESHOLD: f32 = 0.3;

/// Fires its callbacks once, the first time the observed intersection ratio
/// reaches the threshold, then disconnects.
pub struct ThresholdWatcher {
    threshold: f32,
    callbacks: Vec<EnterCallback>,
    entered: bool,
    disposed: bool,
}

impl ThresholdWatcher {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            callbacks: Vec::new(),
            entered: false,
            disposed: false,
        }
    }

    pub const fn has_entered(&self) -> bool {
        self.entered
    }

    pub const fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Feeds one intersection ratio (`0.0..=1.0`).
    pub fn observe(&mut self, ratio: f32) {
        if self.disposed || self.entered {
            return;
        }
        // A zero threshold still requires some overlap.
        let intersecting = ratio > 0.0 && ratio >= self.threshold;
        if !intersecting {
            trace!("viewport: ratio={} below threshold={}", ratio, self.threshold);
            return;
        }

        self.entered = true;
        for callback in self.callbacks.iter_mut() {
            callback();
        }
        // Disconnect after the first entry.
        self.callbacks.clear();
    }
}

impl Default for ThresholdWatcher {
    fn default() -> Self {
        Self::new(HINT_VISIBILITY_THRESHOLD)
    }
}

impl ViewportWatcher for ThresholdWatcher {
    fn on_enter(&mut self, mut callback: EnterCallback) {
        if self.disposed {
            return;
        }
        if self.entered {
            callback();
            return;
        }
        self.callbacks.push(callback);
    }

    fn dispose(&mut self) {
        self.disposed = true;
        self.callbacks.clear();
    }
}

/// Viewport-gated mounting: content mounts on first entry and stays mounted.
#[derive(Debug, Clone, Default)]
pub struct LazyMount {
    mounted: Rc<Cell<bool>>,
}

impl LazyMount {
    pub fn new<W: ViewportWatcher>(watcher: &mut W) -> Self {
        let mounted = Rc::new(Cell::new(false));
        let flag = Rc::clone(&mounted);
        watcher.on_enter(Box::new(move || flag.set(true)));
        Self { mounted }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_when_threshold_reached() {
        let hits = Rc::new(Cell::new(0u32));
        let mut watcher = ThresholdWatcher::new(0.3);
        let counter = Rc::clone(&hits);
        watcher.on_enter(Box::new(move || counter.set(counter.get() + 1)));

        watcher.observe(0.1);
        assert_eq!(hits.get(), 0);

        watcher.observe(0.5);
        watcher.observe(0.9);
        assert_eq!(hits.get(), 1);
        assert!(watcher.has_entered());
    }

    #[test]
    fn late_registration_after_entry_fires_immediately() {
        let mut watcher = ThresholdWatcher::new(0.3);
        watcher.observe(1.0);

        let hit = Rc::new(Cell::new(false));
        let flag = Rc::clone(&hit);
        watcher.on_enter(Box::new(move || flag.set(true)));
        assert!(hit.get());
    }

    #[test]
    fn disposed_watcher_never_fires() {
        let hit = Rc::new(Cell::new(false));
        let mut watcher = ThresholdWatcher::default();
        let flag = Rc::clone(&hit);
        watcher.on_enter(Box::new(move || flag.set(true)));

        watcher.dispose();
        watcher.observe(1.0);
        assert!(!hit.get());
        assert!(!watcher.has_entered());
    }

    #[test]
    fn zero_threshold_needs_some_overlap() {
        let mut watcher = ThresholdWatcher::new(0.0);
        watcher.observe(0.0);
        assert!(!watcher.has_entered());
        watcher.observe(0.01);
        assert!(watcher.has_entered());
    }

    #[test]
    fn lazy_mount_stays_mounted() {
        let mut watcher = ThresholdWatcher::new(0.0);
        let mount = LazyMount::new(&mut watcher);
        assert!(!mount.is_mounted());

        watcher.observe(0.2);
        assert!(mount.is_mounted());

        watcher.observe(0.0);
        assert!(mount.is_mounted());
    }
}
