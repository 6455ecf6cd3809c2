impl StepNavigator {
    /// Advances timers. Call from the host frame loop.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        if self.disposed {
            return TickResult::NoRender;
        }
        self.clock_ms = self.clock_ms.max(now_ms);

        if !self.visible && self.viewport_entered.get() {
            self.mark_visible(now_ms);
        }

        if self.hint.tick(now_ms) {
            debug!("step-nav: hint visible={}", self.hint.is_visible());
            self.pending_redraw = true;
        }

        if self.pending_redraw {
            self.pending_redraw = false;
            return TickResult::RenderRequested;
        }

        if self.transition_frame(now_ms).is_some() {
            TickResult::RenderRequested
        } else {
            self.transition = None;
            TickResult::NoRender
        }
    }

    /// Records that the navigator entered the viewport and arms the hint.
    pub fn mark_visible(&mut self, now_ms: u64) {
        if self.disposed || self.visible {
            return;
        }
        self.visible = true;
        self.clock_ms = self.clock_ms.max(now_ms);
        if self.hint.arm(now_ms) {
            debug!(
                "step-nav: visible, hint armed delay_ms={} duration_ms={}",
                self.config.hint.delay_ms, self.config.hint.duration_ms
            );
        }
    }

    /// Arms the hint on the first tick after `watcher` reports viewport entry.
    pub fn watch_viewport<W>(&mut self, watcher: &mut W)
    where
        W: ViewportWatcher,
    {
        if self.disposed {
            return;
        }
        let entered = Rc::clone(&self.viewport_entered);
        watcher.on_enter(Box::new(move || entered.set(true)));
    }

    /// Follows a live change of the platform reduced-motion preference.
    pub fn set_reduced_motion(&mut self, reduced_motion: bool) {
        if self.config.reduced_motion == reduced_motion {
            return;
        }
        self.config.reduced_motion = reduced_motion;
        if reduced_motion {
            self.transition = None;
        }
        self.pending_redraw = true;
    }

    /// Tears the navigator down: pending hint deadlines are cancelled,
    /// listeners dropped, and every later call becomes a no-op.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.hint.cancel();
        self.transition = None;
        self.pending_redraw = false;
        self.last_gesture_ms = None;
        self.touch_start_y = None;
        self.listeners.clear();
        debug!("step-nav: disposed at index={}", self.index);
    }
}
