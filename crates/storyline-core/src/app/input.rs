impl StepNavigator {
    /// Drains `input`, applying each event at `now_ms`. Returns the number of
    /// events handled.
    pub fn process_inputs<IN>(&mut self, input: &mut IN, now_ms: u64) -> Result<usize, IN::Error>
    where
        IN: InputProvider,
    {
        self.process_inputs_with(input, now_ms, |_, _| {})
    }

    /// Like [`Self::process_inputs`], reporting every event's disposition so
    /// the host can let unconsumed events keep their default behaviour.
    pub fn process_inputs_with<IN, F>(
        &mut self,
        input: &mut IN,
        now_ms: u64,
        mut on_disposition: F,
    ) -> Result<usize, IN::Error>
    where
        IN: InputProvider,
        F: FnMut(InputEvent, EventDisposition),
    {
        let mut handled = 0usize;
        while let Some(event) = input.poll_event(now_ms)? {
            let disposition = self.handle_event(event, now_ms);
            trace!("step-nav: polled event={:?} disposition={:?}", event, disposition);
            on_disposition(event, disposition);
            handled = handled.saturating_add(1);
        }
        Ok(handled)
    }

    /// Applies one toolkit event. The returned disposition tells the host
    /// whether to suppress the event's default behaviour.
    pub fn handle_event(&mut self, event: InputEvent, now_ms: u64) -> EventDisposition {
        if self.disposed {
            trace!("step-nav: ignored event after dispose event={:?}", event);
            return EventDisposition::Ignored;
        }
        self.clock_ms = self.clock_ms.max(now_ms);

        match event {
            InputEvent::Wheel { delta_y } => self.apply_wheel(delta_y, now_ms),
            InputEvent::TouchStart { y } => {
                self.touch_start_y = Some(y);
                EventDisposition::Ignored
            }
            InputEvent::TouchEnd { y } => self.apply_touch_end(y, now_ms),
            InputEvent::Key(key) => self.apply_key(key),
            InputEvent::Select(index) => {
                self.go_to(index);
                EventDisposition::Consumed
            }
            InputEvent::Previous => {
                self.dismiss_hint();
                self.previous();
                EventDisposition::Consumed
            }
            InputEvent::Next => {
                self.dismiss_hint();
                self.next();
                EventDisposition::Consumed
            }
            InputEvent::Reset => {
                self.dismiss_hint();
                self.reset();
                EventDisposition::Consumed
            }
            InputEvent::PointerDown => {
                self.dismiss_hint();
                EventDisposition::Ignored
            }
            InputEvent::Focus(focused) => {
                self.set_focus(focused);
                EventDisposition::Ignored
            }
        }
    }

    pub fn set_focus(&mut self, focused: bool) {
        if self.disposed || self.focused == focused {
            return;
        }
        self.focused = focused;
        self.pending_redraw = true;
        debug!("step-nav: focus={}", focused);
    }

    fn apply_wheel(&mut self, delta_y: i32, now_ms: u64) -> EventDisposition {
        if delta_y.unsigned_abs() < self.config.wheel_threshold {
            trace!("step-nav: wheel below threshold delta_y={}", delta_y);
            return EventDisposition::Ignored;
        }

        let direction = if delta_y > 0 {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.apply_gesture(direction, GestureSource::Wheel, now_ms)
    }

    fn apply_touch_end(&mut self, end_y: i32, now_ms: u64) -> EventDisposition {
        let Some(start_y) = self.touch_start_y.take() else {
            trace!("step-nav: touch end without start y={}", end_y);
            return EventDisposition::Ignored;
        };

        // Finger moving up (start below end) reads as scrolling forward.
        let delta_y = start_y.saturating_sub(end_y);
        if delta_y.unsigned_abs() < self.config.touch_threshold {
            trace!("step-nav: touch below threshold delta_y={}", delta_y);
            return EventDisposition::Ignored;
        }

        let direction = if delta_y > 0 {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.apply_gesture(direction, GestureSource::Touch, now_ms)
    }

    fn apply_gesture(
        &mut self,
        direction: Direction,
        source: GestureSource,
        now_ms: u64,
    ) -> EventDisposition {
        self.dismiss_hint();

        if self.at_boundary(direction) {
            trace!(
                "step-nav: {} pass-through at boundary index={}/{} direction={:?}",
                source.as_str(),
                self.index.saturating_add(1),
                self.steps.len(),
                direction
            );
            return EventDisposition::PassThrough;
        }

        if let Some(last) = self.last_gesture_ms
            && now_ms.saturating_sub(last) < self.config.debounce_ms as u64
        {
            trace!(
                "step-nav: {} debounced elapsed_ms={}",
                source.as_str(),
                now_ms.saturating_sub(last)
            );
            return EventDisposition::Consumed;
        }
        self.last_gesture_ms = Some(now_ms);

        match direction {
            Direction::Forward => self.next(),
            Direction::Backward => self.previous(),
        };
        EventDisposition::Consumed
    }

    fn apply_key(&mut self, key: NavKey) -> EventDisposition {
        if !self.focused {
            return EventDisposition::Ignored;
        }

        if key.is_forward() {
            self.dismiss_hint();
            self.next();
            EventDisposition::Consumed
        } else if key.is_backward() {
            self.dismiss_hint();
            self.previous();
            EventDisposition::Consumed
        } else {
            EventDisposition::Ignored
        }
    }

    fn at_boundary(&self, direction: Direction) -> bool {
        match direction {
            Direction::Forward => self.index.saturating_add(1) >= self.steps.len(),
            Direction::Backward => self.index == 0,
        }
    }
}
