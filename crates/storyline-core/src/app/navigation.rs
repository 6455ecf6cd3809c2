impl StepNavigator {
    /// Jumps to `index`, clamped to the last step. Dismisses the hint and
    /// always notifies listeners, even when the index is unchanged.
    pub fn go_to(&mut self, index: usize) {
        if self.disposed {
            return;
        }
        let last = self.steps.len().saturating_sub(1);
        if index > last {
            debug!("step-nav: clamped go_to index={} last={}", index, last);
        }
        self.dismiss_hint();
        self.move_to(index.min(last), AnimationKind::Jump, true);
    }

    /// Moves forward one step. No-op on the last step.
    pub fn next(&mut self) -> bool {
        let target = self.index.saturating_add(1);
        if target >= self.steps.len() {
            return false;
        }
        self.move_to(target, AnimationKind::Advance, false)
    }

    /// Moves back one step. No-op on the first step.
    pub fn previous(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.move_to(self.index - 1, AnimationKind::Retreat, false)
    }

    /// Returns to the first step and always notifies listeners.
    pub fn reset(&mut self) {
        self.move_to(0, AnimationKind::Jump, true);
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(usize) + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id = self.next_listener_id.wrapping_add(1);
        if !self.disposed {
            self.listeners.push((id, Box::new(listener)));
        }
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn move_to(&mut self, target: usize, kind: AnimationKind, always_notify: bool) -> bool {
        if self.disposed {
            return false;
        }

        let changed = target != self.index;
        if !changed && !always_notify {
            return false;
        }

        if changed {
            debug!(
                "step-nav: move {}/{} -> {}/{} kind={:?}",
                self.index.saturating_add(1),
                self.steps.len(),
                target.saturating_add(1),
                self.steps.len(),
                kind
            );
            self.index = target;
            self.start_transition(kind);
            self.pending_redraw = true;
        }

        self.notify(target);
        changed
    }

    fn notify(&mut self, index: usize) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(index);
        }
    }

    fn start_transition(&mut self, kind: AnimationKind) {
        if self.config.reduced_motion {
            self.transition = None;
            return;
        }
        self.transition = Some(AnimationSpec::new(
            kind,
            self.clock_ms,
            self.config.transition_ms,
        ));
    }

    fn dismiss_hint(&mut self) {
        if self.hint.is_dismissed() {
            return;
        }
        if self.hint.dismiss() {
            self.pending_redraw = true;
        }
        debug!("step-nav: hint dismissed by input");
    }
}
