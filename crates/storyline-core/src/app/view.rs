impl StepNavigator {
    pub fn new(steps: &[Step], config: NavigatorConfig) -> Result<Self, NavigatorError> {
        if steps.is_empty() {
            return Err(NavigatorError::NoSteps);
        }
        let steps: HeaplessVec<Step, MAX_STEPS> =
            HeaplessVec::from_slice(steps).map_err(|()| NavigatorError::TooManySteps {
                given: steps.len(),
                capacity: MAX_STEPS,
            })?;

        debug!("step-nav: created steps={}", steps.len());

        Ok(Self {
            steps,
            config,
            index: 0,
            hint: HintTimer::new(config.hint),
            focused: false,
            visible: false,
            viewport_entered: Rc::new(Cell::new(false)),
            last_gesture_ms: None,
            touch_start_y: None,
            transition: None,
            pending_redraw: true,
            clock_ms: 0,
            listeners: Vec::new(),
            next_listener_id: 0,
            disposed: false,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; construction rejects an empty step list.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn current_step(&self) -> &Step {
        &self.steps[self.index]
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    pub fn hint_visible(&self) -> bool {
        self.hint.is_visible()
    }

    pub fn hint_phase(&self) -> HintPhase {
        self.hint.phase()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn with_view<F>(&self, now_ms: u64, f: F)
    where
        F: FnOnce(NavigatorView<'_>),
    {
        let position = position_label(self.index, self.steps.len());
        let summary: HeaplessString<SUMMARY_BYTES> = self
            .current_step()
            .description
            .map(summary_line::<SUMMARY_BYTES>)
            .unwrap_or_default();

        f(NavigatorView {
            steps: &self.steps,
            active: self.index,
            position_label: position.as_str(),
            summary: summary.as_str(),
            hint: self.hint.is_visible().then_some(self.hint.text()),
            focused: self.focused,
            animation: self.transition_frame(now_ms),
        });
    }

    fn transition_frame(&self, now_ms: u64) -> Option<AnimationFrame> {
        self.transition.and_then(|anim| anim.frame(now_ms))
    }
}
