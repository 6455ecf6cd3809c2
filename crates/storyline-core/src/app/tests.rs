use std::cell::RefCell;

use super::*;
use crate::{
    input::{MockInput, ScriptedInput, TimedEvent},
    render::IndicatorState,
    step::ContentVariant,
    viewport::ThresholdWatcher,
};

const FIVE_STEPS: [Step; 5] = [
    Step::new("Understand", "Reading project rules"),
    Step::new("Plan", "Match existing conventions"),
    Step::new("Edit", "+ added line\n- removed line").with_variant(ContentVariant::Diff),
    Step::new("Test", "PASS  users.test.ts").with_variant(ContentVariant::Terminal),
    Step::new("Ship", "Merged"),
];

fn navigator() -> StepNavigator {
    StepNavigator::new(&FIVE_STEPS, NavigatorConfig::default()).expect("five steps fit")
}

fn recorded(nav: &mut StepNavigator) -> Rc<RefCell<Vec<usize>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    nav.subscribe(move |index| sink.borrow_mut().push(index));
    seen
}

#[test]
fn empty_and_oversized_step_lists_are_rejected() {
    assert_eq!(
        StepNavigator::new(&[], NavigatorConfig::default()).err(),
        Some(NavigatorError::NoSteps)
    );

    let many = [Step::new("x", ""); MAX_STEPS + 1];
    assert_eq!(
        StepNavigator::new(&many, NavigatorConfig::default()).err(),
        Some(NavigatorError::TooManySteps {
            given: MAX_STEPS + 1,
            capacity: MAX_STEPS,
        })
    );
}

#[test]
fn next_and_previous_stay_in_range() {
    let mut nav = navigator();
    for _ in 0..10 {
        nav.next();
        assert!(nav.index() < nav.len());
    }
    assert_eq!(nav.index(), 4);
    assert!(!nav.next());

    for _ in 0..10 {
        nav.previous();
    }
    assert_eq!(nav.index(), 0);
    assert!(!nav.previous());
}

#[test]
fn single_step_navigator_never_moves() {
    let mut nav = StepNavigator::new(&FIVE_STEPS[..1], NavigatorConfig::default()).unwrap();
    assert!(!nav.next());
    assert!(!nav.previous());
    assert_eq!(
        nav.handle_event(InputEvent::Wheel { delta_y: 100 }, 0),
        EventDisposition::PassThrough
    );
    assert_eq!(nav.index(), 0);
}

#[test]
fn reset_returns_to_first_step_and_notifies() {
    let mut nav = navigator();
    let seen = recorded(&mut nav);
    nav.go_to(3);
    nav.reset();
    assert_eq!(nav.index(), 0);
    assert_eq!(*seen.borrow(), [3, 0]);

    nav.reset();
    assert_eq!(*seen.borrow(), [3, 0, 0]);
}

#[test]
fn go_to_fires_listener_exactly_once() {
    let mut nav = navigator();
    let seen = recorded(&mut nav);
    nav.go_to(2);
    assert_eq!(nav.index(), 2);
    assert_eq!(*seen.borrow(), [2]);
}

#[test]
fn go_to_clamps_out_of_range_requests() {
    let mut nav = navigator();
    let seen = recorded(&mut nav);
    nav.go_to(42);
    assert_eq!(nav.index(), 4);
    assert_eq!(*seen.borrow(), [4]);
}

#[test]
fn boundary_moves_do_not_notify() {
    let mut nav = navigator();
    let seen = recorded(&mut nav);
    nav.previous();
    nav.next();
    assert_eq!(*seen.borrow(), [1]);
}

#[test]
fn small_wheel_deltas_are_ignored() {
    let mut nav = navigator();
    assert_eq!(
        nav.handle_event(InputEvent::Wheel { delta_y: 29 }, 0),
        EventDisposition::Ignored
    );
    assert_eq!(
        nav.handle_event(InputEvent::Wheel { delta_y: -29 }, 1_000),
        EventDisposition::Ignored
    );
    assert_eq!(nav.index(), 0);
}

#[test]
fn rapid_wheel_events_are_debounced() {
    let mut nav = navigator();
    let seen = recorded(&mut nav);

    for at in [1_000, 1_050, 1_100] {
        assert_eq!(
            nav.handle_event(InputEvent::Wheel { delta_y: 100 }, at),
            EventDisposition::Consumed
        );
    }
    assert_eq!(nav.index(), 1);
    assert_eq!(*seen.borrow(), [1]);

    nav.handle_event(InputEvent::Wheel { delta_y: 100 }, 1_400);
    assert_eq!(nav.index(), 2);
}

#[test]
fn forward_wheel_on_last_step_passes_through() {
    let mut nav = navigator();
    nav.go_to(4);
    let seen = recorded(&mut nav);

    assert_eq!(
        nav.handle_event(InputEvent::Wheel { delta_y: 100 }, 0),
        EventDisposition::PassThrough
    );
    assert_eq!(nav.index(), 4);
    assert!(seen.borrow().is_empty());

    assert_eq!(
        nav.handle_event(InputEvent::Wheel { delta_y: -100 }, 0),
        EventDisposition::Consumed
    );
    assert_eq!(nav.index(), 3);
}

#[test]
fn backward_wheel_on_first_step_passes_through() {
    let mut nav = navigator();
    assert_eq!(
        nav.handle_event(InputEvent::Wheel { delta_y: -100 }, 0),
        EventDisposition::PassThrough
    );
    assert_eq!(nav.index(), 0);
}

#[test]
fn upward_swipe_on_last_step_passes_through() {
    let mut nav = navigator();
    nav.go_to(4);
    let seen = recorded(&mut nav);

    nav.handle_event(InputEvent::TouchStart { y: 500 }, 0);
    assert_eq!(
        nav.handle_event(InputEvent::TouchEnd { y: 400 }, 10),
        EventDisposition::PassThrough
    );
    assert_eq!(nav.index(), 4);
    assert!(seen.borrow().is_empty());
}

#[test]
fn downward_swipe_on_first_step_passes_through() {
    let mut nav = navigator();
    let seen = recorded(&mut nav);

    nav.handle_event(InputEvent::TouchStart { y: 400 }, 0);
    assert_eq!(
        nav.handle_event(InputEvent::TouchEnd { y: 500 }, 10),
        EventDisposition::PassThrough
    );
    assert_eq!(nav.index(), 0);
    assert!(seen.borrow().is_empty());
}

#[test]
fn pass_through_does_not_restart_debounce_clock() {
    let mut nav = navigator();
    nav.handle_event(InputEvent::Wheel { delta_y: -100 }, 0);
    nav.handle_event(InputEvent::Wheel { delta_y: 100 }, 10);
    assert_eq!(nav.index(), 1);
}

#[test]
fn upward_swipe_advances() {
    let mut nav = navigator();
    nav.handle_event(InputEvent::TouchStart { y: 500 }, 0);
    assert_eq!(
        nav.handle_event(InputEvent::TouchEnd { y: 440 }, 80),
        EventDisposition::Consumed
    );
    assert_eq!(nav.index(), 1);
}

#[test]
fn downward_swipe_retreats() {
    let mut nav = navigator();
    nav.go_to(2);
    nav.handle_event(InputEvent::TouchStart { y: 300 }, 0);
    nav.handle_event(InputEvent::TouchEnd { y: 380 }, 80);
    assert_eq!(nav.index(), 1);
}

#[test]
fn short_swipes_and_orphan_touch_ends_are_ignored() {
    let mut nav = navigator();
    nav.handle_event(InputEvent::TouchStart { y: 500 }, 0);
    assert_eq!(
        nav.handle_event(InputEvent::TouchEnd { y: 470 }, 50),
        EventDisposition::Ignored
    );
    assert_eq!(
        nav.handle_event(InputEvent::TouchEnd { y: 100 }, 60),
        EventDisposition::Ignored
    );
    assert_eq!(nav.index(), 0);
}

#[test]
fn wheel_and_touch_share_one_debounce_clock() {
    let mut nav = navigator();
    nav.handle_event(InputEvent::Wheel { delta_y: 120 }, 1_000);
    nav.handle_event(InputEvent::TouchStart { y: 500 }, 1_100);
    nav.handle_event(InputEvent::TouchEnd { y: 400 }, 1_200);
    assert_eq!(nav.index(), 1);

    nav.handle_event(InputEvent::TouchStart { y: 500 }, 1_350);
    nav.handle_event(InputEvent::TouchEnd { y: 400 }, 1_400);
    assert_eq!(nav.index(), 2);
}

#[test]
fn keyboard_requires_focus() {
    let mut nav = navigator();
    assert_eq!(
        nav.handle_event(InputEvent::Key(NavKey::ArrowDown), 0),
        EventDisposition::Ignored
    );
    assert_eq!(nav.index(), 0);
}

#[test]
fn keyboard_is_never_debounced() {
    let mut nav = navigator();
    nav.set_focus(true);
    nav.go_to(2);

    nav.handle_event(InputEvent::Wheel { delta_y: 100 }, 1_000);
    assert_eq!(nav.index(), 3);

    assert_eq!(
        nav.handle_event(InputEvent::Key(NavKey::ArrowUp), 1_010),
        EventDisposition::Consumed
    );
    assert_eq!(
        nav.handle_event(InputEvent::Key(NavKey::ArrowLeft), 1_020),
        EventDisposition::Consumed
    );
    assert_eq!(nav.index(), 1);

    // The wheel clock is still running from 1_000.
    nav.handle_event(InputEvent::Wheel { delta_y: 100 }, 1_030);
    assert_eq!(nav.index(), 1);
}

#[test]
fn arrow_down_moves_immediately() {
    let mut nav = navigator();
    nav.handle_event(InputEvent::Focus(true), 0);
    nav.go_to(2);
    nav.handle_event(InputEvent::Key(NavKey::ArrowDown), 5);
    assert_eq!(nav.index(), 3);
}

#[test]
fn keyboard_clamps_at_last_step() {
    let mut nav = navigator();
    nav.set_focus(true);
    nav.go_to(4);
    let seen = recorded(&mut nav);
    assert_eq!(
        nav.handle_event(InputEvent::Key(NavKey::ArrowRight), 0),
        EventDisposition::Consumed
    );
    assert_eq!(nav.index(), 4);
    assert!(seen.borrow().is_empty());
    assert_eq!(
        nav.handle_event(InputEvent::Key(NavKey::Other), 0),
        EventDisposition::Ignored
    );
}

#[test]
fn selection_bypasses_debounce() {
    let mut nav = navigator();
    nav.handle_event(InputEvent::Wheel { delta_y: 100 }, 1_000);
    nav.handle_event(InputEvent::Select(4), 1_001);
    assert_eq!(nav.index(), 4);
    nav.handle_event(InputEvent::Previous, 1_002);
    nav.handle_event(InputEvent::Previous, 1_003);
    assert_eq!(nav.index(), 2);
    nav.handle_event(InputEvent::Next, 1_004);
    assert_eq!(nav.index(), 3);
    nav.handle_event(InputEvent::Reset, 1_005);
    assert_eq!(nav.index(), 0);
}

#[test]
fn hint_waits_for_visibility_then_auto_hides() {
    let mut nav = navigator();
    nav.tick(0);
    nav.tick(5_000);
    assert!(!nav.hint_visible());

    nav.mark_visible(10_000);
    nav.tick(10_799);
    assert!(!nav.hint_visible());

    assert_eq!(nav.tick(10_800), TickResult::RenderRequested);
    assert!(nav.hint_visible());

    assert_eq!(nav.tick(14_800), TickResult::RenderRequested);
    assert!(!nav.hint_visible());
    assert_eq!(nav.hint_phase(), HintPhase::Dismissed);
}

#[test]
fn first_qualifying_input_hides_hint_for_good() {
    let mut nav = navigator();
    nav.mark_visible(0);
    nav.tick(900);
    assert!(nav.hint_visible());

    nav.handle_event(InputEvent::Wheel { delta_y: 5 }, 950);
    assert!(nav.hint_visible());

    nav.handle_event(InputEvent::Wheel { delta_y: 100 }, 1_000);
    assert!(!nav.hint_visible());

    nav.tick(2_000);
    nav.mark_visible(3_000);
    nav.tick(10_000);
    assert!(!nav.hint_visible());
}

#[test]
fn pointer_down_before_show_suppresses_hint() {
    let mut nav = navigator();
    nav.mark_visible(0);
    nav.handle_event(InputEvent::PointerDown, 100);
    nav.tick(1_000);
    assert!(!nav.hint_visible());
}

fn navigator_showing_hint() -> StepNavigator {
    let mut nav = navigator();
    nav.mark_visible(0);
    nav.tick(900);
    assert!(nav.hint_visible());
    nav
}

#[test]
fn focused_arrow_key_dismisses_hint() {
    let mut nav = navigator_showing_hint();
    nav.set_focus(true);
    nav.handle_event(InputEvent::Key(NavKey::ArrowDown), 1_000);
    assert!(!nav.hint_visible());
    assert_eq!(nav.hint_phase(), HintPhase::Dismissed);
    assert_eq!(nav.index(), 1);
}

#[test]
fn unfocused_arrow_key_leaves_hint_up() {
    let mut nav = navigator_showing_hint();
    nav.handle_event(InputEvent::Key(NavKey::ArrowDown), 1_000);
    assert!(nav.hint_visible());
}

#[test]
fn swipe_dismisses_hint() {
    let mut nav = navigator_showing_hint();
    nav.handle_event(InputEvent::TouchStart { y: 500 }, 1_000);
    assert!(nav.hint_visible());
    nav.handle_event(InputEvent::TouchEnd { y: 440 }, 1_050);
    assert!(!nav.hint_visible());
    assert_eq!(nav.hint_phase(), HintPhase::Dismissed);
}

#[test]
fn selection_dismisses_hint_even_without_moving() {
    let mut nav = navigator_showing_hint();
    nav.handle_event(InputEvent::Select(0), 1_000);
    assert!(!nav.hint_visible());
    assert_eq!(nav.hint_phase(), HintPhase::Dismissed);
    assert_eq!(nav.index(), 0);
}

#[test]
fn viewport_entry_arms_hint_on_next_tick() {
    let mut nav = navigator();
    let mut watcher = ThresholdWatcher::new(0.3);
    nav.watch_viewport(&mut watcher);

    watcher.observe(0.1);
    nav.tick(100);
    assert!(!nav.is_visible());

    watcher.observe(0.6);
    nav.tick(200);
    assert!(nav.is_visible());
    nav.tick(1_000);
    assert!(nav.hint_visible());
}

#[test]
fn dispose_cancels_timers_and_silences_everything() {
    let mut nav = navigator();
    let seen = recorded(&mut nav);
    nav.mark_visible(0);
    nav.dispose();

    assert_eq!(nav.tick(1_000), TickResult::NoRender);
    assert!(!nav.hint_visible());
    assert_eq!(
        nav.handle_event(InputEvent::Wheel { delta_y: 100 }, 2_000),
        EventDisposition::Ignored
    );
    nav.go_to(3);
    nav.reset();
    assert_eq!(nav.index(), 0);
    assert!(seen.borrow().is_empty());
}

#[test]
fn unsubscribed_listener_stops_receiving() {
    let mut nav = navigator();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let id = nav.subscribe(move |index| sink.borrow_mut().push(index));

    nav.next();
    assert!(nav.unsubscribe(id));
    assert!(!nav.unsubscribe(id));
    nav.next();
    assert_eq!(*seen.borrow(), [1]);
}

#[test]
fn transitions_animate_unless_motion_is_reduced() {
    let mut nav = navigator();
    nav.tick(0);
    nav.handle_event(InputEvent::Wheel { delta_y: 100 }, 1_000);
    assert_eq!(nav.tick(1_000), TickResult::RenderRequested);
    assert_eq!(nav.tick(1_100), TickResult::RenderRequested);
    nav.with_view(1_125, |view| {
        let frame = view.animation.expect("transition running");
        assert_eq!(frame.kind, AnimationKind::Advance);
        assert_eq!(frame.progress_pct, 50);
    });
    assert_eq!(nav.tick(1_300), TickResult::NoRender);

    nav.set_reduced_motion(true);
    nav.tick(1_300);
    nav.handle_event(InputEvent::Wheel { delta_y: 100 }, 2_000);
    nav.tick(2_000);
    assert_eq!(nav.tick(2_050), TickResult::NoRender);
    nav.with_view(2_050, |view| assert!(view.animation.is_none()));
}

#[test]
fn view_reflects_navigator_state() {
    let steps = [
        Step::new("Understand", "a").with_description("Reads the rules first."),
        Step::new("Plan", "b"),
    ];
    let mut nav = StepNavigator::new(&steps, NavigatorConfig::default()).unwrap();
    nav.mark_visible(0);
    nav.tick(800);

    nav.with_view(800, |view| {
        assert_eq!(view.position_label, "1/2");
        assert_eq!(view.summary, "Reads the rules first.");
        assert_eq!(view.hint, Some("Scroll to explore steps"));
        assert!(!view.can_retreat());
        assert!(view.can_advance());
        let states: Vec<_> = view.indicators().map(|item| item.state).collect();
        assert_eq!(states, [IndicatorState::Active, IndicatorState::Upcoming]);
    });

    nav.next();
    nav.with_view(900, |view| {
        assert_eq!(view.position_label, "2/2");
        assert_eq!(view.summary, "");
        assert_eq!(view.current().label, "Plan");
        assert!(!view.can_advance());
    });
}

#[test]
fn scripted_timeline_is_applied_in_order() {
    let events = [
        TimedEvent::new(0, InputEvent::Wheel { delta_y: 100 }),
        TimedEvent::new(50, InputEvent::Wheel { delta_y: 100 }),
        TimedEvent::new(100, InputEvent::Wheel { delta_y: 100 }),
        TimedEvent::new(600, InputEvent::Wheel { delta_y: 100 }),
    ];
    let mut input = ScriptedInput::new(&events);
    let mut nav = navigator();

    for now_ms in [0, 50, 100] {
        assert_eq!(nav.process_inputs(&mut input, now_ms), Ok(1));
    }
    assert_eq!(nav.index(), 1);
    assert_eq!(nav.process_inputs(&mut input, 599), Ok(0));
    assert_eq!(nav.process_inputs(&mut input, 600), Ok(1));
    assert_eq!(nav.index(), 2);
    assert!(input.is_exhausted());
}

#[test]
fn idle_provider_changes_nothing() {
    let mut nav = navigator();
    let seen = recorded(&mut nav);

    assert_eq!(nav.process_inputs(&mut MockInput::new(), 1_000), Ok(0));
    assert_eq!(nav.index(), 0);
    assert!(seen.borrow().is_empty());
}

#[test]
fn polled_inputs_report_their_dispositions() {
    let script = [
        TimedEvent::new(0, InputEvent::Wheel { delta_y: -100 }),
        TimedEvent::new(0, InputEvent::Wheel { delta_y: 10 }),
        TimedEvent::new(0, InputEvent::Wheel { delta_y: 100 }),
    ];
    let mut input = ScriptedInput::new(&script);
    let mut nav = navigator();
    let mut reported = Vec::new();

    let handled = nav.process_inputs_with(&mut input, 0, |event, disposition| {
        reported.push((event, disposition));
    });

    assert_eq!(handled, Ok(3));
    assert_eq!(
        reported,
        [
            (InputEvent::Wheel { delta_y: -100 }, EventDisposition::PassThrough),
            (InputEvent::Wheel { delta_y: 10 }, EventDisposition::Ignored),
            (InputEvent::Wheel { delta_y: 100 }, EventDisposition::Consumed),
        ]
    );
    assert_eq!(nav.index(), 1);
}
