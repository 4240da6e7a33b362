//! End-to-end login screen flows driven by a deterministic scheduler.

use std::sync::Arc;
use verdure_animation::AnimationScheduler;
use verdure_login::{
    DerivedVisuals, LoginConfig, LoginScreen, NodeId, TransitionConfig, TransitionPhase, Trigger,
};
use verdure_platform::{
    ControlFlow, Event, GestureEvent, GestureState, KeyboardEvent, KeyboardNotifier,
    KeyboardObserver, LifecycleEvent, ScreenSize, TouchEvent,
};

const FRAME_MS: f32 = 1000.0 / 60.0;

fn mount() -> (AnimationScheduler, Arc<KeyboardNotifier>, LoginScreen) {
    let scheduler = AnimationScheduler::new();
    let keyboard = Arc::new(KeyboardNotifier::new());
    let screen = LoginScreen::mount(
        scheduler.handle(),
        keyboard.clone(),
        ScreenSize::default(),
        LoginConfig::default(),
    )
    .unwrap();
    (scheduler, keyboard, screen)
}

/// Run frames until nothing is animating, returning elapsed time
fn settle(scheduler: &AnimationScheduler) -> f32 {
    let mut elapsed = 0.0;
    while scheduler.has_active_animations() {
        scheduler.tick_by(FRAME_MS);
        elapsed += FRAME_MS;
        assert!(elapsed < 10_000.0, "animation never settled");
    }
    elapsed
}

fn tap_node(screen: &mut LoginScreen, id: u64, node: NodeId) -> Option<Trigger> {
    let rect = screen.scene().node(node).unwrap().rect;
    let (x, y) = (rect.x + rect.width / 2.0, rect.y + rect.height / 2.0);
    screen.handle_event(&Event::Touch(TouchEvent::Started { id, x, y }));
    screen.handle_touch(&TouchEvent::Ended { id, x, y })
}

#[test]
fn derived_values_hit_endpoints_exactly() {
    let (scheduler, _keyboard, mut screen) = mount();
    let size = screen.size();
    let config = TransitionConfig::default();

    assert_eq!(screen.visuals(), DerivedVisuals::at(1.0, size, &config));
    let buttons = screen.visuals();
    assert_eq!(buttons.button_opacity, 1.0);
    assert_eq!(buttons.form_offset, size.height / 2.0);

    screen.transition_mut().open();
    settle(&scheduler);

    let form = screen.visuals();
    assert_eq!(form.image_bottom_margin, size.height / 3.0);
    assert_eq!(form.first_button_offset, 100.0);
    assert_eq!(form.second_button_offset, -100.0);
    assert_eq!(form.form_offset, 0.0);
    assert_eq!(form.close_rotation_deg, 0.0);
    assert_eq!(form.button_opacity, 0.0);
}

#[test]
fn open_animation_is_monotonic_frame_by_frame() {
    let (scheduler, _keyboard, mut screen) = mount();
    screen.transition_mut().open();

    let mut prev = screen.visuals();
    while scheduler.has_active_animations() {
        scheduler.tick_by(FRAME_MS);
        let v = screen.visuals();
        assert!(v.button_opacity <= prev.button_opacity);
        assert!(v.form_offset <= prev.form_offset);
        assert!(v.image_bottom_margin >= prev.image_bottom_margin);
        assert!(v.close_rotation_deg <= prev.close_rotation_deg);
        prev = v;
    }
    assert_eq!(screen.transition().progress(), 0.0);
}

#[test]
fn transition_takes_configured_duration() {
    let (scheduler, _keyboard, mut screen) = mount();
    screen.transition_mut().open();

    scheduler.tick_by(999.0);
    assert!(screen.transition().is_animating());
    scheduler.tick_by(1.0);
    assert_eq!(screen.transition().phase(), TransitionPhase::FormVisible);
}

#[test]
fn repeated_open_is_idempotent() {
    let (scheduler, _keyboard, mut screen) = mount();
    assert_eq!(tap_node(&mut screen, 1, NodeId::LoginButton), Some(Trigger::Open));
    settle(&scheduler);

    assert!(!screen.transition_mut().on_open_trigger(GestureEvent::ended()));
    assert!(!scheduler.has_active_animations());
    assert_eq!(screen.transition().phase(), TransitionPhase::FormVisible);
}

#[test]
fn close_at_rest_is_idempotent() {
    let (scheduler, _keyboard, mut screen) = mount();
    assert!(!screen.transition_mut().on_close_trigger(GestureEvent::ended()));
    assert!(!scheduler.has_active_animations());
    assert_eq!(screen.transition().phase(), TransitionPhase::ButtonsVisible);
}

#[test]
fn close_mid_open_redirects() {
    let (scheduler, _keyboard, mut screen) = mount();
    screen.transition_mut().open();
    for _ in 0..20 {
        scheduler.tick_by(FRAME_MS);
    }
    let partway = screen.transition().progress();
    assert!(partway > 0.0 && partway < 1.0);

    assert!(screen.transition_mut().close());
    assert_eq!(
        screen.transition().phase(),
        TransitionPhase::Animating {
            trigger: Trigger::Close
        }
    );
    settle(&scheduler);
    assert_eq!(screen.transition().phase(), TransitionPhase::ButtonsVisible);
}

#[test]
fn non_end_states_never_move_progress() {
    let (scheduler, _keyboard, mut screen) = mount();

    for state in [
        GestureState::Began,
        GestureState::Active,
        GestureState::Cancelled,
        GestureState::Failed,
    ] {
        let event = GestureEvent::new(GestureState::Undetermined, state);
        assert!(!screen.transition_mut().on_open_trigger(event));
        assert!(!screen.handle_gesture(NodeId::LoginButton, event));
        scheduler.tick_by(100.0);
        assert_eq!(screen.transition().progress(), 1.0);
    }
}

#[test]
fn cancelled_touch_does_not_open() {
    let (_scheduler, _keyboard, mut screen) = mount();
    let rect = screen.scene().node(NodeId::FacebookButton).unwrap().rect;
    let (x, y) = (rect.x + 5.0, rect.y + 5.0);

    screen.handle_touch(&TouchEvent::Started { id: 9, x, y });
    assert_eq!(screen.handle_touch(&TouchEvent::Cancelled { id: 9 }), None);
    assert_eq!(screen.transition().progress(), 1.0);
}

#[test]
fn keyboard_shift_lifts_and_returns() {
    let (scheduler, keyboard, screen) = mount();

    keyboard.notify(&KeyboardEvent::shown(291.0));
    assert_eq!(screen.keyboard_shift().offset(), 0.0);
    scheduler.tick_by(200.0);
    let mid = screen.keyboard_shift().offset();
    assert!(mid < 0.0 && mid > -300.0);
    scheduler.tick_by(200.0);
    assert_eq!(screen.keyboard_shift().offset(), -300.0);
    assert_eq!(screen.scene().keyboard_offset, -300.0);

    keyboard.notify(&KeyboardEvent::hidden());
    settle(&scheduler);
    assert_eq!(screen.keyboard_shift().offset(), 0.0);
}

#[test]
fn keyboard_and_transition_are_independent() {
    let (scheduler, keyboard, mut screen) = mount();

    tap_node(&mut screen, 1, NodeId::LoginButton);
    keyboard.notify(&KeyboardEvent::shown(291.0));
    settle(&scheduler);

    assert_eq!(screen.transition().phase(), TransitionPhase::FormVisible);
    assert_eq!(screen.keyboard_shift().offset(), -300.0);

    // The close button is reachable at its lifted position
    assert_eq!(tap_node(&mut screen, 2, NodeId::CloseButton), Some(Trigger::Close));
    settle(&scheduler);
    assert_eq!(screen.transition().phase(), TransitionPhase::ButtonsVisible);
    assert_eq!(screen.keyboard_shift().offset(), -300.0);
}

#[test]
fn unmount_releases_every_listener() {
    let (_scheduler, keyboard, mut screen) = mount();
    assert_eq!(keyboard.listener_count(), 2);

    screen.unmount();
    assert_eq!(keyboard.listener_count(), 0);
}

#[test]
fn unmount_after_shown_releases_every_listener() {
    let (scheduler, keyboard, mut screen) = mount();
    keyboard.notify(&KeyboardEvent::shown(291.0));
    scheduler.tick_by(100.0);

    let flow = screen.handle_event(&Event::Lifecycle(LifecycleEvent::Unmounting));
    assert_eq!(flow, ControlFlow::Exit);
    assert_eq!(keyboard.listener_count(), 0);

    // Nobody is listening any more
    assert_eq!(keyboard.notify(&KeyboardEvent::hidden()), 0);
}

#[test]
fn dropping_scheduler_leaves_screen_usable() {
    let (scheduler, keyboard, mut screen) = mount();
    drop(scheduler);

    // Triggers jump straight to their target without a scheduler
    screen.transition_mut().open();
    assert_eq!(screen.transition().progress(), 0.0);
    keyboard.notify(&KeyboardEvent::shown(291.0));
    assert_eq!(screen.keyboard_shift().offset(), -300.0);
}
