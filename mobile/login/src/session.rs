//! Scripted sessions
//!
//! A headless stand-in for a device: the script is a fixed list of platform
//! events (frames, taps, keyboard changes) replayed in order. Tap positions
//! are computed from the same layout and transition model the screen uses,
//! so a tap lands on its target even while the target is moving.

use verdure_animation::Timing;
use verdure_login::{DerivedVisuals, LoginConfig, ScreenLayout};
use verdure_platform::{
    ControlFlow, Event, EventLoop, KeyboardEvent, LifecycleEvent, PlatformError, Rect, ScreenSize,
    TouchEvent,
};

/// Height reported for the soft keyboard
const KEYBOARD_HEIGHT: f32 = 291.0;

/// Extra time after each animation so it settles before the next step
const SETTLE_MS: f32 = 100.0;

/// Replays a fixed list of events
pub struct ScriptedEventLoop {
    events: Vec<Event>,
}

impl ScriptedEventLoop {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl EventLoop for ScriptedEventLoop {
    fn run<F>(self, mut handler: F) -> Result<(), PlatformError>
    where
        F: FnMut(Event) -> ControlFlow,
    {
        if self.events.is_empty() {
            return Err(PlatformError::EventLoop("session script is empty".to_string()));
        }
        for event in self.events {
            if handler(event) == ControlFlow::Exit {
                return Ok(());
            }
        }
        tracing::warn!("ScriptedEventLoop: script ended without an exit");
        Ok(())
    }
}

/// Builds a session script for one screen size and configuration
pub struct SessionBuilder {
    layout: ScreenLayout,
    config: LoginConfig,
    frame_ms: f32,
    events: Vec<Event>,
    next_touch: u64,
}

impl SessionBuilder {
    pub fn new(size: ScreenSize, config: LoginConfig, fps: u32) -> Self {
        Self {
            layout: ScreenLayout::compute(size),
            config,
            frame_ms: 1000.0 / fps.max(1) as f32,
            events: Vec::new(),
            next_touch: 1,
        }
    }

    /// Emit frames covering at least `ms`; returns the time actually covered
    pub fn frames(&mut self, ms: f32) -> f32 {
        let count = (ms / self.frame_ms).ceil().max(0.0) as usize;
        for _ in 0..count {
            self.events.push(Event::Frame {
                dt_ms: self.frame_ms,
            });
        }
        count as f32 * self.frame_ms
    }

    /// Touch down and lift at the center of `rect`
    pub fn tap(&mut self, rect: Rect) {
        let id = self.next_touch;
        self.next_touch += 1;
        let (x, y) = (rect.x + rect.width / 2.0, rect.y + rect.height / 2.0);
        self.events
            .push(Event::Touch(TouchEvent::Started { id, x, y }));
        self.events.push(Event::Touch(TouchEvent::Ended { id, x, y }));
    }

    pub fn keyboard(&mut self, event: KeyboardEvent) {
        self.events.push(Event::Keyboard(event));
    }

    pub fn lifecycle(&mut self, event: LifecycleEvent) {
        self.events.push(Event::Lifecycle(event));
    }

    /// Where the close button sits `elapsed_ms` into an open animation
    fn close_button_during_open(&self, elapsed_ms: f32) -> Rect {
        let transition = &self.config.transition;
        let mut timing = Timing::new(1.0, 0.0, transition.duration_ms, transition.easing);
        timing.tick(elapsed_ms);
        let visuals = DerivedVisuals::at(timing.value(), self.layout.size, transition);
        self.layout.close_button.offset_y(visuals.form_offset)
    }

    /// The standard session
    ///
    /// Open the form with LOGIN, show and hide the keyboard, close the form,
    /// then open with the Facebook button and close again mid-animation.
    pub fn standard(mut self) -> ScriptedEventLoop {
        let transition_ms = self.config.transition.duration_ms as f32;
        let show_ms = self.config.keyboard.show_duration_ms as f32;
        let hide_ms = self.config.keyboard.hide_duration_ms as f32;

        self.lifecycle(LifecycleEvent::Mounted);
        self.frames(SETTLE_MS);

        self.tap(self.layout.login_button);
        self.frames(transition_ms + SETTLE_MS);

        self.keyboard(KeyboardEvent::shown(KEYBOARD_HEIGHT));
        self.frames(show_ms + SETTLE_MS);
        self.keyboard(KeyboardEvent::hidden());
        self.frames(hide_ms + SETTLE_MS);

        // Form is up and the keyboard is gone, so the close button is at rest
        self.tap(self.layout.close_button);
        self.frames(transition_ms + SETTLE_MS);

        self.tap(self.layout.facebook_button);
        let elapsed = self.frames(transition_ms * 0.6);
        let close = self.close_button_during_open(elapsed);
        self.tap(close);
        self.frames(transition_ms + SETTLE_MS);

        self.lifecycle(LifecycleEvent::Unmounting);
        ScriptedEventLoop::new(self.events)
    }
}
