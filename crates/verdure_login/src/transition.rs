//! Button/form transition
//!
//! A single progress value drives the whole sign-in transition:
//!
//! ```text
//!   ButtonsVisible (1.0) ──open──▶ Animating ──▶ FormVisible (0.0)
//!          ▲                          │  ▲                │
//!          └─────────────── close ◀───┘  └──── open ──────┘
//! ```
//!
//! Only a completed gesture (a change into `End`) triggers a transition. A
//! trigger received mid-animation redirects the running animation from its
//! current value; triggers are never queued.

use crate::config::TransitionConfig;
use serde::Serialize;
use verdure_animation::{interpolate, AnimatedTiming, SchedulerHandle};
use verdure_platform::{GestureEvent, ScreenSize};

/// Progress value with the sign-in buttons fully visible
pub const BUTTONS_VISIBLE: f32 = 1.0;

/// Progress value with the credential form fully visible
pub const FORM_VISIBLE: f32 = 0.0;

/// Which way a trigger moves the transition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Reveal the credential form
    Open,
    /// Return to the sign-in buttons
    Close,
}

impl Trigger {
    /// Progress value this trigger animates toward
    pub fn target(self) -> f32 {
        match self {
            Trigger::Open => FORM_VISIBLE,
            Trigger::Close => BUTTONS_VISIBLE,
        }
    }
}

/// Where the transition currently is
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    /// At rest with progress 1
    ButtonsVisible,
    /// At rest with progress 0
    FormVisible,
    /// In flight toward the target of `trigger`
    Animating { trigger: Trigger },
}

/// Owns the login-open progress and animates it on trigger
pub struct TransitionController {
    progress: AnimatedTiming,
    config: TransitionConfig,
}

impl TransitionController {
    /// Create a controller at rest with the buttons visible
    pub fn new(handle: SchedulerHandle, config: TransitionConfig) -> Self {
        Self {
            progress: AnimatedTiming::new(handle, BUTTONS_VISIBLE),
            config,
        }
    }

    /// Gesture handler for the sign-in buttons
    ///
    /// Returns true if this event started or redirected an animation.
    pub fn on_open_trigger(&mut self, event: GestureEvent) -> bool {
        self.on_trigger(Trigger::Open, event)
    }

    /// Gesture handler for the close button
    ///
    /// Returns true if this event started or redirected an animation.
    pub fn on_close_trigger(&mut self, event: GestureEvent) -> bool {
        self.on_trigger(Trigger::Close, event)
    }

    /// Open the form without a gesture
    pub fn open(&mut self) -> bool {
        self.fire(Trigger::Open)
    }

    /// Return to the buttons without a gesture
    pub fn close(&mut self) -> bool {
        self.fire(Trigger::Close)
    }

    fn on_trigger(&mut self, trigger: Trigger, event: GestureEvent) -> bool {
        if !event.is_completion() {
            tracing::trace!(?trigger, state = ?event.state, "Ignoring non-terminal gesture");
            return false;
        }
        self.fire(trigger)
    }

    fn fire(&mut self, trigger: Trigger) -> bool {
        let from = self.progress();
        let started = self.progress.animate_to(
            trigger.target(),
            self.config.duration_ms,
            self.config.easing,
        );
        if started {
            tracing::debug!(?trigger, from, to = trigger.target(), "Transition started");
        } else {
            tracing::debug!(?trigger, progress = from, "Transition already at target");
        }
        started
    }

    /// Current progress, always within 0..=1
    pub fn progress(&self) -> f32 {
        self.progress.get().clamp(FORM_VISIBLE, BUTTONS_VISIBLE)
    }

    pub fn phase(&self) -> TransitionPhase {
        if self.progress.is_animating() {
            let trigger = if self.progress.target() == FORM_VISIBLE {
                Trigger::Open
            } else {
                Trigger::Close
            };
            return TransitionPhase::Animating { trigger };
        }

        if self.progress() <= FORM_VISIBLE {
            TransitionPhase::FormVisible
        } else {
            TransitionPhase::ButtonsVisible
        }
    }

    pub fn is_animating(&self) -> bool {
        self.progress.is_animating()
    }

    /// Visual properties for the current frame
    pub fn visuals(&self, size: ScreenSize) -> DerivedVisuals {
        DerivedVisuals::at(self.progress(), size, &self.config)
    }

    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }
}

/// Visual properties derived from progress
///
/// Recomputed every frame; never stored.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DerivedVisuals {
    /// Inset of the background image from the screen bottom
    pub image_bottom_margin: f32,
    /// Vertical offset of the LOGIN button
    pub first_button_offset: f32,
    /// Vertical offset of the LOGIN WITH FACEBOOK button
    pub second_button_offset: f32,
    /// Vertical offset of the credential form container
    pub form_offset: f32,
    /// Rotation of the close button label in degrees
    pub close_rotation_deg: f32,
    /// Opacity shared by both sign-in buttons
    pub button_opacity: f32,
}

impl DerivedVisuals {
    /// Compute every visual property for a progress value
    pub fn at(progress: f32, size: ScreenSize, config: &TransitionConfig) -> Self {
        let p = progress.clamp(FORM_VISIBLE, BUTTONS_VISIBLE);
        let range = (FORM_VISIBLE, BUTTONS_VISIBLE);

        Self {
            image_bottom_margin: interpolate(p, range, (size.height / 3.0, 0.0)),
            first_button_offset: interpolate(p, range, (config.button_travel, 0.0)),
            second_button_offset: interpolate(p, range, (-config.button_travel, 0.0)),
            form_offset: interpolate(p, range, (0.0, size.height / 2.0)),
            close_rotation_deg: interpolate(p, range, (0.0, config.close_rotation_deg)),
            button_opacity: p,
        }
    }
}
