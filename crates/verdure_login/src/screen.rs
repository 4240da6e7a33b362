//! Login screen lifecycle and event routing

use crate::config::LoginConfig;
use crate::error::{LoginError, Result};
use crate::keyboard_shift::KeyboardShiftReactor;
use crate::layout::ScreenLayout;
use crate::scene::{NodeId, Scene};
use crate::transition::{DerivedVisuals, Trigger, TransitionController};
use std::sync::Arc;
use verdure_animation::SchedulerHandle;
use verdure_platform::{
    ControlFlow, Event, GestureEvent, KeyboardObserver, LifecycleEvent, ScreenSize,
    TapGestureRecognizer, TouchEvent,
};

/// Tap targets and the trigger each one fires
const TAP_TARGETS: [(NodeId, Trigger); 3] = [
    (NodeId::LoginButton, Trigger::Open),
    (NodeId::FacebookButton, Trigger::Open),
    (NodeId::CloseButton, Trigger::Close),
];

/// A mounted login screen
///
/// Owns the transition and the keyboard shift, routes platform events to
/// them and composes the current frame on demand. The host owns the
/// [`AnimationScheduler`](verdure_animation::AnimationScheduler) and ticks it
/// once per frame.
pub struct LoginScreen {
    layout: ScreenLayout,
    transition: TransitionController,
    keyboard: KeyboardShiftReactor,
    /// One recognizer per entry in `TAP_TARGETS`
    taps: [TapGestureRecognizer; 3],
    mounted: bool,
}

impl LoginScreen {
    /// Mount the screen
    ///
    /// Progress starts at 1 (buttons visible), the keyboard offset at 0, and
    /// one keyboard listener is registered per visibility kind.
    pub fn mount(
        handle: SchedulerHandle,
        keyboard: Arc<dyn KeyboardObserver>,
        size: ScreenSize,
        config: LoginConfig,
    ) -> Result<Self> {
        if !handle.is_alive() {
            return Err(LoginError::SchedulerUnavailable);
        }
        let size = ScreenSize::new(size.width, size.height)?;
        config.validate()?;

        let LoginConfig {
            transition,
            keyboard: keyboard_config,
        } = config;

        let screen = Self {
            layout: ScreenLayout::compute(size),
            transition: TransitionController::new(handle.clone(), transition),
            keyboard: KeyboardShiftReactor::mount(handle, keyboard, keyboard_config),
            taps: Default::default(),
            mounted: true,
        };
        tracing::info!(
            width = size.width,
            height = size.height,
            "LoginScreen: mounted"
        );
        Ok(screen)
    }

    /// Handle a platform event
    ///
    /// Frames are accepted but not acted on; the host advances animations by
    /// ticking the scheduler.
    pub fn handle_event(&mut self, event: &Event) -> ControlFlow {
        match event {
            Event::Touch(touch) => {
                self.handle_touch(touch);
            }
            Event::Resized(size) => self.resize(*size),
            Event::Lifecycle(LifecycleEvent::Unmounting) => {
                self.unmount();
                return ControlFlow::Exit;
            }
            Event::Lifecycle(lifecycle) => {
                tracing::debug!(?lifecycle, "LoginScreen: lifecycle");
            }
            Event::Keyboard(keyboard) => {
                // Delivered to the reactor through its observer subscription
                tracing::trace!(visibility = ?keyboard.visibility, "LoginScreen: keyboard");
            }
            Event::Frame { .. } => {}
        }
        ControlFlow::Continue
    }

    /// Route a touch to the tap recognizers
    ///
    /// Hit-testing uses the current animated positions. A new touch is only
    /// offered to the topmost interactive node under it, so faded-out
    /// buttons and nodes covered by the form never start a gesture.
    ///
    /// Returns the trigger if the touch started or redirected a transition.
    pub fn handle_touch(&mut self, touch: &TouchEvent) -> Option<Trigger> {
        if !self.mounted {
            return None;
        }

        let scene = self.scene();
        let hit = match *touch {
            TouchEvent::Started { x, y, .. } => scene.hit_test(x, y),
            _ => None,
        };

        let mut fired = None;
        for ((node_id, trigger), recognizer) in TAP_TARGETS.iter().zip(self.taps.iter_mut()) {
            if matches!(touch, TouchEvent::Started { .. }) && hit != Some(*node_id) {
                continue;
            }
            let Some(node) = scene.node(*node_id) else {
                continue;
            };

            for event in recognizer.process(touch, node.rect) {
                let started = match trigger {
                    Trigger::Open => self.transition.on_open_trigger(event),
                    Trigger::Close => self.transition.on_close_trigger(event),
                };
                if started {
                    tracing::debug!(node = ?node_id, ?trigger, "LoginScreen: tap");
                    fired = Some(*trigger);
                }
            }
        }
        fired
    }

    /// Deliver a gesture event directly to the trigger of a node
    ///
    /// For hosts that run their own gesture recognition.
    pub fn handle_gesture(&mut self, node: NodeId, event: GestureEvent) -> bool {
        if !self.mounted {
            return false;
        }
        match TAP_TARGETS.iter().find(|(id, _)| *id == node) {
            Some((_, Trigger::Open)) => self.transition.on_open_trigger(event),
            Some((_, Trigger::Close)) => self.transition.on_close_trigger(event),
            None => false,
        }
    }

    fn resize(&mut self, size: ScreenSize) {
        match ScreenSize::new(size.width, size.height) {
            Ok(size) => {
                self.layout = ScreenLayout::compute(size);
                for tap in &mut self.taps {
                    tap.reset();
                }
                tracing::debug!(width = size.width, height = size.height, "LoginScreen: resized");
            }
            Err(err) => tracing::warn!(%err, "LoginScreen: ignoring resize"),
        }
    }

    /// Compose the current frame
    pub fn scene(&self) -> Scene {
        Scene::compose(&self.layout, self.visuals(), self.keyboard.offset())
    }

    /// Visual properties derived from the current progress
    pub fn visuals(&self) -> DerivedVisuals {
        self.transition.visuals(self.layout.size)
    }

    pub fn size(&self) -> ScreenSize {
        self.layout.size
    }

    pub fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    pub fn transition(&self) -> &TransitionController {
        &self.transition
    }

    pub fn transition_mut(&mut self) -> &mut TransitionController {
        &mut self.transition
    }

    pub fn keyboard_shift(&self) -> &KeyboardShiftReactor {
        &self.keyboard
    }

    /// Whether the transition or the keyboard shift is in flight
    pub fn is_animating(&self) -> bool {
        self.transition.is_animating() || self.keyboard.is_animating()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Release keyboard subscriptions and stop accepting touches
    ///
    /// Safe to call more than once.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.keyboard.unmount();
        for tap in &mut self.taps {
            tap.reset();
        }
        tracing::info!("LoginScreen: unmounted");
    }
}
