//! Keyboard-aware screen shift
//!
//! While the soft keyboard is on screen the whole login screen is lifted by a
//! fixed amount so the credential fields stay visible. The reactor owns one
//! listener per visibility kind for exactly as long as it is mounted.

use crate::config::KeyboardConfig;
use std::sync::{Arc, Mutex};
use verdure_animation::{AnimatedTiming, Easing, SchedulerHandle, SharedAnimatedTiming};
use verdure_platform::{
    KeyboardEvent, KeyboardListener, KeyboardObserver, KeyboardSubscription, KeyboardVisibility,
};

/// Animates the screen's vertical offset on keyboard show/hide
pub struct KeyboardShiftReactor {
    offset: SharedAnimatedTiming,
    observer: Arc<dyn KeyboardObserver>,
    subscriptions: Vec<KeyboardSubscription>,
    config: KeyboardConfig,
}

impl KeyboardShiftReactor {
    /// Create the offset at 0 and subscribe to keyboard visibility
    pub fn mount(
        handle: SchedulerHandle,
        observer: Arc<dyn KeyboardObserver>,
        config: KeyboardConfig,
    ) -> Self {
        let offset: SharedAnimatedTiming = Arc::new(Mutex::new(AnimatedTiming::new(handle, 0.0)));

        let shown = shift_listener(
            &offset,
            config.lift,
            config.show_duration_ms,
            config.show_easing,
        );
        let hidden = shift_listener(&offset, 0.0, config.hide_duration_ms, config.hide_easing);

        let subscriptions = vec![
            observer.subscribe(KeyboardVisibility::Shown, shown),
            observer.subscribe(KeyboardVisibility::Hidden, hidden),
        ];
        tracing::debug!(lift = config.lift, "KeyboardShiftReactor: mounted");

        Self {
            offset,
            observer,
            subscriptions,
            config,
        }
    }

    /// Current vertical offset applied to the whole screen
    pub fn offset(&self) -> f32 {
        self.offset.lock().unwrap().get()
    }

    pub fn is_animating(&self) -> bool {
        self.offset.lock().unwrap().is_animating()
    }

    /// Whether listeners are still registered
    pub fn is_mounted(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    pub fn config(&self) -> &KeyboardConfig {
        &self.config
    }

    /// Release every keyboard subscription
    ///
    /// Safe to call more than once; later calls do nothing.
    pub fn unmount(&mut self) {
        if self.subscriptions.is_empty() {
            return;
        }
        for subscription in self.subscriptions.drain(..) {
            if !self.observer.unsubscribe(subscription) {
                tracing::warn!("KeyboardShiftReactor: listener was already released");
            }
        }
        tracing::debug!("KeyboardShiftReactor: unmounted");
    }
}

impl Drop for KeyboardShiftReactor {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Build a listener that retargets the shared offset and returns immediately
fn shift_listener(
    offset: &SharedAnimatedTiming,
    target: f32,
    duration_ms: u32,
    easing: Easing,
) -> KeyboardListener {
    let offset = Arc::clone(offset);
    Arc::new(move |event: &KeyboardEvent| {
        if let Ok(mut offset) = offset.lock() {
            let started = offset.animate_to(target, duration_ms, easing);
            tracing::debug!(
                visibility = ?event.visibility,
                target,
                started,
                "KeyboardShiftReactor: shifting"
            );
        }
    })
}
