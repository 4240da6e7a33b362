//! Animation scheduler
//!
//! Owns all active timed animations and advances them each frame.
//! Animations are implicitly registered when driven through [`AnimatedTiming`].
//!
//! The scheduler never runs on its own: the host's frame loop calls
//! [`AnimationScheduler::tick`] (wall clock) or [`AnimationScheduler::tick_by`]
//! (explicit delta) once per frame. Components hold a weak
//! [`SchedulerHandle`], so operations after the scheduler is gone are no-ops.

use crate::easing::Easing;
use crate::timing::Timing;
use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, Weak};
use std::time::Instant;

new_key_type! {
    /// Handle to a registered timed animation
    pub struct TimingId;
}

/// Internal state of the animation scheduler
struct SchedulerInner {
    timings: SlotMap<TimingId, Timing>,
    last_frame: Instant,
}

impl SchedulerInner {
    fn advance(&mut self, dt_ms: f32) -> bool {
        for (_, timing) in self.timings.iter_mut() {
            timing.tick(dt_ms);
        }

        // NOTE: finished timings are not removed here. They stay registered
        // until their AnimatedTiming wrapper drops, so they can be retargeted.
        self.timings.iter().any(|(_, t)| t.is_playing())
    }
}

/// The animation scheduler that ticks all active animations
///
/// Typically owned by the host (one per window or screen stack) and shared
/// with components via [`SchedulerHandle`].
pub struct AnimationScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                timings: SlotMap::with_key(),
                last_frame: Instant::now(),
            })),
        }
    }

    /// Get a handle to this scheduler for passing to components
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Tick all animations using wall-clock time since the previous frame
    ///
    /// Returns true if any animations are still active (need another tick).
    pub fn tick(&self) -> bool {
        let mut inner = self.inner.lock().unwrap();
        let now = Instant::now();
        let dt_ms = (now - inner.last_frame).as_secs_f32() * 1000.0;
        inner.last_frame = now;
        inner.advance(dt_ms)
    }

    /// Tick all animations by an explicit delta (in milliseconds)
    ///
    /// Used by hosts with their own frame clock and by deterministic tests.
    pub fn tick_by(&self, dt_ms: f32) -> bool {
        let mut inner = self.inner.lock().unwrap();
        inner.last_frame = Instant::now();
        let active = inner.advance(dt_ms);
        tracing::trace!(dt_ms, active, "AnimationScheduler: tick");
        active
    }

    /// Check if any animations are still active
    pub fn has_active_animations(&self) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.timings.iter().any(|(_, t)| t.is_playing())
    }

    /// Get the number of registered timings (playing or finished)
    pub fn timing_count(&self) -> usize {
        self.inner.lock().unwrap().timings.len()
    }

    // =========================================================================
    // Direct Timing Access (for advanced use cases)
    // =========================================================================

    pub fn add_timing(&self, timing: Timing) -> TimingId {
        self.inner.lock().unwrap().timings.insert(timing)
    }

    pub fn get_timing_value(&self, id: TimingId) -> Option<f32> {
        self.inner
            .lock()
            .unwrap()
            .timings
            .get(id)
            .map(|t| t.value())
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the animation scheduler
///
/// This is passed to components that need to register animations.
/// It won't prevent the scheduler from being dropped.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    /// Register a timing and return its ID
    pub fn register_timing(&self, timing: Timing) -> Option<TimingId> {
        self.inner.upgrade().map(|inner| {
            let mut guard = inner.lock().unwrap();
            // Reset last_frame so a wall-clock tick doesn't see a huge dt
            guard.last_frame = Instant::now();
            guard.timings.insert(timing)
        })
    }

    /// Redirect a timing toward a new target from its current value
    ///
    /// Returns true if the timing is now running.
    pub fn animate_timing(&self, id: TimingId, to: f32, duration_ms: u32, easing: Easing) -> bool {
        self.inner
            .upgrade()
            .and_then(|inner| {
                inner
                    .lock()
                    .unwrap()
                    .timings
                    .get_mut(id)
                    .map(|t| t.retarget(to, duration_ms, easing))
            })
            .unwrap_or(false)
    }

    /// Jump a timing to a value without animating
    pub fn set_timing_immediate(&self, id: TimingId, value: f32) {
        if let Some(inner) = self.inner.upgrade() {
            if let Some(timing) = inner.lock().unwrap().timings.get_mut(id) {
                timing.set_immediate(value);
            }
        }
    }

    /// Get current timing value
    pub fn get_timing_value(&self, id: TimingId) -> Option<f32> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().timings.get(id).map(|t| t.value()))
    }

    /// Check if a timing is running
    ///
    /// A missing timing (or a dropped scheduler) is not running.
    pub fn is_timing_playing(&self, id: TimingId) -> bool {
        self.inner
            .upgrade()
            .and_then(|inner| {
                inner
                    .lock()
                    .unwrap()
                    .timings
                    .get(id)
                    .map(|t| t.is_playing())
            })
            .unwrap_or(false)
    }

    /// Remove a timing
    pub fn remove_timing(&self, id: TimingId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().timings.remove(id);
        }
    }

    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

// ============================================================================
// Animated Timing
// ============================================================================

/// A timed animated value that registers itself with the scheduler
///
/// The first call to [`AnimatedTiming::animate_to`] that actually moves the
/// value registers a [`Timing`]; later calls retarget it. The timing is
/// removed from the scheduler when this value drops.
///
/// # Example
///
/// ```ignore
/// let mut offset = AnimatedTiming::new(scheduler.handle(), 0.0);
/// offset.animate_to(-300.0, 400, Easing::Ease);
///
/// // Each frame, after the scheduler ticks:
/// let current = offset.get();
/// ```
pub struct AnimatedTiming {
    handle: SchedulerHandle,
    timing_id: Option<TimingId>,
    /// Value used before a timing is registered
    current: f32,
    /// The target value we're animating towards
    target: f32,
}

impl AnimatedTiming {
    /// Create a new animated value resting at `initial`
    pub fn new(handle: SchedulerHandle, initial: f32) -> Self {
        // Don't register immediately - only when the value needs to move
        Self {
            handle,
            timing_id: None,
            current: initial,
            target: initial,
        }
    }

    /// Animate toward `target` over `duration_ms` from the current value
    ///
    /// Returns true if an animation is now running. Retargeting a running
    /// animation restarts the tween from wherever it currently is.
    pub fn animate_to(&mut self, target: f32, duration_ms: u32, easing: Easing) -> bool {
        self.target = target;

        if let Some(id) = self.timing_id {
            return self.handle.animate_timing(id, target, duration_ms, easing);
        }

        let timing = Timing::new(self.current, target, duration_ms, easing);
        if !timing.is_playing() {
            self.current = target;
            return false;
        }

        match self.handle.register_timing(timing) {
            Some(id) => {
                self.timing_id = Some(id);
                true
            }
            None => {
                tracing::warn!("AnimatedTiming: scheduler dropped, jumping to target");
                self.current = target;
                false
            }
        }
    }

    /// Get the current animated value
    pub fn get(&self) -> f32 {
        match self.timing_id {
            Some(id) => self.handle.get_timing_value(id).unwrap_or(self.target),
            None => self.current,
        }
    }

    /// Set value immediately without animation
    pub fn set_immediate(&mut self, value: f32) {
        if let Some(id) = self.timing_id.take() {
            self.handle.remove_timing(id);
        }
        self.current = value;
        self.target = value;
    }

    /// Check if currently animating
    pub fn is_animating(&self) -> bool {
        self.timing_id
            .map(|id| self.handle.is_timing_playing(id))
            .unwrap_or(false)
    }

    /// Get the current target value
    pub fn target(&self) -> f32 {
        self.target
    }
}

impl Drop for AnimatedTiming {
    fn drop(&mut self) {
        if let Some(id) = self.timing_id {
            self.handle.remove_timing(id);
        }
    }
}

/// An animated value shared between an owner and event callbacks
pub type SharedAnimatedTiming = Arc<Mutex<AnimatedTiming>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheduler_tick_by() {
        let scheduler = AnimationScheduler::new();
        let id = scheduler.add_timing(Timing::new(0.0, 100.0, 1000, Easing::Linear));

        assert!(scheduler.tick_by(500.0));
        let value = scheduler.get_timing_value(id).unwrap();
        assert!((value - 50.0).abs() < 1e-3);

        assert!(!scheduler.tick_by(500.0));
        assert_eq!(scheduler.get_timing_value(id), Some(100.0));
        assert!(!scheduler.has_active_animations());
    }

    #[test]
    fn test_wall_clock_tick_advances() {
        let scheduler = AnimationScheduler::new();
        let id = scheduler.add_timing(Timing::new(0.0, 1.0, 60_000, Easing::Linear));
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(scheduler.tick());
        assert!(scheduler.get_timing_value(id).unwrap() > 0.0);
    }

    #[test]
    fn test_animated_timing() {
        let scheduler = AnimationScheduler::new();
        let mut value = AnimatedTiming::new(scheduler.handle(), 0.0);

        assert_eq!(value.get(), 0.0);
        assert!(!value.is_animating());
        assert_eq!(scheduler.timing_count(), 0);

        assert!(value.animate_to(100.0, 400, Easing::Ease));
        assert!(value.is_animating());
        assert_eq!(scheduler.timing_count(), 1);

        scheduler.tick_by(200.0);
        assert!(value.get() > 0.0 && value.get() < 100.0);

        scheduler.tick_by(200.0);
        assert_eq!(value.get(), 100.0);
        assert!(!value.is_animating());
    }

    #[test]
    fn test_animate_to_current_value_registers_nothing() {
        let scheduler = AnimationScheduler::new();
        let mut value = AnimatedTiming::new(scheduler.handle(), 1.0);

        assert!(!value.animate_to(1.0, 1000, Easing::EaseInOut));
        assert_eq!(scheduler.timing_count(), 0);
        assert!(!scheduler.has_active_animations());
    }

    #[test]
    fn test_retarget_reuses_registration() {
        let scheduler = AnimationScheduler::new();
        let mut value = AnimatedTiming::new(scheduler.handle(), 1.0);

        value.animate_to(0.0, 1000, Easing::Linear);
        scheduler.tick_by(300.0);
        let before = value.get();

        value.animate_to(1.0, 1000, Easing::Linear);
        assert_eq!(scheduler.timing_count(), 1);
        assert_eq!(value.get(), before);

        scheduler.tick_by(100.0);
        assert!(value.get() > before);
    }

    #[test]
    fn test_drop_removes_timing() {
        let scheduler = AnimationScheduler::new();
        {
            let mut value = AnimatedTiming::new(scheduler.handle(), 0.0);
            value.animate_to(1.0, 100, Easing::Linear);
            assert_eq!(scheduler.timing_count(), 1);
        }
        assert_eq!(scheduler.timing_count(), 0);
    }

    #[test]
    fn test_set_immediate() {
        let scheduler = AnimationScheduler::new();
        let mut value = AnimatedTiming::new(scheduler.handle(), 0.0);
        value.animate_to(1.0, 100, Easing::Linear);
        value.set_immediate(0.5);

        assert_eq!(value.get(), 0.5);
        assert_eq!(value.target(), 0.5);
        assert_eq!(scheduler.timing_count(), 0);
    }

    #[test]
    fn test_handle_weak_reference() {
        let handle = {
            let scheduler = AnimationScheduler::new();
            scheduler.handle()
        };

        // Scheduler is dropped, handle should not be alive
        assert!(!handle.is_alive());

        // Operations should safely no-op
        assert!(handle.register_timing(Timing::at_rest(0.0)).is_none());

        let mut value = AnimatedTiming::new(handle, 0.0);
        assert!(!value.animate_to(1.0, 100, Easing::Linear));
        assert_eq!(value.get(), 1.0);
    }
}
