//! Timed animations
//!
//! A [`Timing`] tweens a single value from a start to a target over a fixed
//! duration with an easing curve. Retargeting restarts the tween from the
//! value currently on screen, so a redirected animation never jumps.

use crate::easing::Easing;
use crate::values::Interpolate;

/// Values closer than this to their target are considered already there
const SETTLE_EPSILON: f32 = 1e-4;

/// A duration-based tween of an `f32`
#[derive(Clone, Copy, Debug)]
pub struct Timing {
    from: f32,
    to: f32,
    /// Duration in milliseconds
    duration_ms: u32,
    /// Elapsed time in milliseconds
    elapsed_ms: f32,
    easing: Easing,
    playing: bool,
}

impl Timing {
    /// Create a timing resting at `value`
    pub fn at_rest(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            duration_ms: 0,
            elapsed_ms: 0.0,
            easing: Easing::Linear,
            playing: false,
        }
    }

    /// Create a timing that is already running from `from` to `to`
    pub fn new(from: f32, to: f32, duration_ms: u32, easing: Easing) -> Self {
        let mut timing = Self::at_rest(from);
        timing.retarget(to, duration_ms, easing);
        timing
    }

    /// Redirect toward a new target, starting from the current value
    ///
    /// Returns `true` if an animation is now running. A target equal to the
    /// value at rest starts nothing.
    pub fn retarget(&mut self, to: f32, duration_ms: u32, easing: Easing) -> bool {
        let current = self.value();
        self.from = current;
        self.to = to;
        self.duration_ms = duration_ms;
        self.easing = easing;
        self.elapsed_ms = 0.0;

        if current.approx_eq(&to, SETTLE_EPSILON) || duration_ms == 0 {
            self.from = to;
            self.playing = false;
        } else {
            self.playing = true;
        }
        self.playing
    }

    /// Jump to a value without animating
    pub fn set_immediate(&mut self, value: f32) {
        *self = Self::at_rest(value);
    }

    /// Advance by delta time (in milliseconds)
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }

        self.elapsed_ms += dt_ms.max(0.0);
        if self.elapsed_ms >= self.duration_ms as f32 {
            self.elapsed_ms = self.duration_ms as f32;
            self.from = self.to;
            self.playing = false;
        }
    }

    /// Current value; exactly the target once finished
    pub fn value(&self) -> f32 {
        if !self.playing {
            return self.to;
        }
        let eased = self.easing.apply(self.progress());
        self.from.lerp(&self.to, eased)
    }

    /// Linear time progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }
}
