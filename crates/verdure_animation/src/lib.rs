//! Verdure Animation System
//!
//! Timed animations, easing curves, and frame-driven scheduling.
//!
//! # Features
//!
//! - **Easing Curves**: Polynomial and cubic-bezier easing functions
//! - **Interpolation**: Input-range to output-range mapping with clamping
//! - **Timed Animations**: Duration-based tweens that settle exactly on target
//! - **Scheduler**: Owns every registered animation and advances them per frame
//! - **Retargeting**: A running animation can be redirected from its current value
//!
//! # Example
//!
//! ```
//! use verdure_animation::{AnimatedTiming, AnimationScheduler, Easing};
//!
//! let scheduler = AnimationScheduler::new();
//! let mut opacity = AnimatedTiming::new(scheduler.handle(), 1.0);
//!
//! opacity.animate_to(0.0, 1000, Easing::EaseInOut);
//! scheduler.tick_by(500.0);
//! assert!(opacity.get() < 1.0 && opacity.get() > 0.0);
//!
//! scheduler.tick_by(500.0);
//! assert_eq!(opacity.get(), 0.0);
//! ```

pub mod easing;
pub mod scheduler;
pub mod timing;
pub mod values;

pub use easing::Easing;
pub use scheduler::{
    AnimatedTiming, AnimationScheduler, SchedulerHandle, SharedAnimatedTiming, TimingId,
};
pub use timing::Timing;
pub use values::{interpolate, Interpolate, Interpolation};
