//! Verdure Platform Abstraction Layer
//!
//! Platform-agnostic types for the capabilities a screen consumes from its
//! host environment: touch input, gesture recognition states, keyboard
//! visibility notifications, screen geometry and the frame-driving event loop.
//!
//! # Architecture
//!
//! - [`EventLoop`] - Delivers [`Event`]s to the application and drives frames
//! - [`KeyboardObserver`] - Subscription-based keyboard visibility notifications
//! - [`TapGestureRecognizer`] - Turns touches on one target into [`GestureEvent`]s
//!
//! Native backends feed these types; the headless demo host feeds them from a
//! scripted session.

mod error;
mod event;
mod geometry;
mod gesture;
mod input;
mod keyboard;

// Re-export all public types
pub use error::{PlatformError, Result};
pub use event::{ControlFlow, Event, EventLoop, LifecycleEvent};
pub use geometry::{Rect, ScreenSize};
pub use gesture::{GestureEvent, GestureEvents, GestureState, TapGestureRecognizer, TAP_SLOP};
pub use input::TouchEvent;
pub use keyboard::{
    KeyboardEvent, KeyboardListener, KeyboardNotifier, KeyboardObserver, KeyboardSubscription,
    KeyboardVisibility, ListenerId,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{PlatformError, Result};
    pub use crate::event::{ControlFlow, Event, EventLoop, LifecycleEvent};
    pub use crate::geometry::{Rect, ScreenSize};
    pub use crate::gesture::{GestureEvent, GestureState, TapGestureRecognizer};
    pub use crate::input::TouchEvent;
    pub use crate::keyboard::{
        KeyboardEvent, KeyboardNotifier, KeyboardObserver, KeyboardSubscription,
        KeyboardVisibility,
    };
}
