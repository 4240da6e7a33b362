//! Event loop and platform events

use crate::error::PlatformError;
use crate::geometry::ScreenSize;
use crate::input::TouchEvent;
use crate::keyboard::KeyboardEvent;

/// Event loop abstraction
///
/// Hosts implement this trait to deliver events to a screen. Frames are
/// delivered as [`Event::Frame`]; everything else is input or lifecycle.
pub trait EventLoop {
    /// Run the event loop
    ///
    /// Blocks until the loop is exhausted or the handler returns
    /// [`ControlFlow::Exit`].
    fn run<F>(self, handler: F) -> Result<(), PlatformError>
    where
        F: FnMut(Event) -> ControlFlow;
}

/// Control flow after handling an event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlFlow {
    /// Continue running the event loop
    #[default]
    Continue,
    /// Exit the event loop
    Exit,
}

/// Platform events
#[derive(Clone, Debug)]
pub enum Event {
    /// Touch input
    Touch(TouchEvent),
    /// Soft keyboard visibility changed
    Keyboard(KeyboardEvent),
    /// Screen dimensions changed (rotation, split view)
    Resized(ScreenSize),
    /// Application lifecycle event
    Lifecycle(LifecycleEvent),
    /// Frame tick - advance animations and render
    Frame {
        /// Time since the previous frame in milliseconds
        dt_ms: f32,
    },
}

/// Application lifecycle events
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// Screen was mounted and is about to receive events
    Mounted,
    /// Screen is being torn down
    Unmounting,
    /// Application resumed (came to foreground)
    Resumed,
    /// Application suspended (went to background)
    Suspended,
}
