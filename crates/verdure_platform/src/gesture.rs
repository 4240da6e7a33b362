//! Gesture recognition states
//!
//! Gesture handlers report discrete state changes rather than raw touches.
//! A tap handler attached to a view goes `Began` on touch down, then
//! `Active` and `End` together when the finger lifts inside the view.
//! Moving too far or lifting outside fails the gesture.

use crate::geometry::Rect;
use crate::input::TouchEvent;
use smallvec::SmallVec;

/// Maximum finger travel (in logical pixels) for a touch to still count as a tap
pub const TAP_SLOP: f32 = 10.0;

/// Discrete gesture recognizer state
///
/// Numeric codes match the ones used by common mobile gesture libraries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GestureState {
    /// No gesture in progress
    #[default]
    Undetermined = 0,
    /// The gesture was rejected
    Failed = 1,
    /// Touch down on the target, not yet recognized
    Began = 2,
    /// The system cancelled the gesture
    Cancelled = 3,
    /// The gesture is recognized and in progress
    Active = 4,
    /// The gesture completed
    End = 5,
}

impl GestureState {
    /// Decode from a numeric state code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Undetermined),
            1 => Some(Self::Failed),
            2 => Some(Self::Began),
            3 => Some(Self::Cancelled),
            4 => Some(Self::Active),
            5 => Some(Self::End),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// States after which the recognizer resets
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::End | Self::Failed | Self::Cancelled)
    }
}

/// A gesture state change delivered to a handler
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GestureEvent {
    /// State after the change
    pub state: GestureState,
    /// State before the change
    pub old_state: GestureState,
}

impl GestureEvent {
    pub fn new(old_state: GestureState, state: GestureState) -> Self {
        Self { state, old_state }
    }

    /// The state change that completes a tap (`Active` to `End`)
    pub fn ended() -> Self {
        Self::new(GestureState::Active, GestureState::End)
    }

    /// Whether this change moves the gesture into `End`
    pub fn is_completion(&self) -> bool {
        self.state == GestureState::End && self.old_state != GestureState::End
    }
}

/// State changes produced by a single touch event
pub type GestureEvents = SmallVec<[GestureEvent; 2]>;

/// Tap recognizer for a single target view
#[derive(Debug, Default)]
pub struct TapGestureRecognizer {
    state: GestureState,
    /// Touch being tracked
    touch_id: Option<u64>,
    /// Start position of the tracked touch
    start: Option<(f32, f32)>,
}

impl TapGestureRecognizer {
    /// Create a new tap recognizer
    pub fn new() -> Self {
        Self::default()
    }

    /// Current recognizer state
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Process a touch against the target's current bounds
    ///
    /// Returns the state changes, in order, that this touch caused.
    pub fn process(&mut self, touch: &TouchEvent, bounds: Rect) -> GestureEvents {
        let mut events = GestureEvents::new();

        match *touch {
            TouchEvent::Started { id, x, y } => {
                if self.touch_id.is_none() && bounds.contains(x, y) {
                    self.touch_id = Some(id);
                    self.start = Some((x, y));
                    self.transition(GestureState::Began, &mut events);
                }
            }
            TouchEvent::Moved { id, x, y } => {
                if self.touch_id == Some(id) && self.state == GestureState::Began {
                    if let Some((start_x, start_y)) = self.start {
                        let dx = x - start_x;
                        let dy = y - start_y;
                        if dx * dx + dy * dy > TAP_SLOP * TAP_SLOP {
                            self.transition(GestureState::Failed, &mut events);
                        }
                    }
                }
            }
            TouchEvent::Ended { id, x, y } => {
                if self.touch_id == Some(id) && self.state == GestureState::Began {
                    if bounds.contains(x, y) {
                        self.transition(GestureState::Active, &mut events);
                        self.transition(GestureState::End, &mut events);
                    } else {
                        self.transition(GestureState::Failed, &mut events);
                    }
                }
            }
            TouchEvent::Cancelled { id } => {
                if self.touch_id == Some(id) && self.state == GestureState::Began {
                    self.transition(GestureState::Cancelled, &mut events);
                }
            }
        }

        // A failed gesture keeps its touch until the finger lifts
        if self.touch_id == Some(touch.id())
            && matches!(touch, TouchEvent::Ended { .. } | TouchEvent::Cancelled { .. })
        {
            self.reset();
        } else if self.state.is_terminal() && self.state != GestureState::Failed {
            self.reset();
        }

        events
    }

    /// Abandon any tracked touch without reporting
    pub fn reset(&mut self) {
        self.state = GestureState::Undetermined;
        self.touch_id = None;
        self.start = None;
    }

    fn transition(&mut self, next: GestureState, events: &mut GestureEvents) {
        tracing::trace!(from = ?self.state, to = ?next, "TapGestureRecognizer: state change");
        events.push(GestureEvent::new(self.state, next));
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 50.0)
    }

    fn states(events: &GestureEvents) -> Vec<GestureState> {
        events.iter().map(|e| e.state).collect()
    }

    #[test]
    fn test_state_codes_round_trip() {
        for code in 0..=5 {
            assert_eq!(GestureState::from_code(code).unwrap().code(), code);
        }
        assert!(GestureState::from_code(6).is_none());
    }

    #[test]
    fn test_completion_detection() {
        assert!(GestureEvent::ended().is_completion());
        assert!(!GestureEvent::new(GestureState::End, GestureState::End).is_completion());
        assert!(!GestureEvent::new(GestureState::Began, GestureState::Active).is_completion());
    }

    #[test]
    fn test_tap_inside() {
        let mut tap = TapGestureRecognizer::new();

        let began = tap.process(&TouchEvent::Started { id: 1, x: 10.0, y: 10.0 }, bounds());
        assert_eq!(states(&began), vec![GestureState::Began]);

        let ended = tap.process(&TouchEvent::Ended { id: 1, x: 12.0, y: 11.0 }, bounds());
        assert_eq!(states(&ended), vec![GestureState::Active, GestureState::End]);
        assert!(ended[1].is_completion());
        assert_eq!(tap.state(), GestureState::Undetermined);
    }

    #[test]
    fn test_touch_outside_is_ignored() {
        let mut tap = TapGestureRecognizer::new();
        let events = tap.process(&TouchEvent::Started { id: 1, x: 500.0, y: 10.0 }, bounds());
        assert!(events.is_empty());
        assert_eq!(tap.state(), GestureState::Undetermined);
    }

    #[test]
    fn test_drag_beyond_slop_fails() {
        let mut tap = TapGestureRecognizer::new();
        tap.process(&TouchEvent::Started { id: 1, x: 10.0, y: 10.0 }, bounds());

        let moved = tap.process(&TouchEvent::Moved { id: 1, x: 30.0, y: 10.0 }, bounds());
        assert_eq!(states(&moved), vec![GestureState::Failed]);

        // Lifting after failure reports nothing and resets
        let ended = tap.process(&TouchEvent::Ended { id: 1, x: 30.0, y: 10.0 }, bounds());
        assert!(ended.is_empty());
        assert_eq!(tap.state(), GestureState::Undetermined);
    }

    #[test]
    fn test_release_outside_fails() {
        let mut tap = TapGestureRecognizer::new();
        tap.process(&TouchEvent::Started { id: 1, x: 95.0, y: 45.0 }, bounds());
        let ended = tap.process(&TouchEvent::Ended { id: 1, x: 101.0, y: 49.0 }, bounds());
        assert_eq!(states(&ended), vec![GestureState::Failed]);
    }

    #[test]
    fn test_cancel() {
        let mut tap = TapGestureRecognizer::new();
        tap.process(&TouchEvent::Started { id: 7, x: 10.0, y: 10.0 }, bounds());
        let cancelled = tap.process(&TouchEvent::Cancelled { id: 7 }, bounds());
        assert_eq!(states(&cancelled), vec![GestureState::Cancelled]);
        assert_eq!(tap.state(), GestureState::Undetermined);
    }

    #[test]
    fn test_other_touches_are_ignored_while_tracking() {
        let mut tap = TapGestureRecognizer::new();
        tap.process(&TouchEvent::Started { id: 1, x: 10.0, y: 10.0 }, bounds());
        assert!(tap
            .process(&TouchEvent::Started { id: 2, x: 20.0, y: 20.0 }, bounds())
            .is_empty());
        assert!(tap
            .process(&TouchEvent::Ended { id: 2, x: 20.0, y: 20.0 }, bounds())
            .is_empty());
        assert_eq!(tap.state(), GestureState::Began);
    }
}
