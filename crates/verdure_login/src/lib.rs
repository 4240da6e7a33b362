//! Verdure Login Screen
//!
//! A mobile sign-in screen built from two leaf components that never talk to
//! each other:
//!
//! - [`TransitionController`] owns the login-open progress (1 = sign-in
//!   buttons visible, 0 = credential form visible) and derives every moving
//!   visual property from it.
//! - [`KeyboardShiftReactor`] lifts the whole screen while the soft keyboard
//!   is on screen.
//!
//! [`LoginScreen`] mounts both, routes taps to them and composes their outputs
//! into a positioned [`Scene`] each frame.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use verdure_animation::AnimationScheduler;
//! use verdure_login::{LoginConfig, LoginScreen, TransitionPhase};
//! use verdure_platform::{GestureEvent, KeyboardNotifier, KeyboardObserver, ScreenSize};
//!
//! let scheduler = AnimationScheduler::new();
//! let keyboard = Arc::new(KeyboardNotifier::new());
//! let mut screen = LoginScreen::mount(
//!     scheduler.handle(),
//!     keyboard.clone(),
//!     ScreenSize::default(),
//!     LoginConfig::default(),
//! )
//! .unwrap();
//!
//! screen.transition_mut().on_open_trigger(GestureEvent::ended());
//! scheduler.tick_by(1000.0);
//! assert_eq!(screen.transition().phase(), TransitionPhase::FormVisible);
//!
//! screen.unmount();
//! assert_eq!(keyboard.listener_count(), 0);
//! ```

pub mod config;
pub mod error;
pub mod keyboard_shift;
pub mod layout;
pub mod scene;
pub mod screen;
pub mod transition;

pub use config::{KeyboardConfig, LoginConfig, TransitionConfig};
pub use error::{LoginError, Result};
pub use keyboard_shift::KeyboardShiftReactor;
pub use layout::ScreenLayout;
pub use scene::{Label, NodeId, Scene, SceneNode};
pub use screen::LoginScreen;
pub use transition::{DerivedVisuals, TransitionController, TransitionPhase, Trigger};
