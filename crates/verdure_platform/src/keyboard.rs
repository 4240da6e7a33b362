//! Soft keyboard visibility notifications
//!
//! The host reports when the on-screen keyboard appears or disappears.
//! Screens subscribe a listener per visibility kind and must release every
//! subscription on teardown; [`KeyboardObserver::listener_count`] lets tests
//! verify that nothing is left behind.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use verdure_platform::{
//!     KeyboardEvent, KeyboardNotifier, KeyboardObserver, KeyboardVisibility,
//! };
//!
//! let notifier = Arc::new(KeyboardNotifier::new());
//! let sub = notifier.subscribe(
//!     KeyboardVisibility::Shown,
//!     Arc::new(|event: &KeyboardEvent| println!("keyboard: {}px", event.height)),
//! );
//!
//! notifier.notify(&KeyboardEvent::shown(291.0));
//! assert!(notifier.unsubscribe(sub));
//! assert_eq!(notifier.listener_count(), 0);
//! ```

use slotmap::{new_key_type, SlotMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// Whether the keyboard is appearing or disappearing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyboardVisibility {
    Shown,
    Hidden,
}

/// A keyboard visibility notification
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyboardEvent {
    pub visibility: KeyboardVisibility,
    /// Keyboard height in logical pixels (0 when hidden)
    pub height: f32,
}

impl KeyboardEvent {
    pub fn shown(height: f32) -> Self {
        Self {
            visibility: KeyboardVisibility::Shown,
            height,
        }
    }

    pub fn hidden() -> Self {
        Self {
            visibility: KeyboardVisibility::Hidden,
            height: 0.0,
        }
    }
}

new_key_type! {
    /// Handle to a registered keyboard listener
    pub struct ListenerId;
}

/// Callback invoked for each matching keyboard event
///
/// Listeners run on the host's UI thread and must return quickly.
pub type KeyboardListener = Arc<dyn Fn(&KeyboardEvent) + Send + Sync>;

/// A live keyboard subscription
///
/// Not `Clone`: each subscription is released exactly once by handing it back
/// to [`KeyboardObserver::unsubscribe`].
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping a subscription handle leaks the listener"]
pub struct KeyboardSubscription {
    id: ListenerId,
    visibility: KeyboardVisibility,
}

impl KeyboardSubscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn visibility(&self) -> KeyboardVisibility {
        self.visibility
    }
}

/// Host capability: keyboard visibility notifications
pub trait KeyboardObserver: Send + Sync {
    /// Register a listener for one visibility kind
    fn subscribe(
        &self,
        visibility: KeyboardVisibility,
        listener: KeyboardListener,
    ) -> KeyboardSubscription;

    /// Release a subscription
    ///
    /// Returns false if the listener was already gone.
    fn unsubscribe(&self, subscription: KeyboardSubscription) -> bool;

    /// Number of live listeners across all visibility kinds
    fn listener_count(&self) -> usize;
}

/// In-process keyboard notification hub
///
/// Native backends (or a headless host) call [`KeyboardNotifier::notify`]
/// when the system keyboard changes; subscribers are invoked in registration
/// order.
#[derive(Default)]
pub struct KeyboardNotifier {
    listeners: RwLock<SlotMap<ListenerId, (KeyboardVisibility, KeyboardListener)>>,
    visible: AtomicBool,
}

impl KeyboardNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver an event to every listener of its visibility kind
    ///
    /// Returns the number of listeners invoked. Listeners are called outside
    /// the registry lock, so they may subscribe or unsubscribe.
    pub fn notify(&self, event: &KeyboardEvent) -> usize {
        self.visible.store(
            event.visibility == KeyboardVisibility::Shown,
            Ordering::Release,
        );

        let matching: Vec<KeyboardListener> = self
            .listeners
            .read()
            .unwrap()
            .values()
            .filter(|(visibility, _)| *visibility == event.visibility)
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        tracing::debug!(
            visibility = ?event.visibility,
            height = event.height,
            listeners = matching.len(),
            "KeyboardNotifier: dispatching"
        );

        for listener in &matching {
            listener(event);
        }
        matching.len()
    }

    /// Whether the last notification left the keyboard on screen
    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::Acquire)
    }
}

impl KeyboardObserver for KeyboardNotifier {
    fn subscribe(
        &self,
        visibility: KeyboardVisibility,
        listener: KeyboardListener,
    ) -> KeyboardSubscription {
        let id = self
            .listeners
            .write()
            .unwrap()
            .insert((visibility, listener));
        tracing::debug!(?visibility, ?id, "KeyboardNotifier: subscribed");
        KeyboardSubscription { id, visibility }
    }

    fn unsubscribe(&self, subscription: KeyboardSubscription) -> bool {
        let removed = self
            .listeners
            .write()
            .unwrap()
            .remove(subscription.id)
            .is_some();
        tracing::debug!(id = ?subscription.id, removed, "KeyboardNotifier: unsubscribed");
        removed
    }

    fn listener_count(&self) -> usize {
        self.listeners.read().unwrap().len()
    }
}
