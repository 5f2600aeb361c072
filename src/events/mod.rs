//! Events module for hotkey change notifications
//!
//! Provides the `HotkeyChanged` event emitted whenever the committed hotkey
//! changes, and the observer list pickers use to deliver it.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::hotkey::KeyCode;

/// The committed hotkey changed
///
/// Both fields are `None` when the hotkey was cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotkeyChanged {
    /// Committed key code
    pub key: Option<KeyCode>,

    /// Display name of the committed key
    pub name: Option<String>,
}

impl HotkeyChanged {
    /// A key was committed
    pub fn committed(key: KeyCode, name: impl Into<String>) -> Self {
        Self {
            key: Some(key),
            name: Some(name.into()),
        }
    }

    /// The hotkey was cleared
    pub fn cleared() -> Self {
        Self {
            key: None,
            name: None,
        }
    }

    /// Whether this event reports a cleared hotkey
    pub fn is_cleared(&self) -> bool {
        self.key.is_none()
    }
}

impl std::fmt::Display for HotkeyChanged {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.key, &self.name) {
            (Some(key), Some(name)) => write!(f, "HOTKEY_CHANGED {} ({:#x})", name, key.value()),
            (Some(key), None) => write!(f, "HOTKEY_CHANGED {:#x}", key.value()),
            _ => write!(f, "HOTKEY_CLEARED"),
        }
    }
}

/// Handle returned by [`Notifier::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&HotkeyChanged)>;

/// Synchronous observer list
///
/// Callbacks run on the thread that triggered the change, in the order they
/// were registered.
#[derive(Default)]
pub struct Notifier {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback)>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&HotkeyChanged) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback, returning whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Deliver an event to every subscriber
    pub fn notify(&mut self, event: &HotkeyChanged) {
        trace!(%event, subscribers = self.subscribers.len(), "notifying");
        for (_, callback) in &mut self.subscribers {
            callback(event);
        }
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
