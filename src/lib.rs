//! hotkey-picker: single-key hotkey capture control
//!
//! A picker records one keyboard shortcut. The host focuses it, the user
//! presses a key and the picker reports the chosen key to its subscribers:
//! - Focus-gated capture state machine (Idle / Selecting)
//! - Allow/deny key filter, cancel key to abort
//! - Process-wide key naming table with runtime overrides
//! - Synchronous change notifications
//!
//! The `host` module drives a picker from newline-delimited JSON, which is
//! what the `hotkey-picker` binary uses.

pub mod config;
pub mod events;
pub mod host;
pub mod hotkey;
pub mod state;

pub use config::{Config, PickerConfig};
pub use events::{HotkeyChanged, SubscriptionId};
pub use hotkey::{KeyCode, KeyParseError};
pub use state::{FilterMode, HotkeyPicker, KeyOutcome, Mode};
