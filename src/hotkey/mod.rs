//! Hotkey module for key codes and their display names
//!
//! Key codes are opaque integers delivered by the host. The naming table
//! turns them into the labels a picker shows.

mod keys;
pub mod names;

pub use keys::{KeyCode, KeyParseError};
pub use names::KeyNameTable;
