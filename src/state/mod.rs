//! State machine module for hotkey capture
//!
//! Provides the capture control with two states:
//! - Idle: not capturing, shows the default text or the committed key
//! - Selecting: focused, shows the selection text and waits for a key
//!
//! Candidate keys pass through the allow/deny key filter before they are
//! committed.

mod filter;
mod machine;

pub use filter::{FilterMode, KeyFilter};
pub use machine::{HotkeyPicker, KeyOutcome, Mode};
