//! Host module for driving a picker from outside the process
//!
//! The host speaks newline-delimited JSON: focus and key events in, hotkey
//! notifications and label updates out.

mod driver;
mod protocol;

pub use driver::Driver;
pub use protocol::{
    CaptureMode, FilterKind, HostError, HostEvent, KeyRef, Outcome, Output, PickerStatus,
};
