//! Host message protocol definitions
//!
//! All messages are JSON objects, one per line, tagged by `type`.

use serde::{Deserialize, Serialize};

use crate::events::HotkeyChanged;
use crate::hotkey::{KeyCode, KeyParseError};
use crate::state::{FilterMode, HotkeyPicker, KeyOutcome, Mode};

/// A key given either as a raw code or as a name (`"F1"`, `"0x41"`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyRef {
    Code(u32),
    Name(String),
}

impl KeyRef {
    /// Resolve to a key code
    pub fn resolve(&self) -> Result<KeyCode, KeyParseError> {
        match self {
            KeyRef::Code(code) => Ok(KeyCode::new(*code)),
            KeyRef::Name(name) => name.parse(),
        }
    }
}

impl From<KeyCode> for KeyRef {
    fn from(key: KeyCode) -> Self {
        KeyRef::Code(key.value())
    }
}

/// Resolve a list of keys, failing on the first unresolvable one
pub fn resolve_all(keys: &[KeyRef]) -> Result<Vec<KeyCode>, KeyParseError> {
    keys.iter().map(KeyRef::resolve).collect()
}

/// Events from the host to the picker
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    /// The picker gained input focus
    FocusIn,

    /// The picker lost input focus
    FocusOut,

    /// A key was pressed while the picker has focus
    Key { key: KeyRef },

    /// Set the hotkey programmatically
    SetHotkey { key: KeyRef },

    /// Clear the hotkey
    Reset,

    /// Register a display name override
    SetName { key: KeyRef, name: String },

    SetDefaultText { text: String },

    SetSelectionText { text: String },

    SetCancelKey { key: KeyRef },

    SetFilterEnabled { enabled: bool },

    SetAllowedKeys { keys: Vec<KeyRef> },

    SetForbiddenKeys { keys: Vec<KeyRef> },

    /// Request a status snapshot
    Status,
}

/// Capture mode as reported to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureMode {
    Idle,
    Selecting,
}

impl From<Mode> for CaptureMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Idle => CaptureMode::Idle,
            Mode::Selecting => CaptureMode::Selecting,
        }
    }
}

/// Result of a key event as reported to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Committed,
    Cancelled,
    Rejected,
    Ignored,
}

impl From<KeyOutcome> for Outcome {
    fn from(outcome: KeyOutcome) -> Self {
        match outcome {
            KeyOutcome::Committed => Outcome::Committed,
            KeyOutcome::Cancelled => Outcome::Cancelled,
            KeyOutcome::Rejected => Outcome::Rejected,
            KeyOutcome::Ignored => Outcome::Ignored,
        }
    }
}

/// Active filter list as reported to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    None,
    AllowList,
    DenyList,
}

impl From<FilterMode> for FilterKind {
    fn from(mode: FilterMode) -> Self {
        match mode {
            FilterMode::None => FilterKind::None,
            FilterMode::AllowList => FilterKind::AllowList,
            FilterMode::DenyList => FilterKind::DenyList,
        }
    }
}

/// Full picker status snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerStatus {
    /// Crate version
    pub version: String,
    pub mode: CaptureMode,
    pub label: String,
    pub hotkey: Option<KeyCode>,
    pub hotkey_name: Option<String>,
    pub default_text: String,
    pub selection_text: String,
    pub cancel_key: KeyCode,
    pub filter_enabled: bool,
    pub filter: FilterKind,
    pub allowed_keys: Vec<KeyCode>,
    pub forbidden_keys: Vec<KeyCode>,
}

impl From<&HotkeyPicker> for PickerStatus {
    fn from(picker: &HotkeyPicker) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            mode: picker.mode().into(),
            label: picker.label().to_string(),
            hotkey: picker.hotkey(),
            hotkey_name: picker.hotkey_name().map(str::to_owned),
            default_text: picker.default_text().to_string(),
            selection_text: picker.selection_text().to_string(),
            cancel_key: picker.cancel_key(),
            filter_enabled: picker.is_key_filter_enabled(),
            filter: picker.filter_mode().into(),
            allowed_keys: picker.allowed_keys().to_vec(),
            forbidden_keys: picker.forbidden_keys().to_vec(),
        }
    }
}

/// Messages from the driver to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Output {
    /// The committed hotkey changed
    HotkeyChanged(HotkeyChanged),

    /// Result of a key event; the host releases focus on `committed` and
    /// `cancelled`
    KeyOutcome {
        outcome: Outcome,
        release_focus: bool,
        label: String,
    },

    /// Label after a focus change or programmatic update
    Label { mode: CaptureMode, label: String },

    /// Status snapshot
    Status(PickerStatus),

    /// The input line could not be applied
    Error { code: String, message: String },
}

/// Errors raised while decoding host input
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("malformed host event: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error(transparent)]
    InvalidKey(#[from] KeyParseError),
}

impl HostError {
    /// Stable error code for the `error` output
    pub fn code(&self) -> &'static str {
        match self {
            HostError::InvalidJson(_) => "invalid_json",
            HostError::InvalidKey(_) => "invalid_key",
        }
    }
}

impl From<&HostError> for Output {
    fn from(err: &HostError) -> Self {
        Output::Error {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

impl HostEvent {
    /// Decode one input line
    pub fn parse(line: &str) -> Result<Self, HostError> {
        Ok(serde_json::from_str(line)?)
    }
}
