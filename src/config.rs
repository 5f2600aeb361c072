//! Configuration loading and management

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::hotkey::KeyCode;

/// Construction settings for a [`HotkeyPicker`](crate::HotkeyPicker)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Label shown when no hotkey is selected
    pub default_text: String,

    /// Label shown while waiting for a key
    pub selection_text: String,

    /// Key that aborts the current selection
    pub cancel_key: KeyCode,

    /// Whether the allow/deny lists are checked
    pub filter_enabled: bool,

    /// Keys that may be chosen, if non-empty
    pub allowed_keys: Vec<KeyCode>,

    /// Keys that may not be chosen, if non-empty. Dropped when
    /// `allowed_keys` is also non-empty.
    pub forbidden_keys: Vec<KeyCode>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            default_text: "None".to_string(),
            selection_text: "..".to_string(),
            cancel_key: KeyCode::ESCAPE,
            filter_enabled: false,
            allowed_keys: Vec::new(),
            forbidden_keys: Vec::new(),
        }
    }
}

impl PickerConfig {
    pub fn with_default_text(mut self, text: impl Into<String>) -> Self {
        self.default_text = text.into();
        self
    }

    pub fn with_selection_text(mut self, text: impl Into<String>) -> Self {
        self.selection_text = text.into();
        self
    }

    pub fn with_cancel_key(mut self, key: KeyCode) -> Self {
        self.cancel_key = key;
        self
    }

    pub fn with_filter_enabled(mut self, enabled: bool) -> Self {
        self.filter_enabled = enabled;
        self
    }

    pub fn with_allowed_keys(mut self, keys: impl Into<Vec<KeyCode>>) -> Self {
        self.allowed_keys = keys.into();
        self
    }

    pub fn with_forbidden_keys(mut self, keys: impl Into<Vec<KeyCode>>) -> Self {
        self.forbidden_keys = keys.into();
        self
    }
}

/// Host binary configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Settings for the picker the host drives
    pub picker: PickerConfig,
}

impl Config {
    const DEFAULT_TEXT: &'static str = "HOTKEY_PICKER_DEFAULT_TEXT";
    const SELECTION_TEXT: &'static str = "HOTKEY_PICKER_SELECTION_TEXT";
    const CANCEL_KEY: &'static str = "HOTKEY_PICKER_CANCEL_KEY";
    const FILTER: &'static str = "HOTKEY_PICKER_FILTER";
    const ALLOWED: &'static str = "HOTKEY_PICKER_ALLOWED";
    const FORBIDDEN: &'static str = "HOTKEY_PICKER_FORBIDDEN";

    /// Load configuration from environment and defaults
    pub fn load() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from a variable lookup, falling back to defaults
    /// for unset variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut picker = PickerConfig::default();

        if let Some(text) = lookup(Self::DEFAULT_TEXT) {
            picker.default_text = text;
        }
        if let Some(text) = lookup(Self::SELECTION_TEXT) {
            picker.selection_text = text;
        }
        if let Some(key) = lookup(Self::CANCEL_KEY) {
            picker.cancel_key = key
                .parse::<KeyCode>()
                .with_context(|| format!("invalid {}", Self::CANCEL_KEY))?;
        }
        if let Some(flag) = lookup(Self::FILTER) {
            picker.filter_enabled =
                parse_flag(&flag).with_context(|| format!("invalid {}", Self::FILTER))?;
        }
        if let Some(keys) = lookup(Self::ALLOWED) {
            picker.allowed_keys =
                parse_key_list(&keys).with_context(|| format!("invalid {}", Self::ALLOWED))?;
        }
        if let Some(keys) = lookup(Self::FORBIDDEN) {
            picker.forbidden_keys =
                parse_key_list(&keys).with_context(|| format!("invalid {}", Self::FORBIDDEN))?;
        }

        Ok(Self { picker })
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("expected a boolean, got {:?}", other),
    }
}

/// Parse a comma separated list of key names or codes
fn parse_key_list(value: &str) -> Result<Vec<KeyCode>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| item.parse::<KeyCode>().map_err(anyhow::Error::from))
        .collect()
}
