//! Key filter restricting which keys may become the hotkey
//!
//! The filter holds an allow-list and a deny-list, of which at most one is
//! non-empty at any time. An empty active list lets every key through.

use tracing::debug;

use crate::hotkey::KeyCode;

/// Which list the filter currently checks against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// No list supplied, every key passes
    None,
    /// Only listed keys pass
    AllowList,
    /// Every key except the listed ones passes
    DenyList,
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterMode::None => write!(f, "None"),
            FilterMode::AllowList => write!(f, "AllowList"),
            FilterMode::DenyList => write!(f, "DenyList"),
        }
    }
}

/// Allow/deny filter for candidate hotkeys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyFilter {
    enabled: bool,
    allowed: Vec<KeyCode>,
    forbidden: Vec<KeyCode>,
}

impl KeyFilter {
    /// Create a filter
    ///
    /// If both lists are non-empty the deny-list is discarded.
    pub fn new(enabled: bool, allowed: Vec<KeyCode>, forbidden: Vec<KeyCode>) -> Self {
        let forbidden = if !allowed.is_empty() && !forbidden.is_empty() {
            debug!(
                allowed = allowed.len(),
                forbidden = forbidden.len(),
                "both key lists supplied, discarding forbidden keys"
            );
            Vec::new()
        } else {
            forbidden
        };

        Self {
            enabled,
            allowed,
            forbidden,
        }
    }

    /// Check whether a key may be committed
    pub fn accepts(&self, key: KeyCode) -> bool {
        if !self.enabled {
            return true;
        }

        match self.mode() {
            FilterMode::None => true,
            FilterMode::AllowList => self.allowed.contains(&key),
            FilterMode::DenyList => !self.forbidden.contains(&key),
        }
    }

    /// The list currently in effect
    pub fn mode(&self) -> FilterMode {
        if !self.allowed.is_empty() {
            FilterMode::AllowList
        } else if !self.forbidden.is_empty() {
            FilterMode::DenyList
        } else {
            FilterMode::None
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn allowed_keys(&self) -> &[KeyCode] {
        &self.allowed
    }

    /// Replace the allow-list
    ///
    /// A non-empty allow-list clears the deny-list. An empty one leaves the
    /// deny-list untouched.
    pub fn set_allowed_keys(&mut self, keys: Vec<KeyCode>) {
        if !keys.is_empty() && !self.forbidden.is_empty() {
            debug!("allow-list set, clearing forbidden keys");
            self.forbidden.clear();
        }
        self.allowed = keys;
    }

    pub fn forbidden_keys(&self) -> &[KeyCode] {
        &self.forbidden
    }

    /// Replace the deny-list
    ///
    /// A non-empty deny-list clears the allow-list. An empty one leaves the
    /// allow-list untouched.
    pub fn set_forbidden_keys(&mut self, keys: Vec<KeyCode>) {
        if !keys.is_empty() && !self.allowed.is_empty() {
            debug!("deny-list set, clearing allowed keys");
            self.allowed.clear();
        }
        self.forbidden = keys;
    }
}
