//! Key naming table
//!
//! Maps key codes to the human-readable names shown in the picker label.
//! The base table is derived from the platform symbolic constant names by
//! stripping their `Key_` prefix, with a few letters remapped to their glyph.
//!
//! A single table is shared process-wide. It is read by every picker and may
//! be overridden by host code through [`set_name`]. The lock only guards
//! memory safety; hosts delivering events from several threads must still
//! serialize overrides with their own event handling.

use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

use tracing::debug;

use super::keys::{KeyCode, PLATFORM_KEYS};

/// Prefix shared by all platform symbolic key names
const KEY_PREFIX: &str = "Key_";

/// Letters whose symbolic token is replaced by the printable glyph
const GLYPH_OVERRIDES: &[(KeyCode, &str)] = &[
    (KeyCode::ADIAERESIS, "Ä"),
    (KeyCode::ODIAERESIS, "Ö"),
    (KeyCode::UDIAERESIS, "Ü"),
];

static KEY_NAMES: OnceLock<RwLock<KeyNameTable>> = OnceLock::new();

/// Lookup table from key code to display name
#[derive(Debug, Clone, Default)]
pub struct KeyNameTable {
    names: HashMap<KeyCode, String>,
}

impl KeyNameTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table from a list of `(code, symbolic name)` pairs
    ///
    /// Symbolic names lose their `Key_` prefix; names without the prefix are
    /// kept as they are.
    pub fn from_symbols(symbols: &[(KeyCode, &str)]) -> Self {
        let names = symbols
            .iter()
            .map(|(code, symbol)| {
                let token = symbol.strip_prefix(KEY_PREFIX).unwrap_or(*symbol);
                (*code, token.to_string())
            })
            .collect();

        Self { names }
    }

    /// Build the table for the well-known platform keys, including the
    /// glyph overrides
    pub fn platform() -> Self {
        let mut table = Self::from_symbols(PLATFORM_KEYS);
        for (code, glyph) in GLYPH_OVERRIDES {
            table.insert(*code, *glyph);
        }
        table
    }

    /// Name of a key, if it has one
    pub fn get(&self, key: KeyCode) -> Option<&str> {
        self.names.get(&key).map(String::as_str)
    }

    /// Insert or replace the name of a key
    pub fn insert(&mut self, key: KeyCode, name: impl Into<String>) {
        self.names.insert(key, name.into());
    }

    /// Reverse lookup of a key by its display name
    ///
    /// Exact matches win; otherwise the comparison ignores ASCII case. When
    /// several keys share a name the lowest code is returned.
    pub fn find_code(&self, name: &str) -> Option<KeyCode> {
        let exact = self
            .names
            .iter()
            .filter(|(_, n)| n.as_str() == name)
            .map(|(code, _)| *code)
            .min();

        exact.or_else(|| {
            self.names
                .iter()
                .filter(|(_, n)| n.eq_ignore_ascii_case(name))
                .map(|(code, _)| *code)
                .min()
        })
    }

    /// All named key codes, in no particular order
    pub fn codes(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.names.keys().copied()
    }

    /// Number of named keys
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn table() -> &'static RwLock<KeyNameTable> {
    KEY_NAMES.get_or_init(|| {
        let table = KeyNameTable::platform();
        debug!(keys = table.len(), "key naming table built");
        RwLock::new(table)
    })
}

/// Build the process-wide table
///
/// Safe to call more than once; only the first call builds the table. Lookups
/// also initialize it lazily, so calling this is only needed to pay the build
/// cost up front.
pub fn init() {
    let _ = table();
}

/// Display name of a key in the process-wide table
pub fn name_of(key: KeyCode) -> Option<String> {
    let names = table().read().unwrap_or_else(PoisonError::into_inner);
    names.get(key).map(str::to_owned)
}

/// Register a custom display name, replacing any existing one
pub fn set_name(key: KeyCode, name: impl Into<String>) {
    let name = name.into();
    debug!(code = key.value(), %name, "key name override");
    let mut names = table().write().unwrap_or_else(PoisonError::into_inner);
    names.insert(key, name);
}

/// Key code registered under a display name in the process-wide table
pub fn code_of(name: &str) -> Option<KeyCode> {
    let names = table().read().unwrap_or_else(PoisonError::into_inner);
    names.find_code(name)
}
