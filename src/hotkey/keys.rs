//! Key code definitions
//!
//! Provides the `KeyCode` newtype and constants for the well-known key codes
//! a host may deliver. Codes follow the Qt key numbering: printable keys use
//! their Latin-1 code point, special keys live above `0x0100_0000`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::names;

/// Opaque integer identifying a keyboard key, as supplied by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(u32);

impl KeyCode {
    /// Wrap a raw host key code
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    /// The raw key code
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for KeyCode {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl From<KeyCode> for u32 {
    fn from(key: KeyCode) -> Self {
        key.0
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match names::name_of(*self) {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "{:#x}", self.0),
        }
    }
}

/// Errors produced when parsing a key from text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyParseError {
    #[error("empty key")]
    Empty,

    #[error("unknown key name: {0}")]
    UnknownName(String),

    #[error("invalid key code: {0}")]
    InvalidCode(String),
}

/// Parses a key name (`"F1"`, `"Escape"`, `"Ä"`), a decimal code (`"65"`)
/// or a hex code (`"0x41"`).
///
/// Names are looked up in the process-wide naming table, so registered
/// overrides are accepted as well.
impl FromStr for KeyCode {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(KeyParseError::Empty);
        }

        if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            return u32::from_str_radix(hex, 16)
                .map(KeyCode)
                .map_err(|_| KeyParseError::InvalidCode(s.to_string()));
        }

        // Single digits are key names ("0".."9"), longer digit runs are codes
        if s.len() > 1 && s.bytes().all(|b| b.is_ascii_digit()) {
            return s
                .parse::<u32>()
                .map(KeyCode)
                .map_err(|_| KeyParseError::InvalidCode(s.to_string()));
        }

        names::code_of(s).ok_or_else(|| KeyParseError::UnknownName(s.to_string()))
    }
}

/// Declares the well-known key constants together with the symbolic constant
/// names the naming table is derived from.
macro_rules! key_codes {
    ($($ident:ident = $code:literal => $symbol:literal,)*) => {
        impl KeyCode {
            $(pub const $ident: KeyCode = KeyCode($code);)*
        }

        /// Every well-known key with its platform symbolic name
        pub(crate) const PLATFORM_KEYS: &[(KeyCode, &str)] = &[
            $((KeyCode::$ident, $symbol),)*
        ];
    };
}

key_codes! {
    SPACE = 0x20 => "Key_Space",
    EXCLAM = 0x21 => "Key_Exclam",
    QUOTE_DBL = 0x22 => "Key_QuoteDbl",
    NUMBER_SIGN = 0x23 => "Key_NumberSign",
    DOLLAR = 0x24 => "Key_Dollar",
    PERCENT = 0x25 => "Key_Percent",
    AMPERSAND = 0x26 => "Key_Ampersand",
    APOSTROPHE = 0x27 => "Key_Apostrophe",
    PAREN_LEFT = 0x28 => "Key_ParenLeft",
    PAREN_RIGHT = 0x29 => "Key_ParenRight",
    ASTERISK = 0x2a => "Key_Asterisk",
    PLUS = 0x2b => "Key_Plus",
    COMMA = 0x2c => "Key_Comma",
    MINUS = 0x2d => "Key_Minus",
    PERIOD = 0x2e => "Key_Period",
    SLASH = 0x2f => "Key_Slash",
    DIGIT_0 = 0x30 => "Key_0",
    DIGIT_1 = 0x31 => "Key_1",
    DIGIT_2 = 0x32 => "Key_2",
    DIGIT_3 = 0x33 => "Key_3",
    DIGIT_4 = 0x34 => "Key_4",
    DIGIT_5 = 0x35 => "Key_5",
    DIGIT_6 = 0x36 => "Key_6",
    DIGIT_7 = 0x37 => "Key_7",
    DIGIT_8 = 0x38 => "Key_8",
    DIGIT_9 = 0x39 => "Key_9",
    COLON = 0x3a => "Key_Colon",
    SEMICOLON = 0x3b => "Key_Semicolon",
    LESS = 0x3c => "Key_Less",
    EQUAL = 0x3d => "Key_Equal",
    GREATER = 0x3e => "Key_Greater",
    QUESTION = 0x3f => "Key_Question",
    AT = 0x40 => "Key_At",
    A = 0x41 => "Key_A",
    B = 0x42 => "Key_B",
    C = 0x43 => "Key_C",
    D = 0x44 => "Key_D",
    E = 0x45 => "Key_E",
    F = 0x46 => "Key_F",
    G = 0x47 => "Key_G",
    H = 0x48 => "Key_H",
    I = 0x49 => "Key_I",
    J = 0x4a => "Key_J",
    K = 0x4b => "Key_K",
    L = 0x4c => "Key_L",
    M = 0x4d => "Key_M",
    N = 0x4e => "Key_N",
    O = 0x4f => "Key_O",
    P = 0x50 => "Key_P",
    Q = 0x51 => "Key_Q",
    R = 0x52 => "Key_R",
    S = 0x53 => "Key_S",
    T = 0x54 => "Key_T",
    U = 0x55 => "Key_U",
    V = 0x56 => "Key_V",
    W = 0x57 => "Key_W",
    X = 0x58 => "Key_X",
    Y = 0x59 => "Key_Y",
    Z = 0x5a => "Key_Z",
    BRACKET_LEFT = 0x5b => "Key_BracketLeft",
    BACKSLASH = 0x5c => "Key_Backslash",
    BRACKET_RIGHT = 0x5d => "Key_BracketRight",
    ASCII_CIRCUM = 0x5e => "Key_AsciiCircum",
    UNDERSCORE = 0x5f => "Key_Underscore",
    QUOTE_LEFT = 0x60 => "Key_QuoteLeft",
    BRACE_LEFT = 0x7b => "Key_BraceLeft",
    BAR = 0x7c => "Key_Bar",
    BRACE_RIGHT = 0x7d => "Key_BraceRight",
    ASCII_TILDE = 0x7e => "Key_AsciiTilde",
    ADIAERESIS = 0xc4 => "Key_Adiaeresis",
    ODIAERESIS = 0xd6 => "Key_Odiaeresis",
    UDIAERESIS = 0xdc => "Key_Udiaeresis",
    SSHARP = 0xdf => "Key_ssharp",
    ESCAPE = 0x0100_0000 => "Key_Escape",
    TAB = 0x0100_0001 => "Key_Tab",
    BACKTAB = 0x0100_0002 => "Key_Backtab",
    BACKSPACE = 0x0100_0003 => "Key_Backspace",
    RETURN = 0x0100_0004 => "Key_Return",
    ENTER = 0x0100_0005 => "Key_Enter",
    INSERT = 0x0100_0006 => "Key_Insert",
    DELETE = 0x0100_0007 => "Key_Delete",
    PAUSE = 0x0100_0008 => "Key_Pause",
    PRINT = 0x0100_0009 => "Key_Print",
    SYS_REQ = 0x0100_000a => "Key_SysReq",
    CLEAR = 0x0100_000b => "Key_Clear",
    HOME = 0x0100_0010 => "Key_Home",
    END = 0x0100_0011 => "Key_End",
    LEFT = 0x0100_0012 => "Key_Left",
    UP = 0x0100_0013 => "Key_Up",
    RIGHT = 0x0100_0014 => "Key_Right",
    DOWN = 0x0100_0015 => "Key_Down",
    PAGE_UP = 0x0100_0016 => "Key_PageUp",
    PAGE_DOWN = 0x0100_0017 => "Key_PageDown",
    SHIFT = 0x0100_0020 => "Key_Shift",
    CONTROL = 0x0100_0021 => "Key_Control",
    META = 0x0100_0022 => "Key_Meta",
    ALT = 0x0100_0023 => "Key_Alt",
    CAPS_LOCK = 0x0100_0024 => "Key_CapsLock",
    NUM_LOCK = 0x0100_0025 => "Key_NumLock",
    SCROLL_LOCK = 0x0100_0026 => "Key_ScrollLock",
    F1 = 0x0100_0030 => "Key_F1",
    F2 = 0x0100_0031 => "Key_F2",
    F3 = 0x0100_0032 => "Key_F3",
    F4 = 0x0100_0033 => "Key_F4",
    F5 = 0x0100_0034 => "Key_F5",
    F6 = 0x0100_0035 => "Key_F6",
    F7 = 0x0100_0036 => "Key_F7",
    F8 = 0x0100_0037 => "Key_F8",
    F9 = 0x0100_0038 => "Key_F9",
    F10 = 0x0100_0039 => "Key_F10",
    F11 = 0x0100_003a => "Key_F11",
    F12 = 0x0100_003b => "Key_F12",
    F13 = 0x0100_003c => "Key_F13",
    F14 = 0x0100_003d => "Key_F14",
    F15 = 0x0100_003e => "Key_F15",
    F16 = 0x0100_003f => "Key_F16",
    F17 = 0x0100_0040 => "Key_F17",
    F18 = 0x0100_0041 => "Key_F18",
    F19 = 0x0100_0042 => "Key_F19",
    F20 = 0x0100_0043 => "Key_F20",
    F21 = 0x0100_0044 => "Key_F21",
    F22 = 0x0100_0045 => "Key_F22",
    F23 = 0x0100_0046 => "Key_F23",
    F24 = 0x0100_0047 => "Key_F24",
    SUPER_L = 0x0100_0053 => "Key_Super_L",
    SUPER_R = 0x0100_0054 => "Key_Super_R",
    MENU = 0x0100_0055 => "Key_Menu",
    HELP = 0x0100_0058 => "Key_Help",
    VOLUME_DOWN = 0x0100_0070 => "Key_VolumeDown",
    VOLUME_MUTE = 0x0100_0071 => "Key_VolumeMute",
    VOLUME_UP = 0x0100_0072 => "Key_VolumeUp",
    MEDIA_PLAY = 0x0100_0080 => "Key_MediaPlay",
    MEDIA_STOP = 0x0100_0081 => "Key_MediaStop",
    MEDIA_PREVIOUS = 0x0100_0082 => "Key_MediaPrevious",
    MEDIA_NEXT = 0x0100_0083 => "Key_MediaNext",
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_codes_match_ascii() {
        assert_eq!(KeyCode::A.value(), 65);
        assert_eq!(KeyCode::Z.value(), u32::from(b'Z'));
        assert_eq!(KeyCode::from(65), KeyCode::A);
    }

    #[test]
    fn test_platform_keys_are_unique() {
        let mut codes: Vec<_> = PLATFORM_KEYS.iter().map(|(code, _)| *code).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), PLATFORM_KEYS.len());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("F1".parse::<KeyCode>(), Ok(KeyCode::F1));
        assert_eq!("Escape".parse::<KeyCode>(), Ok(KeyCode::ESCAPE));
        assert_eq!(" Control ".parse::<KeyCode>(), Ok(KeyCode::CONTROL));
        assert_eq!("Ä".parse::<KeyCode>(), Ok(KeyCode::ADIAERESIS));
        assert_eq!("7".parse::<KeyCode>(), Ok(KeyCode::DIGIT_7));
    }

    #[test]
    fn test_parse_codes() {
        assert_eq!("65".parse::<KeyCode>(), Ok(KeyCode::A));
        assert_eq!("0x41".parse::<KeyCode>(), Ok(KeyCode::A));
        assert_eq!("0x01000000".parse::<KeyCode>(), Ok(KeyCode::ESCAPE));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<KeyCode>(), Err(KeyParseError::Empty));
        assert!(matches!(
            "NotAKey".parse::<KeyCode>(),
            Err(KeyParseError::UnknownName(_))
        ));
        assert!(matches!(
            "0xZZ".parse::<KeyCode>(),
            Err(KeyParseError::InvalidCode(_))
        ));
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(KeyCode::F12.to_string(), "F12");
        assert_eq!(KeyCode::new(0x0123_4567).to_string(), "0x1234567");
    }

    #[test]
    fn test_serializes_as_integer() {
        let json = serde_json::to_string(&KeyCode::A).unwrap();
        assert_eq!(json, "65");
        let key: KeyCode = serde_json::from_str("16777264").unwrap();
        assert_eq!(key, KeyCode::F1);
    }
}
