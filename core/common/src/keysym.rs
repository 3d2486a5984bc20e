//! The library's key symbol space.
//!
//! Character-producing keys use their ASCII value, so a raw host character
//! code forwarded unchanged lands on the same symbol a table entry would
//! produce. Keys with no character live above 0xff.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeySym(pub i32);

impl KeySym {
    pub const NONE: KeySym = KeySym(0);

    pub const BACKSPACE: KeySym = KeySym(0x08);
    pub const TAB: KeySym = KeySym(0x09);
    pub const ENTER: KeySym = KeySym(0x0d);
    pub const ESCAPE: KeySym = KeySym(0x1b);
    pub const SPACE: KeySym = KeySym(0x20);
    pub const DELETE: KeySym = KeySym(0x7f);

    pub const ARROW_LEFT: KeySym = KeySym(0x100);
    pub const ARROW_UP: KeySym = KeySym(0x101);
    pub const ARROW_RIGHT: KeySym = KeySym(0x102);
    pub const ARROW_DOWN: KeySym = KeySym(0x103);
    pub const SHIFT: KeySym = KeySym(0x104);
    pub const CONTROL: KeySym = KeySym(0x105);

    /// First symbol of the range for keys that produce no character.
    pub const NAMED_BASE: i32 = 0x200;

    /// Symbol for a character-producing key.
    pub const fn from_char(c: char) -> KeySym {
        KeySym(c as i32)
    }

    /// Symbol for a key with no character, keyed by its legacy key code.
    /// Never collides with a character symbol.
    pub const fn named(key_code: u32) -> KeySym {
        KeySym(KeySym::NAMED_BASE | (key_code & 0xff) as i32)
    }

    pub fn is_named(self) -> bool {
        self.0 & !0xff == KeySym::NAMED_BASE
    }

    pub fn is_none(self) -> bool {
        self == KeySym::NONE
    }

    /// Human-readable name, used for logging and table dumps.
    pub fn name(self) -> String {
        match self {
            KeySym::NONE => "None".into(),
            KeySym::BACKSPACE => "Backspace".into(),
            KeySym::TAB => "Tab".into(),
            KeySym::ENTER => "Enter".into(),
            KeySym::ESCAPE => "Escape".into(),
            KeySym::SPACE => "Space".into(),
            KeySym::DELETE => "Delete".into(),
            KeySym::ARROW_LEFT => "ArrowLeft".into(),
            KeySym::ARROW_UP => "ArrowUp".into(),
            KeySym::ARROW_RIGHT => "ArrowRight".into(),
            KeySym::ARROW_DOWN => "ArrowDown".into(),
            KeySym::SHIFT => "Shift".into(),
            KeySym::CONTROL => "Control".into(),
            KeySym(code) => match char::from_u32(code as u32) {
                Some(c) if c.is_ascii_graphic() => format!("'{c}'"),
                _ => format!("#{code:x}"),
            },
        }
    }
}

impl std::fmt::Display for KeySym {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<KeySym> for i32 {
    fn from(sym: KeySym) -> i32 {
        sym.0
    }
}
