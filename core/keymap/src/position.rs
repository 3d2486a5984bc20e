//! Physical-position key codes.
//!
//! Codes follow the scan-code numbering browsers' `KeyboardEvent.code`
//! strings are commonly hashed to. Only navigation and editing keys are
//! mapped; character keys are expected to arrive through the event's own
//! character code.

use crate::{KeyEvent, KeyTranslator};
use fw_common::config::KeyScheme;
use fw_common::keysym::KeySym;

pub const DOM_PK_UNKNOWN: u32 = 0x0000;
pub const DOM_PK_ESCAPE: u32 = 0x0001;
pub const DOM_PK_BACKSPACE: u32 = 0x000E;
pub const DOM_PK_TAB: u32 = 0x000F;
pub const DOM_PK_ENTER: u32 = 0x001C;
pub const DOM_PK_CONTROL_LEFT: u32 = 0x001D;
pub const DOM_PK_SHIFT_LEFT: u32 = 0x002A;
pub const DOM_PK_SHIFT_RIGHT: u32 = 0x0036;
pub const DOM_PK_SPACE: u32 = 0x0039;
pub const DOM_PK_F5: u32 = 0x003F;
pub const DOM_PK_F11: u32 = 0x0057;
pub const DOM_PK_F12: u32 = 0x0058;
pub const DOM_PK_CONTROL_RIGHT: u32 = 0xE01D;
pub const DOM_PK_ARROW_UP: u32 = 0xE048;
pub const DOM_PK_ARROW_LEFT: u32 = 0xE04B;
pub const DOM_PK_ARROW_RIGHT: u32 = 0xE04D;
pub const DOM_PK_ARROW_DOWN: u32 = 0xE050;
pub const DOM_PK_DELETE: u32 = 0xE053;

/// `KeyboardEvent.code` strings we know a physical code for.
static DOM_CODE_NAMES: &[(&str, u32)] = &[
    ("Escape", DOM_PK_ESCAPE),
    ("Backspace", DOM_PK_BACKSPACE),
    ("Tab", DOM_PK_TAB),
    ("Enter", DOM_PK_ENTER),
    ("ControlLeft", DOM_PK_CONTROL_LEFT),
    ("ShiftLeft", DOM_PK_SHIFT_LEFT),
    ("ShiftRight", DOM_PK_SHIFT_RIGHT),
    ("Space", DOM_PK_SPACE),
    ("F5", DOM_PK_F5),
    ("F11", DOM_PK_F11),
    ("F12", DOM_PK_F12),
    ("ControlRight", DOM_PK_CONTROL_RIGHT),
    ("ArrowUp", DOM_PK_ARROW_UP),
    ("ArrowLeft", DOM_PK_ARROW_LEFT),
    ("ArrowRight", DOM_PK_ARROW_RIGHT),
    ("ArrowDown", DOM_PK_ARROW_DOWN),
    ("Delete", DOM_PK_DELETE),
];

/// Physical code for a `KeyboardEvent.code` string, [`DOM_PK_UNKNOWN`] otherwise.
pub fn dom_pk_code(code: &str) -> u32 {
    DOM_CODE_NAMES
        .iter()
        .find(|(name, _)| *name == code)
        .map(|&(_, pk)| pk)
        .unwrap_or(DOM_PK_UNKNOWN)
}

/// Translator for hosts that report physical-position codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionTranslator;

impl KeyTranslator for PositionTranslator {
    fn scheme(&self) -> KeyScheme {
        KeyScheme::Position
    }

    fn translate(&self, host_code: u32) -> Option<KeySym> {
        let sym = match host_code {
            DOM_PK_ARROW_LEFT => KeySym::ARROW_LEFT,
            DOM_PK_ARROW_UP => KeySym::ARROW_UP,
            DOM_PK_ARROW_RIGHT => KeySym::ARROW_RIGHT,
            DOM_PK_ARROW_DOWN => KeySym::ARROW_DOWN,
            DOM_PK_ENTER => KeySym::ENTER,
            DOM_PK_TAB => KeySym::TAB,
            DOM_PK_ESCAPE => KeySym::ESCAPE,
            DOM_PK_SHIFT_LEFT | DOM_PK_SHIFT_RIGHT => KeySym::SHIFT,
            DOM_PK_CONTROL_LEFT | DOM_PK_CONTROL_RIGHT => KeySym::CONTROL,
            DOM_PK_BACKSPACE => KeySym::BACKSPACE,
            _ => return None,
        };
        Some(sym)
    }

    fn resolve(&self, event: &KeyEvent) -> Option<KeySym> {
        Some(self.translate(event.code).unwrap_or(KeySym(event.key)))
    }

    fn allows_default(&self, event: &KeyEvent) -> bool {
        matches!(event.code, DOM_PK_F5 | DOM_PK_F11 | DOM_PK_F12)
    }
}
