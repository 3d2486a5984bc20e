//! Conversion of DOM keyboard events into [`KeyEvent`]s.

use fw_common::keysym::KeySym;
use fw_keymap::position::dom_pk_code;
use fw_keymap::{KeyEvent, Modifiers};
use web_sys::KeyboardEvent;

/// Character code for a `KeyboardEvent.key` value.
///
/// Single-character keys report that character. Named keys ("F11",
/// "Delete", ...) have none and get a [`KeySym::named`] value instead.
pub fn char_code(key: &str, key_code: u32) -> i32 {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c as i32,
        _ => KeySym::named(key_code).0,
    }
}

pub fn modifiers(shift: bool, control: bool, alt: bool, meta: bool) -> Modifiers {
    let mut mods = Modifiers::NONE;
    for (held, flag) in [
        (shift, Modifiers::SHIFT),
        (control, Modifiers::CONTROL),
        (alt, Modifiers::ALT),
        (meta, Modifiers::META),
    ] {
        if held {
            mods = mods | flag;
        }
    }
    mods
}

pub fn key_event(event: &KeyboardEvent) -> KeyEvent {
    let key_code = event.key_code();
    KeyEvent {
        key: char_code(&event.key(), key_code),
        code: dom_pk_code(&event.code()),
        key_code,
        modifiers: modifiers(
            event.shift_key(),
            event.ctrl_key(),
            event.alt_key(),
            event.meta_key(),
        ),
    }
}
