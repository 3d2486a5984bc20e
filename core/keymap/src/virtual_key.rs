//! Legacy virtual-key codes (`KeyboardEvent.keyCode`).
//!
//! Letters, digits, numpad digits, arrows, shift/control and the common
//! punctuation and editing keys are mapped. Refresh and the fullscreen/
//! devtools keys resolve to named symbols; anything else is left to the host.

use crate::{lookup, KeyEvent, KeyTranslationEntry, KeyTranslator};
use fw_common::config::KeyScheme;
use fw_common::keysym::KeySym;

pub const DOM_VK_BACK_SPACE: u32 = 0x08;
pub const DOM_VK_TAB: u32 = 0x09;
pub const DOM_VK_RETURN: u32 = 0x0D;
pub const DOM_VK_SHIFT: u32 = 0x10;
pub const DOM_VK_CONTROL: u32 = 0x11;
pub const DOM_VK_ESCAPE: u32 = 0x1B;
pub const DOM_VK_SPACE: u32 = 0x20;
pub const DOM_VK_LEFT: u32 = 0x25;
pub const DOM_VK_UP: u32 = 0x26;
pub const DOM_VK_RIGHT: u32 = 0x27;
pub const DOM_VK_DOWN: u32 = 0x28;
pub const DOM_VK_DELETE: u32 = 0x2E;
pub const DOM_VK_0: u32 = 0x30;
pub const DOM_VK_1: u32 = 0x31;
pub const DOM_VK_2: u32 = 0x32;
pub const DOM_VK_3: u32 = 0x33;
pub const DOM_VK_4: u32 = 0x34;
pub const DOM_VK_5: u32 = 0x35;
pub const DOM_VK_6: u32 = 0x36;
pub const DOM_VK_7: u32 = 0x37;
pub const DOM_VK_8: u32 = 0x38;
pub const DOM_VK_9: u32 = 0x39;
pub const DOM_VK_SEMICOLON: u32 = 0x3B;
pub const DOM_VK_EQUALS: u32 = 0x3D;
pub const DOM_VK_A: u32 = 0x41;
pub const DOM_VK_B: u32 = 0x42;
pub const DOM_VK_C: u32 = 0x43;
pub const DOM_VK_D: u32 = 0x44;
pub const DOM_VK_E: u32 = 0x45;
pub const DOM_VK_F: u32 = 0x46;
pub const DOM_VK_G: u32 = 0x47;
pub const DOM_VK_H: u32 = 0x48;
pub const DOM_VK_I: u32 = 0x49;
pub const DOM_VK_J: u32 = 0x4A;
pub const DOM_VK_K: u32 = 0x4B;
pub const DOM_VK_L: u32 = 0x4C;
pub const DOM_VK_M: u32 = 0x4D;
pub const DOM_VK_N: u32 = 0x4E;
pub const DOM_VK_O: u32 = 0x4F;
pub const DOM_VK_P: u32 = 0x50;
pub const DOM_VK_Q: u32 = 0x51;
pub const DOM_VK_R: u32 = 0x52;
pub const DOM_VK_S: u32 = 0x53;
pub const DOM_VK_T: u32 = 0x54;
pub const DOM_VK_U: u32 = 0x55;
pub const DOM_VK_V: u32 = 0x56;
pub const DOM_VK_W: u32 = 0x57;
pub const DOM_VK_X: u32 = 0x58;
pub const DOM_VK_Y: u32 = 0x59;
pub const DOM_VK_Z: u32 = 0x5A;
pub const DOM_VK_NUMPAD0: u32 = 0x60;
pub const DOM_VK_NUMPAD1: u32 = 0x61;
pub const DOM_VK_NUMPAD2: u32 = 0x62;
pub const DOM_VK_NUMPAD3: u32 = 0x63;
pub const DOM_VK_NUMPAD4: u32 = 0x64;
pub const DOM_VK_NUMPAD5: u32 = 0x65;
pub const DOM_VK_NUMPAD6: u32 = 0x66;
pub const DOM_VK_NUMPAD7: u32 = 0x67;
pub const DOM_VK_NUMPAD8: u32 = 0x68;
pub const DOM_VK_NUMPAD9: u32 = 0x69;
pub const DOM_VK_MULTIPLY: u32 = 0x6A;
pub const DOM_VK_ADD: u32 = 0x6B;
pub const DOM_VK_SUBTRACT: u32 = 0x6D;
pub const DOM_VK_DIVIDE: u32 = 0x6F;
pub const DOM_VK_F5: u32 = 0x74;
pub const DOM_VK_F11: u32 = 0x7A;
pub const DOM_VK_F12: u32 = 0x7B;
pub const DOM_VK_HYPHEN_MINUS: u32 = 0xAD;
pub const DOM_VK_SEMICOLON_WEBKIT: u32 = 0xBA;
pub const DOM_VK_EQUALS_WEBKIT: u32 = 0xBB;
pub const DOM_VK_COMMA: u32 = 0xBC;
pub const DOM_VK_MINUS: u32 = 0xBD;
pub const DOM_VK_PERIOD: u32 = 0xBE;
pub const DOM_VK_SLASH: u32 = 0xBF;
pub const DOM_VK_BACK_QUOTE: u32 = 0xC0;
pub const DOM_VK_OPEN_BRACKET: u32 = 0xDB;
pub const DOM_VK_BACK_SLASH: u32 = 0xDC;
pub const DOM_VK_CLOSE_BRACKET: u32 = 0xDD;
pub const DOM_VK_QUOTE: u32 = 0xDE;

/// Virtual-key translation table, scanned front to back.
pub static VIRTUAL_KEYS: &[KeyTranslationEntry] = &[
    // Letters resolve to lowercase symbols only.
    KeyTranslationEntry::new(DOM_VK_A, KeySym::from_char('a')),
    KeyTranslationEntry::new(DOM_VK_B, KeySym::from_char('b')),
    KeyTranslationEntry::new(DOM_VK_C, KeySym::from_char('c')),
    KeyTranslationEntry::new(DOM_VK_D, KeySym::from_char('d')),
    KeyTranslationEntry::new(DOM_VK_E, KeySym::from_char('e')),
    KeyTranslationEntry::new(DOM_VK_F, KeySym::from_char('f')),
    KeyTranslationEntry::new(DOM_VK_G, KeySym::from_char('g')),
    KeyTranslationEntry::new(DOM_VK_H, KeySym::from_char('h')),
    KeyTranslationEntry::new(DOM_VK_I, KeySym::from_char('i')),
    KeyTranslationEntry::new(DOM_VK_J, KeySym::from_char('j')),
    KeyTranslationEntry::new(DOM_VK_K, KeySym::from_char('k')),
    KeyTranslationEntry::new(DOM_VK_L, KeySym::from_char('l')),
    KeyTranslationEntry::new(DOM_VK_M, KeySym::from_char('m')),
    KeyTranslationEntry::new(DOM_VK_N, KeySym::from_char('n')),
    KeyTranslationEntry::new(DOM_VK_O, KeySym::from_char('o')),
    KeyTranslationEntry::new(DOM_VK_P, KeySym::from_char('p')),
    KeyTranslationEntry::new(DOM_VK_Q, KeySym::from_char('q')),
    KeyTranslationEntry::new(DOM_VK_R, KeySym::from_char('r')),
    KeyTranslationEntry::new(DOM_VK_S, KeySym::from_char('s')),
    KeyTranslationEntry::new(DOM_VK_T, KeySym::from_char('t')),
    KeyTranslationEntry::new(DOM_VK_U, KeySym::from_char('u')),
    KeyTranslationEntry::new(DOM_VK_V, KeySym::from_char('v')),
    KeyTranslationEntry::new(DOM_VK_W, KeySym::from_char('w')),
    KeyTranslationEntry::new(DOM_VK_X, KeySym::from_char('x')),
    KeyTranslationEntry::new(DOM_VK_Y, KeySym::from_char('y')),
    KeyTranslationEntry::new(DOM_VK_Z, KeySym::from_char('z')),

    KeyTranslationEntry::new(DOM_VK_0, KeySym::from_char('0')),
    KeyTranslationEntry::new(DOM_VK_1, KeySym::from_char('1')),
    KeyTranslationEntry::new(DOM_VK_2, KeySym::from_char('2')),
    KeyTranslationEntry::new(DOM_VK_3, KeySym::from_char('3')),
    KeyTranslationEntry::new(DOM_VK_4, KeySym::from_char('4')),
    KeyTranslationEntry::new(DOM_VK_5, KeySym::from_char('5')),
    KeyTranslationEntry::new(DOM_VK_6, KeySym::from_char('6')),
    KeyTranslationEntry::new(DOM_VK_7, KeySym::from_char('7')),
    KeyTranslationEntry::new(DOM_VK_8, KeySym::from_char('8')),
    KeyTranslationEntry::new(DOM_VK_9, KeySym::from_char('9')),

    // Numpad digits share the top-row symbols.
    KeyTranslationEntry::new(DOM_VK_NUMPAD0, KeySym::from_char('0')),
    KeyTranslationEntry::new(DOM_VK_NUMPAD1, KeySym::from_char('1')),
    KeyTranslationEntry::new(DOM_VK_NUMPAD2, KeySym::from_char('2')),
    KeyTranslationEntry::new(DOM_VK_NUMPAD3, KeySym::from_char('3')),
    KeyTranslationEntry::new(DOM_VK_NUMPAD4, KeySym::from_char('4')),
    KeyTranslationEntry::new(DOM_VK_NUMPAD5, KeySym::from_char('5')),
    KeyTranslationEntry::new(DOM_VK_NUMPAD6, KeySym::from_char('6')),
    KeyTranslationEntry::new(DOM_VK_NUMPAD7, KeySym::from_char('7')),
    KeyTranslationEntry::new(DOM_VK_NUMPAD8, KeySym::from_char('8')),
    KeyTranslationEntry::new(DOM_VK_NUMPAD9, KeySym::from_char('9')),

    KeyTranslationEntry::new(DOM_VK_LEFT, KeySym::ARROW_LEFT),
    KeyTranslationEntry::new(DOM_VK_UP, KeySym::ARROW_UP),
    KeyTranslationEntry::new(DOM_VK_RIGHT, KeySym::ARROW_RIGHT),
    KeyTranslationEntry::new(DOM_VK_DOWN, KeySym::ARROW_DOWN),

    KeyTranslationEntry::new(DOM_VK_SHIFT, KeySym::SHIFT),
    KeyTranslationEntry::new(DOM_VK_CONTROL, KeySym::CONTROL),

    KeyTranslationEntry::new(DOM_VK_HYPHEN_MINUS, KeySym::from_char('-')),
    KeyTranslationEntry::new(DOM_VK_MINUS, KeySym::from_char('-')),
    KeyTranslationEntry::new(DOM_VK_SUBTRACT, KeySym::from_char('-')),
    KeyTranslationEntry::new(DOM_VK_EQUALS, KeySym::from_char('=')),
    KeyTranslationEntry::new(DOM_VK_EQUALS_WEBKIT, KeySym::from_char('=')),
    KeyTranslationEntry::new(DOM_VK_ADD, KeySym::from_char('+')),
    KeyTranslationEntry::new(DOM_VK_RETURN, KeySym::ENTER),
    KeyTranslationEntry::new(DOM_VK_SLASH, KeySym::from_char('/')),
    KeyTranslationEntry::new(DOM_VK_DIVIDE, KeySym::from_char('/')),
    KeyTranslationEntry::new(DOM_VK_MULTIPLY, KeySym::from_char('*')),
    KeyTranslationEntry::new(DOM_VK_BACK_SPACE, KeySym::BACKSPACE),
    KeyTranslationEntry::new(DOM_VK_DELETE, KeySym::DELETE),
    KeyTranslationEntry::new(DOM_VK_TAB, KeySym::TAB),
    KeyTranslationEntry::new(DOM_VK_ESCAPE, KeySym::ESCAPE),
    KeyTranslationEntry::new(DOM_VK_OPEN_BRACKET, KeySym::from_char('[')),
    KeyTranslationEntry::new(DOM_VK_CLOSE_BRACKET, KeySym::from_char(']')),
    KeyTranslationEntry::new(DOM_VK_SEMICOLON, KeySym::from_char(';')),
    KeyTranslationEntry::new(DOM_VK_SEMICOLON_WEBKIT, KeySym::from_char(';')),
    KeyTranslationEntry::new(DOM_VK_QUOTE, KeySym::from_char('\'')),
    KeyTranslationEntry::new(DOM_VK_BACK_SLASH, KeySym::from_char('\\')),
    KeyTranslationEntry::new(DOM_VK_COMMA, KeySym::from_char(',')),
    KeyTranslationEntry::new(DOM_VK_PERIOD, KeySym::from_char('.')),
    KeyTranslationEntry::new(DOM_VK_SPACE, KeySym::SPACE),
    KeyTranslationEntry::new(DOM_VK_BACK_QUOTE, KeySym::from_char('~')),
    KeyTranslationEntry::new(DOM_VK_DELETE, KeySym::DELETE),
];

/// Translator for hosts that report legacy virtual-key codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct VirtualKeyTranslator;

impl KeyTranslator for VirtualKeyTranslator {
    fn scheme(&self) -> KeyScheme {
        KeyScheme::Legacy
    }

    fn translate(&self, host_code: u32) -> Option<KeySym> {
        lookup(VIRTUAL_KEYS, host_code)
    }

    fn resolve(&self, event: &KeyEvent) -> Option<KeySym> {
        self.translate(event.key_code).or_else(|| {
            self.allows_default(event)
                .then(|| KeySym::named(event.key_code))
        })
    }

    fn allows_default(&self, event: &KeyEvent) -> bool {
        matches!(event.key_code, DOM_VK_F5 | DOM_VK_F11 | DOM_VK_F12)
    }
}
