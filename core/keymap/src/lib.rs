//! Translation from host keyboard identifiers to library key symbols.
//!
//! Two host flavors exist: physical-position codes and legacy virtual-key
//! codes. Both sit behind [`KeyTranslator`] so the rest of the platform does
//! not care which one the host speaks.

pub mod position;
pub mod virtual_key;

use fw_common::config::KeyScheme;
use fw_common::keysym::KeySym;

pub use position::PositionTranslator;
pub use virtual_key::VirtualKeyTranslator;

/// Modifier keys held during a key event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1 << 0);
    pub const CONTROL: Modifiers = Modifiers(1 << 1);
    pub const ALT: Modifiers = Modifiers(1 << 2);
    pub const META: Modifiers = Modifiers(1 << 3);

    pub fn contains(self, other: Modifiers) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Modifiers) -> Modifiers {
        Modifiers(self.0 | rhs.0)
    }
}

/// A keyboard event as the host reports it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyEvent {
    /// Character code of the key, forwarded when nothing else matches.
    pub key: i32,
    /// Physical-position code.
    pub code: u32,
    /// Legacy virtual-key code.
    pub key_code: u32,
    pub modifiers: Modifiers,
}

/// One row of a static translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyTranslationEntry {
    pub host_code: u32,
    pub symbol: KeySym,
}

impl KeyTranslationEntry {
    pub const fn new(host_code: u32, symbol: KeySym) -> Self {
        Self { host_code, symbol }
    }
}

/// Maps one flavor of host key identifier onto [`KeySym`].
pub trait KeyTranslator {
    /// The host key-event flavor this translator consumes.
    fn scheme(&self) -> KeyScheme;

    /// Pure table lookup. `None` when the host code has no mapping.
    fn translate(&self, host_code: u32) -> Option<KeySym>;

    /// Symbol to dispatch for `event`, or `None` if the event is not ours.
    fn resolve(&self, event: &KeyEvent) -> Option<KeySym>;

    /// Whether the host should still run its own handling of `event`.
    ///
    /// Refresh and the fullscreen/devtools keys keep working; every other
    /// key we dispatch is captured.
    fn allows_default(&self, event: &KeyEvent) -> bool;
}

/// Build the translator for `scheme`.
pub fn translator_for(scheme: KeyScheme) -> Box<dyn KeyTranslator> {
    match scheme {
        KeyScheme::Position => Box::new(PositionTranslator),
        KeyScheme::Legacy => Box::new(VirtualKeyTranslator),
    }
}

/// Linear scan, first match wins.
pub fn lookup(table: &[KeyTranslationEntry], host_code: u32) -> Option<KeySym> {
    table
        .iter()
        .find(|entry| entry.host_code == host_code)
        .map(|entry| entry.symbol)
}
