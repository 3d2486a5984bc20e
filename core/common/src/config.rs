//! Runtime configuration handed over by the embedding page.

use crate::clock::ClockMode;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Which key identifier the host's keyboard events are translated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyScheme {
    /// Physical-position codes (`KeyboardEvent.code`).
    Position,
    /// Legacy virtual-key codes (`KeyboardEvent.keyCode`).
    Legacy,
}

impl Default for KeyScheme {
    fn default() -> Self {
        if cfg!(feature = "legacy-keycodes") {
            KeyScheme::Legacy
        } else {
            KeyScheme::Position
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RuntimeConfig {
    /// Id of an existing `<canvas>` to draw into. A new one is created when absent.
    pub canvas_id: Option<String>,
    pub key_scheme: KeyScheme,
    pub clock_mode: ClockMode,
    pub log_level: LevelFilter,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            canvas_id: None,
            key_scheme: KeyScheme::default(),
            clock_mode: ClockMode::default(),
            log_level: LevelFilter::Info,
        }
    }
}
