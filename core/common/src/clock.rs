use crate::error::FwError;
use serde::{Deserialize, Serialize};

/// Which host time source `sample` reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[repr(i32)]
pub enum ClockMode {
    /// Wall-clock milliseconds.
    #[default]
    LowRes = 0,
    /// Monotonic, sub-millisecond.
    HighRes = 1,
}

impl TryFrom<i32> for ClockMode {
    type Error = FwError;

    fn try_from(mode: i32) -> Result<Self, Self::Error> {
        match mode {
            0 => Ok(ClockMode::LowRes),
            1 => Ok(ClockMode::HighRes),
            _ => Err(FwError::InvalidClockMode { mode }),
        }
    }
}

impl From<ClockMode> for i32 {
    fn from(mode: ClockMode) -> i32 {
        mode as i32
    }
}
