use crate::host::Host;
use fw_common::clock::ClockMode;
use fw_common::error::FwError;
use log::error;

/// Host-sourced timestamps in one of two resolutions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Clock {
    mode: ClockMode,
}

impl Clock {
    pub fn new(mode: ClockMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ClockMode {
        self.mode
    }

    /// Switch modes. An out-of-range value is logged and the current mode kept.
    pub fn set_mode(&mut self, mode: i32) -> Result<ClockMode, FwError> {
        match ClockMode::try_from(mode) {
            Ok(mode) => {
                self.mode = mode;
                Ok(mode)
            }
            Err(err) => {
                error!("[xclk] invalid clock mode {mode}");
                Err(err)
            }
        }
    }

    /// Read the host clock selected by the current mode.
    pub fn sample(&self, host: &impl Host) -> f64 {
        match self.mode {
            ClockMode::LowRes => host.date_now(),
            ClockMode::HighRes => host.performance_now(),
        }
    }
}
