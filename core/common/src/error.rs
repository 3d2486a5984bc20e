use thiserror::Error;

/// Result code for a successful `open`.
pub const VERR_OK: i32 = 0;
/// Result code for a framebuffer that could not be allocated.
pub const VERR_NOMEM: i32 = 1;
/// Result code for a host that could not provide a display surface.
pub const VERR_WINDOW: i32 = 2;
/// Result code for an out-of-range configuration value.
pub const VERR_INVALID: i32 = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FwError {
    #[error("Out of memory: cannot allocate {requested} bytes of framebuffer")]
    OutOfMemory { requested: usize },

    #[error("Invalid clock mode: {mode}")]
    InvalidClockMode { mode: i32 },

    #[error("Host error: {message}")]
    Host { message: String },
}

impl FwError {
    /// The library result code this error is reported as.
    pub fn code(&self) -> i32 {
        match self {
            FwError::OutOfMemory { .. } => VERR_NOMEM,
            FwError::Host { .. } => VERR_WINDOW,
            FwError::InvalidClockMode { .. } => VERR_INVALID,
        }
    }
}

/// Collapse an `open`-style result into the library's integer result code.
pub fn result_code<T>(result: &Result<T, FwError>) -> i32 {
    match result {
        Ok(_) => VERR_OK,
        Err(err) => err.code(),
    }
}
