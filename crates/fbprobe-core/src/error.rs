//! Probe failure taxonomy.
//!
//! Every variant is fatal: the probe stops at the first failure and never
//! retries. Display strings are the user-facing error line.

use std::path::PathBuf;

use thiserror::Error;

use crate::ports::DeviceError;

/// A failed probe run.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The device node could not be acquired. No query was attempted.
    #[error("Error: cannot open framebuffer device: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: DeviceError,
    },

    /// The variable screen query failed. The device was released.
    #[error("Error reading variable information: {0}")]
    VariableInfo(#[source] DeviceError),

    /// The fixed screen query failed. The device was released.
    #[error("Error reading fixed information: {0}")]
    FixedInfo(#[source] DeviceError),
}

impl ProbeError {
    /// The underlying device error.
    pub const fn device_error(&self) -> &DeviceError {
        match self {
            Self::Open { source, .. } => source,
            Self::VariableInfo(source) | Self::FixedInfo(source) => source,
        }
    }
}

/// Result type for probe runs.
pub type ProbeResult<T> = Result<T, ProbeError>;
