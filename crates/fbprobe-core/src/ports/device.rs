//! Framebuffer device ports.
//!
//! Core owns the traits; OS-specific implementations live in adapter crates
//! (e.g., fbprobe-runtime). Tests substitute in-memory devices.
//!
//! # Release semantics
//!
//! A device handle is a scoped resource. Implementations release the
//! underlying OS handle when the device value is dropped, so every exit path
//! out of a probe run releases it exactly once.

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::domain::{FixedScreenInfo, VariableScreenInfo};

/// Errors raised by a framebuffer device adapter.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// The operating system rejected the call.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The platform has no framebuffer device-control interface.
    #[error("framebuffer devices are not supported on {0}")]
    Unsupported(String),
}

impl DeviceError {
    /// Raw OS error code, when the failure came from the OS.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            Self::Io(err) => err.raw_os_error(),
            Self::Unsupported(_) => None,
        }
    }

    /// I/O error kind, when the failure came from the OS.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Io(err) => Some(err.kind()),
            Self::Unsupported(_) => None,
        }
    }
}

/// Result type for device operations.
pub type DeviceResult<T> = Result<T, DeviceError>;

/// An open framebuffer device that answers the two read-only screen queries.
pub trait FramebufferDevice {
    /// Query mutable display-mode parameters (`FBIOGET_VSCREENINFO`).
    fn query_variable(&self) -> DeviceResult<VariableScreenInfo>;

    /// Query static allocation parameters (`FBIOGET_FSCREENINFO`).
    fn query_fixed(&self) -> DeviceResult<FixedScreenInfo>;
}

/// Acquires framebuffer devices by path.
pub trait FramebufferOpener {
    /// Device handle produced by this opener. Dropping it releases the device.
    type Device: FramebufferDevice;

    /// Open the device node at `path` in read/write mode.
    fn open(&self, path: &Path) -> DeviceResult<Self::Device>;
}
