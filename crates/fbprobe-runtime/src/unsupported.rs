//! Opener for platforms without a framebuffer device-control interface.

use std::path::Path;

use fbprobe_core::ports::{DeviceError, DeviceResult, FramebufferDevice, FramebufferOpener};
use fbprobe_core::{FixedScreenInfo, VariableScreenInfo};

/// Rejects every open with [`DeviceError::Unsupported`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedOpener;

impl UnsupportedOpener {
    pub const fn new() -> Self {
        Self
    }
}

/// Uninhabited: an [`UnsupportedOpener`] never produces a device.
#[derive(Debug)]
pub enum UnsupportedDevice {}

impl FramebufferDevice for UnsupportedDevice {
    fn query_variable(&self) -> DeviceResult<VariableScreenInfo> {
        match *self {}
    }

    fn query_fixed(&self) -> DeviceResult<FixedScreenInfo> {
        match *self {}
    }
}

impl FramebufferOpener for UnsupportedOpener {
    type Device = UnsupportedDevice;

    fn open(&self, _path: &Path) -> DeviceResult<UnsupportedDevice> {
        Err(DeviceError::Unsupported(std::env::consts::OS.to_string()))
    }
}
