//! `/dev/fbN` device handle.

use std::fs::{File, OpenOptions};
use std::os::fd::AsFd;
use std::path::{Path, PathBuf};

use fbprobe_core::ports::{DeviceResult, FramebufferDevice, FramebufferOpener};
use fbprobe_core::{FixedScreenInfo, VariableScreenInfo};
use tracing::debug;

use super::ioctl;

/// An open Linux framebuffer device node.
///
/// The file descriptor is closed when this value is dropped.
#[derive(Debug)]
pub struct LinuxFramebuffer {
    file: File,
    path: PathBuf,
}

impl LinuxFramebuffer {
    /// Open `path` for reading and writing.
    pub fn open(path: &Path) -> DeviceResult<Self> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Device node this handle was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FramebufferDevice for LinuxFramebuffer {
    fn query_variable(&self) -> DeviceResult<VariableScreenInfo> {
        Ok(ioctl::read_variable(self.file.as_fd())?)
    }

    fn query_fixed(&self) -> DeviceResult<FixedScreenInfo> {
        Ok(ioctl::read_fixed(self.file.as_fd())?)
    }
}

impl Drop for LinuxFramebuffer {
    fn drop(&mut self) {
        debug!(device = %self.path.display(), "Framebuffer released");
    }
}

/// Opens `/dev/fbN` nodes as [`LinuxFramebuffer`] handles.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinuxFramebufferOpener;

impl LinuxFramebufferOpener {
    pub const fn new() -> Self {
        Self
    }
}

impl FramebufferOpener for LinuxFramebufferOpener {
    type Device = LinuxFramebuffer;

    fn open(&self, path: &Path) -> DeviceResult<LinuxFramebuffer> {
        LinuxFramebuffer::open(path)
    }
}
