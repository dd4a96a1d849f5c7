//! OS adapters for fbprobe.
//!
//! Implements the `fbprobe-core` device ports on top of the host's
//! framebuffer interface. On Linux that is `/dev/fbN` plus the
//! `FBIOGET_*SCREENINFO` ioctls; other platforms get an opener that reports
//! the platform as unsupported.

#[cfg(target_os = "linux")]
pub mod linux;
mod unsupported;

#[cfg(target_os = "linux")]
pub use linux::{LinuxFramebuffer, LinuxFramebufferOpener};
pub use unsupported::{UnsupportedDevice, UnsupportedOpener};

/// Opener for the host platform.
#[cfg(target_os = "linux")]
pub type DefaultFramebufferOpener = LinuxFramebufferOpener;

/// Opener for the host platform.
#[cfg(not(target_os = "linux"))]
pub type DefaultFramebufferOpener = UnsupportedOpener;
