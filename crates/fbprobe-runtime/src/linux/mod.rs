//! Linux framebuffer adapter (`/dev/fbN`).

mod device;
mod ioctl;

pub use device::{LinuxFramebuffer, LinuxFramebufferOpener};
