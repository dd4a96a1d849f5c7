//! Core domain types and ports for fbprobe.
//!
//! This crate is pure: it defines the screen-info records, the device ports
//! adapters implement, the probe error taxonomy, and the
//! [`FramebufferProbe`] service that sequences a probe run. OS access lives
//! in `fbprobe-runtime`.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    ColorChannel, FixedScreenInfo, FramebufferType, FramebufferVisual, ProbeReport,
    VariableScreenInfo,
};
pub use error::{ProbeError, ProbeResult};
pub use ports::{
    DeviceError, DeviceResult, FramebufferDevice, FramebufferOpener, NoopEmitter, ProbeEvent,
    ProbeEventEmitter,
};
pub use services::FramebufferProbe;

/// Primary framebuffer device node.
pub const DEFAULT_DEVICE_PATH: &str = "/dev/fb0";
