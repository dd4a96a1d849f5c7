//! Port definitions (traits) implemented by adapter crates.

mod device;
mod probe_events;

pub use device::{DeviceError, DeviceResult, FramebufferDevice, FramebufferOpener};
pub use probe_events::{NoopEmitter, ProbeEvent, ProbeEventEmitter};
