//! Core services.

mod probe;

pub use probe::FramebufferProbe;
