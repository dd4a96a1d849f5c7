//! Domain records for framebuffer probing.
//!
//! Pure data only: no I/O, no OS types.

mod report;
mod screen_info;

pub use report::ProbeReport;
pub use screen_info::{
    ColorChannel, FixedScreenInfo, FramebufferType, FramebufferVisual, VariableScreenInfo,
};
