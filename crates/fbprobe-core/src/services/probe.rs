//! Framebuffer probe service.
//!
//! Runs the linear open → query variable → query fixed → release sequence
//! against any [`FramebufferOpener`]. The first failure ends the run.

use std::path::Path;

use tracing::debug;

use crate::domain::{FixedScreenInfo, ProbeReport, VariableScreenInfo};
use crate::error::{ProbeError, ProbeResult};
use crate::ports::{FramebufferDevice, FramebufferOpener, ProbeEvent, ProbeEventEmitter};

/// Queries a framebuffer device's screen parameters.
pub struct FramebufferProbe<O> {
    opener: O,
}

impl<O: FramebufferOpener> FramebufferProbe<O> {
    pub const fn new(opener: O) -> Self {
        Self { opener }
    }

    /// Probe the device at `path`, reporting each completed step to `emitter`.
    ///
    /// The device handle is owned by this call and dropped before it returns,
    /// on success and on every failure after a successful open.
    pub fn run(&self, path: &Path, emitter: &dyn ProbeEventEmitter) -> ProbeResult<ProbeReport> {
        let device = self.opener.open(path).map_err(|source| {
            debug!(device = %path.display(), error = %source, "Failed to open framebuffer");
            ProbeError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;
        debug!(device = %path.display(), "Framebuffer opened");
        emitter.emit(ProbeEvent::DeviceOpened { path });

        let result = Self::query(&device, emitter);
        // Adapters log the release when the handle drops.
        drop(device);

        let (variable, fixed) = result?;
        Ok(ProbeReport {
            device: path.to_path_buf(),
            variable,
            fixed,
        })
    }

    fn query(
        device: &O::Device,
        emitter: &dyn ProbeEventEmitter,
    ) -> ProbeResult<(VariableScreenInfo, FixedScreenInfo)> {
        let variable = device.query_variable().map_err(|e| {
            debug!(error = %e, "Variable screen query failed");
            ProbeError::VariableInfo(e)
        })?;
        debug!(
            xres = variable.xres,
            yres = variable.yres,
            bpp = variable.bits_per_pixel,
            "Variable screen info"
        );
        emitter.emit(ProbeEvent::VariableInfo(&variable));

        let fixed = device.query_fixed().map_err(|e| {
            debug!(error = %e, "Fixed screen query failed");
            ProbeError::FixedInfo(e)
        })?;
        debug!(
            id = %fixed.id,
            smem_len = fixed.smem_len,
            line_length = fixed.line_length,
            "Fixed screen info"
        );
        emitter.emit(ProbeEvent::FixedInfo(&fixed));

        Ok((variable, fixed))
    }
}
