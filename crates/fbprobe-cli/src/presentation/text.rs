//! Human-readable rendering.
//!
//! [`TextReporter`] streams the five summary lines while the probe runs, so
//! a failed query still leaves the lines for the steps that succeeded.

use std::cell::RefCell;
use std::io::{self, Write};

use fbprobe_core::{
    FixedScreenInfo, ProbeEvent, ProbeEventEmitter, ProbeReport, VariableScreenInfo,
};

/// Prints probe progress as plain text lines.
pub struct TextReporter<W: Write> {
    out: RefCell<W>,
    error: RefCell<Option<io::Error>>,
}

impl<W: Write> TextReporter<W> {
    pub const fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
            error: RefCell::new(None),
        }
    }

    /// Return the writer, or the first write error seen while reporting.
    pub fn finish(self) -> io::Result<W> {
        if let Some(err) = self.error.into_inner() {
            return Err(err);
        }
        let mut out = self.out.into_inner();
        out.flush()?;
        Ok(out)
    }

    fn write_event(&self, event: ProbeEvent<'_>) -> io::Result<()> {
        let mut out = self.out.borrow_mut();
        match event {
            ProbeEvent::DeviceOpened { .. } => {
                writeln!(out, "Framebuffer device opened successfully")
            }
            ProbeEvent::VariableInfo(var) => write_variable(&mut *out, var),
            ProbeEvent::FixedInfo(fix) => write_fixed(&mut *out, fix),
        }
    }
}

impl<W: Write> ProbeEventEmitter for TextReporter<W> {
    fn emit(&self, event: ProbeEvent<'_>) {
        if self.error.borrow().is_some() {
            return;
        }
        if let Err(err) = self.write_event(event) {
            *self.error.borrow_mut() = Some(err);
        }
    }
}

fn write_variable<W: Write + ?Sized>(out: &mut W, var: &VariableScreenInfo) -> io::Result<()> {
    writeln!(out, "Framebuffer resolution: {}x{}", var.xres, var.yres)?;
    writeln!(out, "Bits per pixel: {}", var.bits_per_pixel)
}

fn write_fixed<W: Write + ?Sized>(out: &mut W, fix: &FixedScreenInfo) -> io::Result<()> {
    writeln!(out, "Framebuffer memory: {} bytes", fix.smem_len)?;
    writeln!(out, "Line length: {} bytes", fix.line_length)
}

/// Write the extended fields of a completed probe.
pub fn write_details<W: Write>(mut out: W, report: &ProbeReport) -> io::Result<()> {
    let var = &report.variable;
    let fix = &report.fixed;

    writeln!(out)?;
    writeln!(out, "Device: {}", report.device.display())?;
    if !fix.id.is_empty() {
        writeln!(out, "Driver id: {}", fix.id)?;
    }
    writeln!(out, "Type: {}", fix.fb_type)?;
    writeln!(out, "Visual: {}", fix.visual)?;

    let (vx, vy) = var.virtual_resolution();
    writeln!(out, "Virtual resolution: {vx}x{vy}")?;
    writeln!(out, "Offset: {}x{}", var.xoffset, var.yoffset)?;

    if var.is_grayscale() {
        writeln!(out, "Pixel format: grayscale")?;
    } else {
        writeln!(
            out,
            "Pixel format: red {} green {} blue {} transp {}",
            var.red, var.green, var.blue, var.transp
        )?;
    }
    if var.nonstd != 0 {
        writeln!(out, "Non-standard format: {:#x}", var.nonstd)?;
    }

    if var.width_mm != 0 && var.height_mm != 0 {
        writeln!(out, "Physical size: {}x{} mm", var.width_mm, var.height_mm)?;
    }
    if var.pixclock != 0 {
        writeln!(out, "Pixel clock: {} ps", var.pixclock)?;
    }
    if var.rotate != 0 {
        writeln!(out, "Rotation: {} degrees", var.rotate)?;
    }

    writeln!(
        out,
        "Pan step: x {} y {}, wrap step {}",
        fix.xpanstep, fix.ypanstep, fix.ywrapstep
    )?;
    writeln!(
        out,
        "Memory start: {:#x}, MMIO: {:#x} ({} bytes)",
        fix.smem_start, fix.mmio_start, fix.mmio_len
    )?;
    writeln!(
        out,
        "Visible frame: {} bytes, buffers: {}",
        fix.visible_frame_bytes(var),
        report.buffer_count()
    )?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fbprobe_core::{ColorChannel, FramebufferVisual};
    use std::path::PathBuf;

    fn sample_report() -> ProbeReport {
        ProbeReport {
            device: PathBuf::from("/dev/fb0"),
            variable: VariableScreenInfo {
                xres: 1024,
                yres: 768,
                xres_virtual: 1024,
                yres_virtual: 1536,
                bits_per_pixel: 16,
                red: ColorChannel::new(11, 5),
                green: ColorChannel::new(5, 6),
                blue: ColorChannel::new(0, 5),
                width_mm: 300,
                height_mm: 225,
                ..VariableScreenInfo::default()
            },
            fixed: FixedScreenInfo {
                id: "vesafb".to_string(),
                smem_len: 1024 * 2 * 1536,
                line_length: 1024 * 2,
                visual: FramebufferVisual::TrueColor,
                ..FixedScreenInfo::default()
            },
        }
    }

    fn stream(report: &ProbeReport) -> String {
        let reporter = TextReporter::new(Vec::new());
        reporter.emit(ProbeEvent::DeviceOpened {
            path: &report.device,
        });
        reporter.emit(ProbeEvent::VariableInfo(&report.variable));
        reporter.emit(ProbeEvent::FixedInfo(&report.fixed));
        String::from_utf8(reporter.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_summary_lines() {
        let out = stream(&sample_report());

        assert_eq!(
            out,
            "Framebuffer device opened successfully\n\
             Framebuffer resolution: 1024x768\n\
             Bits per pixel: 16\n\
             Framebuffer memory: 3145728 bytes\n\
             Line length: 2048 bytes\n"
        );
    }

    #[test]
    fn test_details_section() {
        let mut out = Vec::new();
        write_details(&mut out, &sample_report()).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("Driver id: vesafb"));
        assert!(out.contains("Visual: truecolor"));
        assert!(out.contains("Virtual resolution: 1024x1536"));
        assert!(out.contains("Pixel format: red 5@11 green 6@5 blue 5@0 transp 0@0"));
        assert!(out.contains("Physical size: 300x225 mm"));
        assert!(out.contains("buffers: 2"));
        assert!(!out.contains("Rotation"));
    }

    /// Fails every write.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_is_kept_until_finish() {
        let reporter = TextReporter::new(BrokenPipe);
        reporter.emit(ProbeEvent::VariableInfo(&VariableScreenInfo::default()));
        reporter.emit(ProbeEvent::FixedInfo(&FixedScreenInfo::default()));

        let err = reporter.finish().err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
