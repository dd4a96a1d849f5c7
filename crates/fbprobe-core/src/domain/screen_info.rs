//! Screen parameter records reported by a framebuffer driver.
//!
//! These are plain data mirrors of what the kernel hands back from the two
//! screen-info queries. Adapters fill them in; nothing in fbprobe mutates
//! them afterwards.

use std::fmt;

use serde::Serialize;

/// One color component's position inside a pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ColorChannel {
    /// Bit offset of the component, counted from the least significant bit.
    pub offset: u32,
    /// Width of the component in bits.
    pub length: u32,
    /// `true` when the most significant bit sits on the right.
    pub msb_right: bool,
}

impl ColorChannel {
    pub const fn new(offset: u32, length: u32) -> Self {
        Self {
            offset,
            length,
            msb_right: false,
        }
    }
}

impl fmt::Display for ColorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.length, self.offset)?;
        if self.msb_right {
            write!(f, " (msb right)")?;
        }
        Ok(())
    }
}

/// Mutable display-mode parameters of a framebuffer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VariableScreenInfo {
    /// Visible horizontal resolution in pixels.
    pub xres: u32,
    /// Visible vertical resolution in pixels.
    pub yres: u32,
    pub xres_virtual: u32,
    pub yres_virtual: u32,
    pub xoffset: u32,
    pub yoffset: u32,
    /// Color depth.
    pub bits_per_pixel: u32,
    /// Non-zero for grayscale modes (or a FOURCC code on FOURCC devices).
    pub grayscale: u32,
    pub red: ColorChannel,
    pub green: ColorChannel,
    pub blue: ColorChannel,
    pub transp: ColorChannel,
    /// Non-zero when the pixel format is non-standard.
    pub nonstd: u32,
    pub activate: u32,
    /// Physical height of the picture in millimetres.
    pub height_mm: u32,
    /// Physical width of the picture in millimetres.
    pub width_mm: u32,
    /// Pixel clock in picoseconds.
    pub pixclock: u32,
    pub left_margin: u32,
    pub right_margin: u32,
    pub upper_margin: u32,
    pub lower_margin: u32,
    pub hsync_len: u32,
    pub vsync_len: u32,
    pub sync: u32,
    pub vmode: u32,
    /// Clockwise rotation in degrees.
    pub rotate: u32,
    pub colorspace: u32,
}

impl VariableScreenInfo {
    /// Visible resolution as `(width, height)`.
    pub const fn resolution(&self) -> (u32, u32) {
        (self.xres, self.yres)
    }

    /// Virtual resolution as `(width, height)`.
    pub const fn virtual_resolution(&self) -> (u32, u32) {
        (self.xres_virtual, self.yres_virtual)
    }

    /// Bytes needed to hold one pixel, rounded up.
    pub const fn bytes_per_pixel(&self) -> u32 {
        self.bits_per_pixel.div_ceil(8)
    }

    pub const fn is_grayscale(&self) -> bool {
        self.grayscale != 0
    }
}

/// Framebuffer memory layout as reported by `FB_TYPE_*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FramebufferType {
    PackedPixels,
    Planes,
    InterleavedPlanes,
    Text,
    VgaPlanes,
    Fourcc,
    Other(u32),
}

impl From<u32> for FramebufferType {
    fn from(raw: u32) -> Self {
        match raw {
            0 => Self::PackedPixels,
            1 => Self::Planes,
            2 => Self::InterleavedPlanes,
            3 => Self::Text,
            4 => Self::VgaPlanes,
            5 => Self::Fourcc,
            other => Self::Other(other),
        }
    }
}

impl fmt::Display for FramebufferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PackedPixels => f.write_str("packed pixels"),
            Self::Planes => f.write_str("planes"),
            Self::InterleavedPlanes => f.write_str("interleaved planes"),
            Self::Text => f.write_str("text"),
            Self::VgaPlanes => f.write_str("vga planes"),
            Self::Fourcc => f.write_str("fourcc"),
            Self::Other(raw) => write!(f, "unknown ({raw})"),
        }
    }
}

/// Pixel encoding class as reported by `FB_VISUAL_*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FramebufferVisual {
    /// Monochrome, 1 is black.
    Mono01,
    /// Monochrome, 1 is white.
    Mono10,
    TrueColor,
    PseudoColor,
    DirectColor,
    StaticPseudoColor,
    Fourcc,
    Other(u32),
}

impl From<u32> for FramebufferVisual {
    fn from(raw: u32) -> Self {
        match raw {
            0 => Self::Mono01,
            1 => Self::Mono10,
            2 => Self::TrueColor,
            3 => Self::PseudoColor,
            4 => Self::DirectColor,
            5 => Self::StaticPseudoColor,
            6 => Self::Fourcc,
            other => Self::Other(other),
        }
    }
}

impl fmt::Display for FramebufferVisual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mono01 => f.write_str("mono (1 = black)"),
            Self::Mono10 => f.write_str("mono (1 = white)"),
            Self::TrueColor => f.write_str("truecolor"),
            Self::PseudoColor => f.write_str("pseudocolor"),
            Self::DirectColor => f.write_str("directcolor"),
            Self::StaticPseudoColor => f.write_str("static pseudocolor"),
            Self::Fourcc => f.write_str("fourcc"),
            Self::Other(raw) => write!(f, "unknown ({raw})"),
        }
    }
}

/// Static parameters of the current framebuffer allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixedScreenInfo {
    /// Driver identification string.
    pub id: String,
    /// Physical start address of framebuffer memory.
    pub smem_start: u64,
    /// Total addressable framebuffer memory in bytes.
    pub smem_len: u32,
    pub fb_type: FramebufferType,
    pub type_aux: u32,
    pub visual: FramebufferVisual,
    /// Hardware horizontal panning step, zero when unsupported.
    pub xpanstep: u16,
    pub ypanstep: u16,
    pub ywrapstep: u16,
    /// Bytes per scan line.
    pub line_length: u32,
    pub mmio_start: u64,
    pub mmio_len: u32,
    /// Driver-specific acceleration id.
    pub accel: u32,
    pub capabilities: u16,
}

impl Default for FixedScreenInfo {
    fn default() -> Self {
        Self {
            id: String::new(),
            smem_start: 0,
            smem_len: 0,
            fb_type: FramebufferType::PackedPixels,
            type_aux: 0,
            visual: FramebufferVisual::TrueColor,
            xpanstep: 0,
            ypanstep: 0,
            ywrapstep: 0,
            line_length: 0,
            mmio_start: 0,
            mmio_len: 0,
            accel: 0,
            capabilities: 0,
        }
    }
}

impl FixedScreenInfo {
    /// Bytes occupied by one visible frame at the given mode.
    pub fn visible_frame_bytes(&self, var: &VariableScreenInfo) -> u64 {
        u64::from(self.line_length) * u64::from(var.yres)
    }

    /// How many whole visible frames fit in framebuffer memory.
    ///
    /// Returns 0 when the frame size is unknown (zero stride or height).
    pub fn buffer_count(&self, var: &VariableScreenInfo) -> u64 {
        let frame = self.visible_frame_bytes(var);
        if frame == 0 {
            return 0;
        }
        u64::from(self.smem_len) / frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode_1080p() -> VariableScreenInfo {
        VariableScreenInfo {
            xres: 1920,
            yres: 1080,
            xres_virtual: 1920,
            yres_virtual: 2160,
            bits_per_pixel: 32,
            red: ColorChannel::new(16, 8),
            green: ColorChannel::new(8, 8),
            blue: ColorChannel::new(0, 8),
            ..VariableScreenInfo::default()
        }
    }

    #[test]
    fn test_bytes_per_pixel_rounds_up() {
        let mut var = mode_1080p();
        assert_eq!(var.bytes_per_pixel(), 4);

        var.bits_per_pixel = 15;
        assert_eq!(var.bytes_per_pixel(), 2);

        var.bits_per_pixel = 1;
        assert_eq!(var.bytes_per_pixel(), 1);

        var.bits_per_pixel = 0;
        assert_eq!(var.bytes_per_pixel(), 0);
    }

    #[test]
    fn test_buffer_count_double_buffered() {
        let var = mode_1080p();
        let fix = FixedScreenInfo {
            smem_len: 1920 * 4 * 2160,
            line_length: 1920 * 4,
            ..FixedScreenInfo::default()
        };

        assert_eq!(fix.visible_frame_bytes(&var), 1920 * 4 * 1080);
        assert_eq!(fix.buffer_count(&var), 2);
    }

    #[test]
    fn test_buffer_count_zero_stride() {
        let var = mode_1080p();
        let fix = FixedScreenInfo {
            smem_len: 4096,
            ..FixedScreenInfo::default()
        };

        assert_eq!(fix.buffer_count(&var), 0);
    }

    #[test]
    fn test_type_and_visual_decoding() {
        assert_eq!(FramebufferType::from(0), FramebufferType::PackedPixels);
        assert_eq!(FramebufferType::from(5), FramebufferType::Fourcc);
        assert_eq!(FramebufferType::from(42), FramebufferType::Other(42));

        assert_eq!(FramebufferVisual::from(2), FramebufferVisual::TrueColor);
        assert_eq!(FramebufferVisual::from(3), FramebufferVisual::PseudoColor);
        assert_eq!(FramebufferVisual::from(9).to_string(), "unknown (9)");
    }

    #[test]
    fn test_color_channel_display() {
        assert_eq!(ColorChannel::new(16, 8).to_string(), "8@16");

        let channel = ColorChannel {
            msb_right: true,
            ..ColorChannel::new(0, 5)
        };
        assert_eq!(channel.to_string(), "5@0 (msb right)");
    }

    #[test]
    fn test_visual_serializes_snake_case() {
        let json = serde_json::to_string(&FramebufferVisual::TrueColor).unwrap();
        assert_eq!(json, "\"true_color\"");
    }
}
