//! Raw `linux/fb.h` records and the two screen-info ioctls.
//!
//! The `Raw*` structs mirror the kernel ABI field for field and must stay
//! `#[repr(C)]`. Everything above this module sees only the safe wrappers
//! and the domain records they convert into.

#![allow(unsafe_code)]

use std::io;
use std::os::fd::{AsRawFd, BorrowedFd};
use std::os::raw::c_ulong;

use fbprobe_core::{
    ColorChannel, FixedScreenInfo, FramebufferType, FramebufferVisual, VariableScreenInfo,
};
use nix::ioctl_read_bad;

const FBIOGET_VSCREENINFO: u16 = 0x4600;
const FBIOGET_FSCREENINFO: u16 = 0x4602;

/// `struct fb_bitfield`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct RawBitfield {
    pub offset: u32,
    pub length: u32,
    pub msb_right: u32,
}

/// `struct fb_var_screeninfo`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct RawVarScreenInfo {
    pub xres: u32,
    pub yres: u32,
    pub xres_virtual: u32,
    pub yres_virtual: u32,
    pub xoffset: u32,
    pub yoffset: u32,
    pub bits_per_pixel: u32,
    pub grayscale: u32,
    pub red: RawBitfield,
    pub green: RawBitfield,
    pub blue: RawBitfield,
    pub transp: RawBitfield,
    pub nonstd: u32,
    pub activate: u32,
    pub height: u32,
    pub width: u32,
    #[allow(dead_code)]
    pub accel_flags: u32,
    pub pixclock: u32,
    pub left_margin: u32,
    pub right_margin: u32,
    pub upper_margin: u32,
    pub lower_margin: u32,
    pub hsync_len: u32,
    pub vsync_len: u32,
    pub sync: u32,
    pub vmode: u32,
    pub rotate: u32,
    pub colorspace: u32,
    #[allow(dead_code)]
    pub reserved: [u32; 4],
}

/// `struct fb_fix_screeninfo`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct RawFixScreenInfo {
    pub id: [u8; 16],
    pub smem_start: c_ulong,
    pub smem_len: u32,
    pub type_: u32,
    pub type_aux: u32,
    pub visual: u32,
    pub xpanstep: u16,
    pub ypanstep: u16,
    pub ywrapstep: u16,
    pub line_length: u32,
    pub mmio_start: c_ulong,
    pub mmio_len: u32,
    pub accel: u32,
    pub capabilities: u16,
    #[allow(dead_code)]
    pub reserved: [u16; 2],
}

ioctl_read_bad!(fbioget_vscreeninfo, FBIOGET_VSCREENINFO, RawVarScreenInfo);
ioctl_read_bad!(fbioget_fscreeninfo, FBIOGET_FSCREENINFO, RawFixScreenInfo);

/// Issue `FBIOGET_VSCREENINFO` on `fd`.
pub(super) fn read_variable(fd: BorrowedFd<'_>) -> io::Result<VariableScreenInfo> {
    let mut info = RawVarScreenInfo::default();
    // SAFETY: `fd` is borrowed from an open file for the whole call and `info`
    // is a writable, correctly laid out `fb_var_screeninfo`.
    unsafe { fbioget_vscreeninfo(fd.as_raw_fd(), &mut info) }?;
    Ok(info.into_domain())
}

/// Issue `FBIOGET_FSCREENINFO` on `fd`.
pub(super) fn read_fixed(fd: BorrowedFd<'_>) -> io::Result<FixedScreenInfo> {
    let mut info = RawFixScreenInfo::default();
    // SAFETY: as in `read_variable`, for `fb_fix_screeninfo`.
    unsafe { fbioget_fscreeninfo(fd.as_raw_fd(), &mut info) }?;
    Ok(info.into_domain())
}

impl RawBitfield {
    const fn into_domain(self) -> ColorChannel {
        ColorChannel {
            offset: self.offset,
            length: self.length,
            msb_right: self.msb_right != 0,
        }
    }
}

impl RawVarScreenInfo {
    const fn into_domain(self) -> VariableScreenInfo {
        VariableScreenInfo {
            xres: self.xres,
            yres: self.yres,
            xres_virtual: self.xres_virtual,
            yres_virtual: self.yres_virtual,
            xoffset: self.xoffset,
            yoffset: self.yoffset,
            bits_per_pixel: self.bits_per_pixel,
            grayscale: self.grayscale,
            red: self.red.into_domain(),
            green: self.green.into_domain(),
            blue: self.blue.into_domain(),
            transp: self.transp.into_domain(),
            nonstd: self.nonstd,
            activate: self.activate,
            height_mm: self.height,
            width_mm: self.width,
            pixclock: self.pixclock,
            left_margin: self.left_margin,
            right_margin: self.right_margin,
            upper_margin: self.upper_margin,
            lower_margin: self.lower_margin,
            hsync_len: self.hsync_len,
            vsync_len: self.vsync_len,
            sync: self.sync,
            vmode: self.vmode,
            rotate: self.rotate,
            colorspace: self.colorspace,
        }
    }
}

impl RawFixScreenInfo {
    fn into_domain(self) -> FixedScreenInfo {
        FixedScreenInfo {
            id: decode_id(&self.id),
            smem_start: u64::from(self.smem_start),
            smem_len: self.smem_len,
            fb_type: FramebufferType::from(self.type_),
            type_aux: self.type_aux,
            visual: FramebufferVisual::from(self.visual),
            xpanstep: self.xpanstep,
            ypanstep: self.ypanstep,
            ywrapstep: self.ywrapstep,
            line_length: self.line_length,
            mmio_start: u64::from(self.mmio_start),
            mmio_len: self.mmio_len,
            accel: self.accel,
            capabilities: self.capabilities,
        }
    }
}

/// Driver ids are NUL-padded and not always NUL-terminated.
fn decode_id(raw: &[u8]) -> String {
    let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    String::from_utf8_lossy(&raw[..end]).trim_end().to_string()
}
