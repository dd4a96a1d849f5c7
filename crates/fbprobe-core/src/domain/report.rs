//! Result of a completed probe run.

use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

use super::screen_info::{FixedScreenInfo, VariableScreenInfo};

/// Everything a successful probe learned about one device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    /// Device node that was queried. Serialized lossily: device paths need
    /// not be UTF-8.
    #[serde(serialize_with = "serialize_path_lossy")]
    pub device: PathBuf,
    /// Variable screen parameters.
    pub variable: VariableScreenInfo,
    /// Fixed screen parameters.
    pub fixed: FixedScreenInfo,
}

impl ProbeReport {
    /// Number of whole visible frames that fit in framebuffer memory.
    pub fn buffer_count(&self) -> u64 {
        self.fixed.buffer_count(&self.variable)
    }
}

fn serialize_path_lossy<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_for(device: PathBuf) -> ProbeReport {
        ProbeReport {
            device,
            variable: VariableScreenInfo::default(),
            fixed: FixedScreenInfo::default(),
        }
    }

    #[test]
    fn test_device_serializes_as_string() {
        let value = serde_json::to_value(report_for(PathBuf::from("/dev/fb1"))).unwrap();
        assert_eq!(value["device"], "/dev/fb1");
    }

    #[test]
    #[cfg(unix)]
    fn test_non_utf8_device_still_serializes() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let device = PathBuf::from(OsStr::from_bytes(b"/dev/fb\xff"));
        let value = serde_json::to_value(report_for(device)).unwrap();

        assert_eq!(value["device"], "/dev/fb\u{fffd}");
    }
}
