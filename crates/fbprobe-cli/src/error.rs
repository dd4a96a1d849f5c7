//! CLI-specific error types and exit-code mapping.

use fbprobe_core::ProbeError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The probe itself failed (open or either query).
    #[error(transparent)]
    Probe(#[from] ProbeError),

    /// Writing the report failed.
    #[error("Output error: {0}")]
    Output(String),

    /// The log subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),
}

impl CliError {
    /// Map error to the process exit code.
    ///
    /// - 1: probe failure (device open, variable query, fixed query)
    /// - 70: internal setup failure (`EX_SOFTWARE`)
    /// - 74: output failure (`EX_IOERR`)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Probe(_) => 1,
            Self::Logging(_) => 70,
            Self::Output(_) => 74,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Output(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        Self::Logging(format!("{err:#}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fbprobe_core::DeviceError;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_probe_failures_exit_with_one() {
        let errors = [
            ProbeError::Open {
                path: PathBuf::from("/dev/fb0"),
                source: DeviceError::Io(io::Error::from_raw_os_error(13)),
            },
            ProbeError::VariableInfo(DeviceError::Io(io::Error::from_raw_os_error(25))),
            ProbeError::FixedInfo(DeviceError::Io(io::Error::from_raw_os_error(22))),
        ];

        for err in errors {
            assert_eq!(CliError::from(err).exit_code(), 1);
        }
    }

    #[test]
    fn test_probe_message_is_passed_through() {
        let err = CliError::from(ProbeError::VariableInfo(DeviceError::Unsupported(
            "windows".into(),
        )));
        assert_eq!(
            err.to_string(),
            "Error reading variable information: framebuffer devices are not supported on windows"
        );
    }

    #[test]
    fn test_other_exit_codes() {
        let err = CliError::from(io::Error::from(io::ErrorKind::BrokenPipe));
        assert_eq!(err.exit_code(), 74);

        let err = CliError::from(anyhow::anyhow!("subscriber already set"));
        assert_eq!(err.exit_code(), 70);
        assert_eq!(err.to_string(), "Logging error: subscriber already set");
    }
}
