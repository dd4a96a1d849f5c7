//! Progress events emitted while a probe runs.
//!
//! The probe service reports each step as it completes so adapters can
//! stream output in the same order the device answered.

use std::path::Path;

use crate::domain::{FixedScreenInfo, VariableScreenInfo};

/// A single step of a probe run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeEvent<'a> {
    /// The device node was acquired.
    DeviceOpened { path: &'a Path },
    /// The variable screen query succeeded.
    VariableInfo(&'a VariableScreenInfo),
    /// The fixed screen query succeeded.
    FixedInfo(&'a FixedScreenInfo),
}

/// Receives probe progress events.
///
/// # Implementations
///
/// - `NoopEmitter` - For callers that only want the final report
/// - Adapter-specific implementations (text output in fbprobe-cli)
pub trait ProbeEventEmitter {
    /// Handle one event. Must not fail; adapters that can fail record the
    /// error and surface it after the run.
    fn emit(&self, event: ProbeEvent<'_>);
}

/// Discards all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEmitter;

impl NoopEmitter {
    /// Create a new no-op emitter.
    pub const fn new() -> Self {
        Self
    }
}

impl ProbeEventEmitter for NoopEmitter {
    fn emit(&self, _event: ProbeEvent<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_emitter() {
        let emitter = NoopEmitter::new();

        // Should not panic
        emitter.emit(ProbeEvent::DeviceOpened {
            path: Path::new("/dev/fb0"),
        });
        emitter.emit(ProbeEvent::VariableInfo(&VariableScreenInfo::default()));
    }
}
