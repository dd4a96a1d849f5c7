//! JSON rendering of a completed probe.

use std::io::Write;

use fbprobe_core::ProbeReport;

use crate::error::CliError;

/// Write `report` as pretty-printed JSON followed by a newline.
pub fn write_report_json<W: Write>(mut out: W, report: &ProbeReport) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
