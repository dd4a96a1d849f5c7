//! Probe command handler.
//!
//! Runs a [`FramebufferProbe`] against the requested device and renders the
//! result in the requested format.

use std::io::Write;
use std::path::PathBuf;

use fbprobe_core::{FramebufferOpener, FramebufferProbe, NoopEmitter};
use tracing::debug;

use crate::error::CliError;
use crate::parser::{Cli, OutputFormat};
use crate::presentation::{TextReporter, write_details, write_report_json};

/// Arguments for the probe command.
#[derive(Debug, Clone)]
pub struct ProbeArgs {
    pub device: PathBuf,
    pub format: OutputFormat,
    pub detailed: bool,
}

impl From<&Cli> for ProbeArgs {
    fn from(cli: &Cli) -> Self {
        Self {
            device: cli.device.clone(),
            format: cli.format,
            detailed: cli.detailed,
        }
    }
}

/// Execute the probe command.
///
/// In text mode each line is written as soon as its query succeeds, so a
/// failure leaves the earlier lines in place. In JSON mode nothing is
/// written unless the whole probe succeeds.
pub fn execute<O, W>(opener: O, args: &ProbeArgs, out: W) -> Result<(), CliError>
where
    O: FramebufferOpener,
    W: Write,
{
    debug!(device = %args.device.display(), format = ?args.format, "Probing framebuffer");
    let probe = FramebufferProbe::new(opener);

    match args.format {
        OutputFormat::Text => {
            let reporter = TextReporter::new(out);
            let report = match probe.run(&args.device, &reporter) {
                Ok(report) => report,
                Err(err) => {
                    // The probe failure decides the exit code, not stdout.
                    let _ = reporter.finish();
                    return Err(err.into());
                }
            };
            let out = reporter.finish()?;
            if args.detailed {
                write_details(out, &report)?;
            }
        }
        OutputFormat::Json => {
            let report = probe.run(&args.device, &NoopEmitter)?;
            write_report_json(out, &report)?;
        }
    }

    Ok(())
}
