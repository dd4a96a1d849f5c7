//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use fbprobe_core::DEFAULT_DEVICE_PATH;

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines, printed as each query completes
    Text,
    /// A single JSON document, printed only on success
    Json,
}

/// Command-line interface definition for the framebuffer probe.
#[derive(Debug, Parser)]
#[command(name = "fbprobe")]
#[command(about = "Print a framebuffer device's fixed and variable screen parameters")]
#[command(version)]
pub struct Cli {
    /// Framebuffer device node to query
    #[arg(short, long, env = "FBPROBE_DEVICE", default_value = DEFAULT_DEVICE_PATH)]
    pub device: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also print virtual resolution, pixel layout and driver details
    #[arg(long)]
    pub detailed: bool,

    /// Enable verbose/debug output on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        // Verify the CLI parser can be constructed
        Cli::command().debug_assert();
    }

    #[test]
    fn test_explicit_args() {
        let cli = Cli::parse_from([
            "fbprobe",
            "--device",
            "/dev/fb1",
            "--format",
            "json",
            "--detailed",
            "-v",
        ]);
        assert_eq!(cli.device, PathBuf::from("/dev/fb1"));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.detailed);
        assert!(cli.verbose);
    }

    #[test]
    fn test_rejects_unknown_format() {
        let result = Cli::try_parse_from(["fbprobe", "--format", "xml"]);
        assert!(result.is_err());
    }
}
