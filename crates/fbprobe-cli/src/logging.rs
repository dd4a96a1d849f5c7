//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout carries only the report. Priority:
//! `RUST_LOG` env var > `--verbose` (debug) > default (warn).

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Fallback filter directive when `RUST_LOG` is unset.
pub const fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Install the global subscriber.
pub fn init(verbose: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| anyhow!(e))
        .context("failed to install tracing subscriber")
}
