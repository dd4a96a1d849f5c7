//! CLI adapter for fbprobe.
//!
//! `main.rs` is the composition root: it parses arguments, installs logging,
//! picks the platform's device opener and hands off to [`handlers::probe`].

#![deny(unused_crate_dependencies)]

// Used only by main.rs and integration tests
use dotenvy as _;
use fbprobe_runtime as _;
#[cfg(test)]
use tempfile as _;

pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use error::CliError;
pub use handlers::probe::ProbeArgs;
pub use parser::{Cli, OutputFormat};
