//! Report rendering for the CLI.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no device access
//! - Writers are generic so tests can render into a `Vec<u8>`

pub mod json;
pub mod text;

pub use json::write_report_json;
pub use text::{TextReporter, write_details};
