//! Rendering of estimation results.
//!
//! - [`json`]: compact and pretty JSON via serde
//! - [`terminal`]: human-readable, colored text

pub mod json;
pub mod terminal;

pub use json::{to_json, to_json_pretty};
pub use terminal::{format_replicates, format_result};
