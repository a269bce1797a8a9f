//! Output formatting for calculator results.
//!
//! This module handles formatting results for stdout:
//! - [`csv`] - CSV output formatting
//! - [`terminal`] - Terminal output with colors
//!
//! JSON output is the serde form of the result structs.

mod csv;
mod terminal;

use crate::config::OutputFormat;
use crate::models::{PrefixDescriptor, VlsmPlan};

pub use csv::{describe_csv, vlsm_csv};
pub use terminal::{describe_report, format_field, vlsm_report};

/// Render a single-prefix calculation in the requested format.
pub fn render_describe(
    d: &PrefixDescriptor,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(describe_report(d)),
        OutputFormat::Csv => Ok(describe_csv(d)),
        OutputFormat::Json => serde_json::to_string_pretty(d).map(|s| s + "\n"),
    }
}

/// Render a VLSM plan in the requested format.
pub fn render_vlsm(plan: &VlsmPlan, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(vlsm_report(plan)),
        OutputFormat::Csv => Ok(vlsm_csv(plan)),
        OutputFormat::Json => serde_json::to_string_pretty(plan).map(|s| s + "\n"),
    }
}
