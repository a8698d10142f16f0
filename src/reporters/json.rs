//! JSON reporter
//!
//! Outputs reports as pretty-printed JSON with the recommendation list
//! attached. Useful for machine consumption or piping to jq.

use crate::models::{DirectoryReport, MetricsReport};
use crate::scoring;
use anyhow::Result;

/// Render a single-file report as JSON
pub fn render_file(report: &MetricsReport) -> Result<String> {
    let mut value = serde_json::to_value(report)?;
    value["recommendations"] = serde_json::json!(scoring::recommendations(report));
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Render a directory-mode aggregate as JSON
pub fn render_directory(report: &DirectoryReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
