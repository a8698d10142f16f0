//! Output reporters for analysis results
//!
//! Supports two output formats:
//! - `text` - Terminal output with ANSI colors
//! - `json` - Machine-readable JSON

mod json;
mod text;

use crate::models::{DirectoryReport, MetricsReport};
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render a single-file report in the specified format
pub fn render_file(report: &MetricsReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render_file(report),
        OutputFormat::Json => json::render_file(report),
    }
}

/// Render a directory-mode aggregate report in the specified format
pub fn render_directory(report: &DirectoryReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render_directory(report),
        OutputFormat::Json => json::render_directory(report),
    }
}
