//! Pygrade - Python code complexity analyzer
//!
//! A fast, local-first code quality tool that parses Python source with
//! tree-sitter, counts structural elements, approximates cyclomatic
//! complexity, and grades each file A through D.

pub mod analyzer;
pub mod cli;
pub mod models;
pub mod parsers;
pub mod reporters;
pub mod scoring;

pub use analyzer::{analyze_file, analyze_source, AnalyzerError, CommentConfig};
pub use models::{DirectoryReport, Grade, MetricsReport};
