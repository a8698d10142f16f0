//! Analyzer core
//!
//! Each analysis is a pure function of one file's text: line
//! classification, a single tree traversal for structure counts, then the
//! complexity score and grade. No state is shared or cached across files,
//! so analyses are independent and order-insensitive.

mod lines;

pub use lines::{classify_lines, CommentConfig, LineCounts};

use crate::models::{Grade, MetricsReport};
use crate::parsers::python;
use crate::scoring;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while analyzing a file
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("syntax error: {} cannot be parsed as Python", path.display())]
    Parse { path: PathBuf },

    #[error("failed to load the Python grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
}

/// Read a file from disk and analyze it.
pub fn analyze_file(path: &Path, config: &CommentConfig) -> Result<MetricsReport, AnalyzerError> {
    let source = std::fs::read_to_string(path).map_err(|source| AnalyzerError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    analyze_source(&source, path, config)
}

/// Analyze source text directly. `path` labels the report and never feeds
/// into the analysis itself.
pub fn analyze_source(
    source: &str,
    path: &Path,
    config: &CommentConfig,
) -> Result<MetricsReport, AnalyzerError> {
    let lines = classify_lines(source, config);
    let counts = python::count_structures(source, path)?;
    let complexity_score = scoring::complexity_score(counts.decision_points);

    Ok(MetricsReport {
        path: path.to_path_buf(),
        total_lines: lines.total,
        code_lines: lines.code,
        blank_lines: lines.blank,
        comment_lines: lines.comment,
        class_count: counts.classes,
        function_count: counts.functions,
        import_count: counts.imports,
        decision_points: counts.decision_points,
        complexity_score,
        grade: Grade::from_score(complexity_score),
    })
}
