//! Core data models for Pygrade
//!
//! These models represent per-file metrics reports and the aggregate
//! produced in directory mode.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Quality grade derived from the complexity score.
///
/// Band edges are inclusive on the lower bound: a score of 10 is still
/// an A, 11 is the first B.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Grade {
    #[default]
    A,
    B,
    C,
    D,
}

impl Grade {
    /// Pure step function of the complexity score.
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=10 => Grade::A,
            11..=20 => Grade::B,
            21..=30 => Grade::C,
            _ => Grade::D,
        }
    }

    /// Human-readable assessment shown next to the grade.
    pub fn assessment(&self) -> &'static str {
        match self {
            Grade::A => "Excellent - Low complexity",
            Grade::B => "Good - Moderate complexity",
            Grade::C => "Fair - Consider refactoring",
            Grade::D => "High complexity - Needs refactoring",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::A => write!(f, "A"),
            Grade::B => write!(f, "B"),
            Grade::C => write!(f, "C"),
            Grade::D => write!(f, "D"),
        }
    }
}

/// Metrics for a single analyzed file.
///
/// Created fresh per analysis and never mutated afterwards. Invariant:
/// `total_lines == code_lines + blank_lines + comment_lines`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MetricsReport {
    /// Path used for labeling only; analysis never depends on it
    pub path: PathBuf,
    pub total_lines: usize,
    pub code_lines: usize,
    pub blank_lines: usize,
    pub comment_lines: usize,
    pub class_count: usize,
    pub function_count: usize,
    pub import_count: usize,
    pub decision_points: usize,
    /// 1 + decision_points, never below 1
    pub complexity_score: u32,
    pub grade: Grade,
}

/// A file that directory mode could not analyze.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Aggregate report for directory mode.
///
/// Line and structure counts are summed across files. The batch grade is
/// worst-case: the highest per-file complexity score grades the whole
/// directory. Per-file reports keep their own grades.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DirectoryReport {
    pub root: PathBuf,
    /// Per-file reports, sorted by path
    pub files: Vec<MetricsReport>,
    pub skipped: Vec<SkippedFile>,
    pub total_lines: usize,
    pub code_lines: usize,
    pub blank_lines: usize,
    pub comment_lines: usize,
    pub class_count: usize,
    pub function_count: usize,
    pub import_count: usize,
    /// Highest per-file complexity score
    pub worst_score: u32,
    /// Grade of the worst-scoring file
    pub worst_grade: Grade,
}

impl DirectoryReport {
    /// Fold per-file reports into the batch aggregate. Reports must already
    /// be in their final (path-sorted) order.
    pub fn from_files(root: PathBuf, files: Vec<MetricsReport>, skipped: Vec<SkippedFile>) -> Self {
        let mut agg = DirectoryReport {
            root,
            worst_score: 1,
            worst_grade: Grade::A,
            ..Default::default()
        };

        for report in &files {
            agg.total_lines += report.total_lines;
            agg.code_lines += report.code_lines;
            agg.blank_lines += report.blank_lines;
            agg.comment_lines += report.comment_lines;
            agg.class_count += report.class_count;
            agg.function_count += report.function_count;
            agg.import_count += report.import_count;
            if report.complexity_score > agg.worst_score {
                agg.worst_score = report.complexity_score;
                agg.worst_grade = report.grade;
            }
        }

        agg.files = files;
        agg.skipped = skipped;
        agg
    }
}
