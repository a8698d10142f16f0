//! Text (terminal) reporter with colors and formatting

use crate::models::{DirectoryReport, Grade, MetricsReport};
use crate::scoring;
use anyhow::Result;
use std::fmt::Write;

/// Grade colors (ANSI escape codes)
fn grade_color(grade: Grade) -> &'static str {
    match grade {
        Grade::A => "\x1b[32m", // Green
        Grade::B => "\x1b[92m", // Light green
        Grade::C => "\x1b[33m", // Yellow
        Grade::D => "\x1b[91m", // Light red
    }
}

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const RULE: &str = "──────────────────────────────────────────────────";

/// Render a single-file report as formatted terminal output
pub fn render_file(report: &MetricsReport) -> Result<String> {
    let mut out = String::new();

    // Banner
    writeln!(out, "\n{BOLD}Code Complexity Analysis{RESET}")?;
    writeln!(out, "{DIM}{RULE}{RESET}")?;
    writeln!(out, "File: {}\n", report.path.display())?;

    writeln!(out, "{BOLD}LINE METRICS{RESET}")?;
    writeln!(out, "  Total Lines:      {:>6}", report.total_lines)?;
    writeln!(out, "  Code Lines:       {:>6}", report.code_lines)?;
    writeln!(out, "  Blank Lines:      {:>6}", report.blank_lines)?;
    writeln!(out, "  Comment Lines:    {:>6}\n", report.comment_lines)?;

    writeln!(out, "{BOLD}STRUCTURE METRICS{RESET}")?;
    writeln!(out, "  Classes:          {:>6}", report.class_count)?;
    writeln!(out, "  Functions:        {:>6}", report.function_count)?;
    writeln!(out, "  Imports:          {:>6}\n", report.import_count)?;

    let grade_c = grade_color(report.grade);
    writeln!(out, "{BOLD}COMPLEXITY ANALYSIS{RESET}")?;
    writeln!(out, "  Complexity Score: {:>6}", report.complexity_score)?;
    writeln!(out, "  Quality Grade:    {grade_c}{BOLD}{:>6}{RESET}", report.grade)?;
    writeln!(out, "  Assessment:       {}\n", report.grade.assessment())?;

    writeln!(out, "{BOLD}RECOMMENDATIONS{RESET}")?;
    for rec in scoring::recommendations(report) {
        writeln!(out, "  • {rec}")?;
    }
    writeln!(out, "{DIM}{RULE}{RESET}")?;

    Ok(out)
}

/// Render a directory-mode aggregate as formatted terminal output
pub fn render_directory(report: &DirectoryReport) -> Result<String> {
    let mut out = String::new();

    writeln!(out, "\n{BOLD}Code Complexity Analysis{RESET}")?;
    writeln!(out, "{DIM}{RULE}{RESET}")?;
    writeln!(
        out,
        "Directory: {}  Files: {}  Skipped: {}\n",
        report.root.display(),
        report.files.len(),
        report.skipped.len()
    )?;

    if !report.files.is_empty() {
        writeln!(out, "{DIM}  GRADE  SCORE   LINES  FILE{RESET}")?;
        writeln!(out, "{DIM}  {RULE}{RESET}")?;
        for file in &report.files {
            let grade_c = grade_color(file.grade);
            writeln!(
                out,
                "  {grade_c}{BOLD}{:>5}{RESET}  {:>5}  {:>6}  {}",
                file.grade,
                file.complexity_score,
                file.total_lines,
                file.path.display()
            )?;
        }
        out.push('\n');
    }

    writeln!(out, "{BOLD}TOTALS{RESET}")?;
    writeln!(out, "  Total Lines:      {:>6}", report.total_lines)?;
    writeln!(out, "  Code Lines:       {:>6}", report.code_lines)?;
    writeln!(out, "  Blank Lines:      {:>6}", report.blank_lines)?;
    writeln!(out, "  Comment Lines:    {:>6}", report.comment_lines)?;
    writeln!(out, "  Classes:          {:>6}", report.class_count)?;
    writeln!(out, "  Functions:        {:>6}", report.function_count)?;
    writeln!(out, "  Imports:          {:>6}\n", report.import_count)?;

    let grade_c = grade_color(report.worst_grade);
    writeln!(out, "{BOLD}WORST CASE{RESET}")?;
    writeln!(out, "  Complexity Score: {:>6}", report.worst_score)?;
    writeln!(out, "  Quality Grade:    {grade_c}{BOLD}{:>6}{RESET}", report.worst_grade)?;
    writeln!(out, "  Assessment:       {}", report.worst_grade.assessment())?;

    if !report.skipped.is_empty() {
        writeln!(out, "\n{BOLD}SKIPPED{RESET}")?;
        for skip in &report.skipped {
            writeln!(out, "  {} ({})", skip.path.display(), skip.reason)?;
        }
    }
    writeln!(out, "{DIM}{RULE}{RESET}")?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SkippedFile;
    use crate::reporters::tests::test_report;
    use std::path::PathBuf;

    #[test]
    fn test_file_report_has_all_sections() {
        let out = render_file(&test_report()).expect("render");
        assert!(out.contains("Code Complexity Analysis"));
        assert!(out.contains("LINE METRICS"));
        assert!(out.contains("STRUCTURE METRICS"));
        assert!(out.contains("COMPLEXITY ANALYSIS"));
        assert!(out.contains("RECOMMENDATIONS"));
        assert!(out.contains("sample.py"));
        assert!(out.contains("Good - Moderate complexity"));
    }

    #[test]
    fn test_directory_report_lists_files_and_skips() {
        let agg = DirectoryReport::from_files(
            PathBuf::from("proj"),
            vec![test_report()],
            vec![SkippedFile {
                path: PathBuf::from("proj/bad.py"),
                reason: "syntax error".to_string(),
            }],
        );
        let out = render_directory(&agg).expect("render");
        assert!(out.contains("Files: 1"));
        assert!(out.contains("Skipped: 1"));
        assert!(out.contains("proj/bad.py"));
        assert!(out.contains("WORST CASE"));
    }
}
