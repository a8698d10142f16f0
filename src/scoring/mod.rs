//! Complexity scoring and recommendations
//!
//! The complexity score approximates cyclomatic complexity: 1 plus the
//! number of decision points across the whole file. It is a plain integer
//! with no normalization by function count or line count, and grades
//! through the step function on [`crate::models::Grade`].
//!
//! Recommendations are independent rule checks over a finished report,
//! evaluated in a fixed order with no early exit. The positive
//! affirmation appears only when nothing else fired.

use crate::models::{Grade, MetricsReport};

/// Average function length (code lines per function) above which the
/// long-function recommendation fires.
const LONG_FUNCTION_THRESHOLD: usize = 30;

pub const REC_REDUCE_COMPLEXITY: &str =
    "Consider breaking down complex functions into smaller ones";
pub const REC_ADD_DOCS: &str = "Add more comments/docstrings for better documentation";
pub const REC_SPLIT_LONG_FUNCTIONS: &str =
    "Consider splitting long functions (average function length exceeds 30 lines)";
pub const REC_ORGANIZE_INTO_CLASSES: &str =
    "High number of functions - consider organizing into classes";
pub const REC_USE_CLASSES: &str = "Consider using classes for better code organization";
pub const REC_ALL_GOOD: &str = "Code looks good! Keep up the quality standards.";

/// 1 + decision points. Never below 1, monotonic in the decision count.
pub fn complexity_score(decision_points: usize) -> u32 {
    1 + decision_points as u32
}

/// Advisory strings for a report, in rule order. Zero rules firing yields
/// the single affirmation instead of an empty list.
pub fn recommendations(report: &MetricsReport) -> Vec<&'static str> {
    let mut recs = Vec::new();

    if matches!(report.grade, Grade::C | Grade::D) {
        recs.push(REC_REDUCE_COMPLEXITY);
    }

    // Ratio check only means something once there is code
    if report.code_lines > 0 && report.comment_lines * 10 < report.code_lines {
        recs.push(REC_ADD_DOCS);
    }

    if report.function_count > 0
        && report.code_lines / report.function_count > LONG_FUNCTION_THRESHOLD
    {
        recs.push(REC_SPLIT_LONG_FUNCTIONS);
    }

    if report.function_count > 30 {
        recs.push(REC_ORGANIZE_INTO_CLASSES);
    }

    if report.class_count == 0 && report.function_count > 10 {
        recs.push(REC_USE_CLASSES);
    }

    if recs.is_empty() {
        recs.push(REC_ALL_GOOD);
    }

    recs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn report() -> MetricsReport {
        MetricsReport {
            path: PathBuf::from("test.py"),
            total_lines: 24,
            code_lines: 20,
            blank_lines: 1,
            comment_lines: 3,
            class_count: 1,
            function_count: 2,
            import_count: 1,
            decision_points: 2,
            complexity_score: 3,
            grade: Grade::A,
        }
    }

    #[test]
    fn test_score_is_one_plus_decisions() {
        assert_eq!(complexity_score(0), 1);
        assert_eq!(complexity_score(1), 2);
        assert_eq!(complexity_score(25), 26);
    }

    #[test]
    fn test_score_monotonic() {
        for d in 0..100 {
            assert!(complexity_score(d + 1) > complexity_score(d));
        }
    }

    #[test]
    fn test_clean_report_gets_affirmation_only() {
        assert_eq!(recommendations(&report()), vec![REC_ALL_GOOD]);
    }

    #[test]
    fn test_affirmation_absent_when_any_rule_fires() {
        let mut r = report();
        r.comment_lines = 0;
        let recs = recommendations(&r);
        assert!(recs.contains(&REC_ADD_DOCS));
        assert!(!recs.contains(&REC_ALL_GOOD));
    }

    #[test]
    fn test_grade_c_triggers_complexity_rec() {
        let mut r = report();
        r.complexity_score = 25;
        r.grade = Grade::from_score(25);
        assert!(recommendations(&r).contains(&REC_REDUCE_COMPLEXITY));
    }

    #[test]
    fn test_doc_ratio_boundary() {
        let mut r = report();
        r.code_lines = 100;
        r.comment_lines = 10; // exactly 10%, does not fire
        assert!(!recommendations(&r).contains(&REC_ADD_DOCS));
        r.comment_lines = 9;
        assert!(recommendations(&r).contains(&REC_ADD_DOCS));
    }

    #[test]
    fn test_doc_rule_silent_for_empty_file() {
        let mut r = report();
        r.code_lines = 0;
        r.comment_lines = 0;
        assert!(!recommendations(&r).contains(&REC_ADD_DOCS));
    }

    #[test]
    fn test_long_function_average() {
        let mut r = report();
        r.code_lines = 62;
        r.function_count = 2; // average 31
        assert!(recommendations(&r).contains(&REC_SPLIT_LONG_FUNCTIONS));
        r.code_lines = 60; // average 30, does not fire
        assert!(!recommendations(&r).contains(&REC_SPLIT_LONG_FUNCTIONS));
    }

    #[test]
    fn test_class_organization_rules() {
        let mut r = report();
        r.function_count = 31;
        assert!(recommendations(&r).contains(&REC_ORGANIZE_INTO_CLASSES));

        let mut r = report();
        r.class_count = 0;
        r.function_count = 11;
        assert!(recommendations(&r).contains(&REC_USE_CLASSES));
        r.class_count = 1;
        assert!(!recommendations(&r).contains(&REC_USE_CLASSES));
    }

    #[test]
    fn test_rules_stack_in_fixed_order() {
        let mut r = report();
        r.complexity_score = 35;
        r.grade = Grade::from_score(35);
        r.code_lines = 400;
        r.comment_lines = 2;
        r.class_count = 0;
        r.function_count = 12;
        assert_eq!(
            recommendations(&r),
            vec![REC_REDUCE_COMPLEXITY, REC_ADD_DOCS, REC_SPLIT_LONG_FUNCTIONS, REC_USE_CLASSES]
        );
    }
}
