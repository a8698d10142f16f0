//! Line classification
//!
//! A single pass over the source text buckets every line as blank,
//! comment, or code. Each line lands in exactly one bucket, so
//! `total == blank + comment + code` holds by construction.

use serde::{Deserialize, Serialize};

/// Comment syntax used for line classification.
///
/// The defaults match Python: `#` line comments plus triple-quoted
/// docstring blocks. A block span opens when a stripped line starts with a
/// delimiter that is not closed on the same line, and closes on the first
/// later line containing that delimiter. Both delimiter lines count as
/// comment lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentConfig {
    pub line_prefix: String,
    pub block_delimiters: Vec<String>,
}

impl Default for CommentConfig {
    fn default() -> Self {
        Self {
            line_prefix: "#".to_string(),
            block_delimiters: vec!["\"\"\"".to_string(), "'''".to_string()],
        }
    }
}

impl CommentConfig {
    /// Python defaults with a different single-line prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            line_prefix: prefix.into(),
            ..Default::default()
        }
    }
}

/// Per-category line tallies for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineCounts {
    pub total: usize,
    pub code: usize,
    pub blank: usize,
    pub comment: usize,
}

/// Classify every line of `source` in one pass.
///
/// `str::lines()` drives the split: a trailing line without a newline
/// terminator counts, the empty fragment after a final newline does not.
pub fn classify_lines(source: &str, config: &CommentConfig) -> LineCounts {
    let mut counts = LineCounts::default();
    // Delimiter of the block span we are inside, if any
    let mut in_block: Option<&str> = None;

    for line in source.lines() {
        counts.total += 1;
        let stripped = line.trim();

        if let Some(delim) = in_block {
            counts.comment += 1;
            if stripped.contains(delim) {
                in_block = None;
            }
            continue;
        }

        if stripped.is_empty() {
            counts.blank += 1;
        } else if stripped.starts_with(&config.line_prefix) {
            counts.comment += 1;
        } else if let Some(delim) = config
            .block_delimiters
            .iter()
            .find(|d| stripped.starts_with(d.as_str()))
        {
            counts.comment += 1;
            // Closed on the same line? e.g. """one-line docstring"""
            let rest = &stripped[delim.len()..];
            if !rest.contains(delim.as_str()) {
                in_block = Some(delim);
            }
        } else {
            counts.code += 1;
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(source: &str) -> LineCounts {
        classify_lines(source, &CommentConfig::default())
    }

    #[test]
    fn test_empty_source_has_no_lines() {
        assert_eq!(classify(""), LineCounts::default());
    }

    #[test]
    fn test_basic_classification() {
        let source = "import os\n\n# a comment\nx = 1\n";
        let counts = classify(source);
        assert_eq!(counts.total, 4);
        assert_eq!(counts.code, 2);
        assert_eq!(counts.blank, 1);
        assert_eq!(counts.comment, 1);
    }

    #[test]
    fn test_trailing_line_without_newline_counts() {
        let counts = classify("x = 1\ny = 2");
        assert_eq!(counts.total, 2);
        assert_eq!(counts.code, 2);
    }

    #[test]
    fn test_final_newline_adds_no_phantom_line() {
        assert_eq!(classify("x = 1\n").total, 1);
        assert_eq!(classify("\n").total, 1);
        assert_eq!(classify("\n").blank, 1);
    }

    #[test]
    fn test_whitespace_only_lines_are_blank() {
        let counts = classify("   \n\t\nx = 1\n");
        assert_eq!(counts.blank, 2);
        assert_eq!(counts.code, 1);
    }

    #[test]
    fn test_docstring_block_span() {
        let source = "\"\"\"\nModule docs.\nMore docs.\n\"\"\"\nx = 1\n";
        let counts = classify(source);
        assert_eq!(counts.comment, 4);
        assert_eq!(counts.code, 1);
        assert_eq!(counts.total, 5);
    }

    #[test]
    fn test_one_line_docstring_does_not_open_a_span() {
        let source = "\"\"\"one liner\"\"\"\nx = 1\n";
        let counts = classify(source);
        assert_eq!(counts.comment, 1);
        assert_eq!(counts.code, 1);
    }

    #[test]
    fn test_single_quote_delimiter() {
        let source = "'''\ndocs\n'''\n";
        assert_eq!(classify(source).comment, 3);
    }

    #[test]
    fn test_commented_out_code_counts_once() {
        let source = "# x = compute()\n";
        let counts = classify(source);
        assert_eq!(counts.comment, 1);
        assert_eq!(counts.total, 1);
    }

    #[test]
    fn test_custom_prefix() {
        let config = CommentConfig::with_prefix("//");
        let counts = classify_lines("// comment\n# not one here\n", &config);
        assert_eq!(counts.comment, 1);
        assert_eq!(counts.code, 1);
    }

    #[test]
    fn test_invariant_total_is_sum_of_buckets() {
        let sources = [
            "",
            "x = 1",
            "# only comments\n# here\n",
            "\"\"\"\nunterminated block\n",
            "\n\n\n",
            "import os\n\ndef f():\n    # inner\n    return 1\n",
        ];
        for source in sources {
            let c = classify(source);
            assert_eq!(c.total, c.code + c.blank + c.comment, "source: {source:?}");
        }
    }
}
