//! Analyze command implementation
//!
//! Single-file mode analyzes one file and fails hard on any error.
//! Directory mode walks the tree (gitignore-aware), analyzes every Python
//! file in parallel, and skips unparseable files with a warning so a batch
//! can still produce partial results.

use crate::analyzer::{analyze_file, CommentConfig};
use crate::models::{DirectoryReport, MetricsReport, SkippedFile};
use crate::reporters::{self, OutputFormat};

use anyhow::{bail, Result};
use console::style;
use ignore::WalkBuilder;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// File extensions analyzed in directory mode
const PYTHON_EXTENSIONS: &[&str] = &["py", "pyi"];

/// Analyze a single file; any error aborts with a non-zero exit.
pub(super) fn run_file(path: &Path, config: &CommentConfig, format: OutputFormat) -> Result<()> {
    let report = analyze_file(path, config)?;
    print!("{}", reporters::render_file(&report, format)?);
    Ok(())
}

/// Analyze every Python file under `root`, skipping failures.
pub(super) fn run_directory(root: &Path, config: &CommentConfig, format: OutputFormat) -> Result<()> {
    let files = collect_python_files(root)?;
    if files.is_empty() {
        bail!("no Python files found in '{}'", root.display());
    }

    let report = analyze_batch(root, &files, config);

    for skip in &report.skipped {
        tracing::warn!(path = %skip.path.display(), reason = %skip.reason, "skipping file");
        eprintln!(
            "{} skipping {}: {}",
            style("warning:").yellow().bold(),
            skip.path.display(),
            skip.reason
        );
    }

    if report.files.is_empty() {
        bail!(
            "no Python files in '{}' could be analyzed ({} skipped)",
            root.display(),
            report.skipped.len()
        );
    }

    print!("{}", reporters::render_directory(&report, format)?);
    Ok(())
}

/// Analyze a sorted file list in parallel and fold into the aggregate.
///
/// Input order is preserved through the parallel map, so the output is
/// deterministic regardless of scheduling.
pub fn analyze_batch(root: &Path, files: &[PathBuf], config: &CommentConfig) -> DirectoryReport {
    let results: Vec<(PathBuf, Result<MetricsReport, String>)> = files
        .par_iter()
        .map(|path| {
            let outcome = analyze_file(path, config).map_err(|e| e.to_string());
            (path.clone(), outcome)
        })
        .collect();

    let mut reports = Vec::new();
    let mut skipped = Vec::new();
    for (path, outcome) in results {
        match outcome {
            Ok(report) => reports.push(report),
            Err(reason) => skipped.push(SkippedFile { path, reason }),
        }
    }

    DirectoryReport::from_files(root.to_path_buf(), reports, skipped)
}

/// Discover Python files under `root`, gitignore-aware, sorted by path.
pub fn collect_python_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = WalkBuilder::new(root)
        .hidden(true)
        .git_ignore(true)
        .git_global(false)
        .git_exclude(true)
        .require_git(false)
        .build();

    for entry in walker.filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.is_file() {
            if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
                if PYTHON_EXTENSIONS.contains(&ext) {
                    files.push(path.to_path_buf());
                }
            }
        }
    }

    // Walk order varies between platforms; sorting keeps batch output stable
    files.sort();
    Ok(files)
}
