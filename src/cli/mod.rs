//! CLI command definitions and handlers

pub(crate) mod analyze;

use crate::analyzer::CommentConfig;
use crate::reporters::OutputFormat;
use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

/// Pygrade - Python code complexity analyzer
///
/// 100% LOCAL - No account needed. No data leaves your machine.
#[derive(Parser, Debug)]
#[command(name = "pygrade")]
#[command(
    version,
    about = "Analyze Python code quality — line metrics, structure counts, and a cyclomatic complexity grade per file",
    after_help = "\
Examples:
  pygrade my_script.py                 Analyze a single file
  pygrade ./my_project/                Analyze every Python file in a directory
  pygrade my_script.py --format json   JSON output for scripting

In directory mode unparseable files are skipped with a warning; the
aggregate covers only the files that analyzed cleanly."
)]
pub struct Cli {
    /// Path to a Python file or a directory of Python files
    pub path: PathBuf,

    /// Output format: text, json
    #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Single-line comment prefix used for line classification
    #[arg(long, default_value = "#")]
    pub comment_prefix: String,
}

/// Dispatch the parsed CLI to the right handler
pub fn run(cli: Cli) -> Result<()> {
    let format = OutputFormat::from_str(&cli.format)?;
    let config = CommentConfig::with_prefix(&cli.comment_prefix);

    if cli.path.is_file() {
        analyze::run_file(&cli.path, &config, format)
    } else if cli.path.is_dir() {
        analyze::run_directory(&cli.path, &config, format)
    } else {
        bail!("'{}' is not a valid file or directory", cli.path.display())
    }
}
