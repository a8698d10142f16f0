//! Pygrade - Python code complexity analyzer CLI
//!
//! Parses a Python file or directory with tree-sitter, tallies line and
//! structure metrics, and prints a graded complexity report.

use anyhow::Result;
use clap::Parser;
use pygrade::cli;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // Parse CLI args and run
    let cli = cli::Cli::parse();
    cli::run(cli)
}
