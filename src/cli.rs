use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::report::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "repo-gate")]
#[command(author, version, about = "Repository hygiene gate - structural checks for CI")]
#[command(long_about = "Walks a project tree and checks structural hygiene rules:\n\
    file and function size limits, banned file-name suffixes, UTF-8 encoding,\n\
    ignore-file completeness, credential-file pairing, stray temporary files\n\
    and directory layout.\n\n\
    Exit codes:\n  \
    0 - All checks passed\n  \
    1 - Violations found, or the project root does not exist\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Project root directory to scan
    pub root: PathBuf,

    /// Widen the scan from code files to all text-like files
    #[arg(long)]
    pub all_text_files: bool,

    /// Increase output verbosity (also list passing files)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the report; only the exit code remains
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Path to configuration file (default: <ROOT>/.repo-gate.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading any configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Maximum lines per file (overrides config)
    #[arg(long)]
    pub max_file_lines: Option<usize>,

    /// Maximum lines per function (overrides config)
    #[arg(long)]
    pub max_func_lines: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
