//! Command-line argument definitions for `logsift`.
//!
//! Uses [`clap`] derive macros for argument parsing. The default action
//! classifies a whole log file (or stdin); the `convert` subcommand runs
//! the standalone timestamp converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Classify pasted log text, annotate epoch timestamps, and search the result.
///
/// Reads the whole input, assigns every non-empty line a category
/// (json, error, warn, info, debug, stackTrace, plain), and prints it
/// colorized with UTC/local descriptions next to epoch-like numbers.
#[derive(Debug, Parser)]
#[command(
    name = "logsift",
    version,
    about,
    long_about = None,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Log file to read. Reads stdin when omitted.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Control color output.
    ///
    /// `auto` enables colors only when stdout is a TTY and `NO_COLOR` is unset.
    #[arg(short = 'c', long, value_enum)]
    pub color: Option<ColorMode>,

    /// Only show lines whose original text contains this string (case-insensitive).
    #[arg(short = 's', long)]
    pub search: Option<String>,

    /// Output format.
    #[arg(short = 'o', long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Color theme for `--output html`.
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Do not print UTC/local descriptions next to epoch timestamps.
    #[arg(short = 'A', long)]
    pub no_annotations: bool,

    /// Label for the local time zone shown in annotations (e.g. `IST`).
    #[arg(long)]
    pub local_label: Option<String>,

    /// Fixed UTC offset for the local representation (e.g. `+05:30`).
    #[arg(long, allow_hyphen_values = true)]
    pub local_offset: Option<String>,

    /// Path to configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Show parse errors for lines that look like JSON but fail to parse.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Print a shell completion script and exit.
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert an epoch (seconds or milliseconds) or a date string to UTC and local time.
    ///
    /// All-digit values with 13 or more digits are milliseconds, shorter ones seconds.
    Convert {
        /// Value to convert; multiple words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        value: Vec<String>,
    },
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Enable colors only when stdout is a TTY.
    Auto,
    /// Always enable colors.
    Always,
    /// Never enable colors.
    Never,
}

/// How classified lines are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colorized terminal text.
    Text,
    /// Self-contained HTML document with hover annotations.
    Html,
    /// One JSON object per line.
    Json,
}

/// HTML color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    Dark,
    Light,
}
