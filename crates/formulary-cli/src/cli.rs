//! CLI argument definitions for the formulary toolkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "formulary",
    version,
    about = "Formulary extraction toolkit - EML document to medication database",
    long_about = "Extract medication records from the South African Primary Healthcare\n\
                  STG/EML formulary document and integrate them into the TypeScript\n\
                  formulary service source."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Extract medication records from a formulary document into JSON.
    Extract(ExtractArgs),

    /// Integrate extracted records into the formulary service source.
    Integrate(IntegrateArgs),

    /// List the category and schedule keyword taxonomies.
    Taxonomy,
}

#[derive(Parser)]
pub struct ExtractArgs {
    /// Formulary document, or a directory to search for it.
    #[arg(value_name = "DOCUMENT")]
    pub source: PathBuf,

    /// Output JSON path (default: extracted-medications-2024.json next to
    /// the document).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct IntegrateArgs {
    /// Extracted medications JSON produced by `formulary extract`.
    #[arg(value_name = "EXTRACTED_JSON")]
    pub input: PathBuf,

    /// TypeScript source file containing the medication array.
    #[arg(value_name = "TARGET_FILE")]
    pub target: PathBuf,

    /// Declaration text identifying the destination array literal.
    #[arg(long = "marker", default_value = formulary_merge::DEFAULT_ARRAY_MARKER)]
    pub marker: String,

    /// Validate and report without rewriting the target file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
