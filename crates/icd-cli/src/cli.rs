//! CLI argument definitions for the Diagnosis Code Analyzer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "icd-analyzer",
    version,
    about = "Diagnosis Code Analyzer - filter datasets by ICD-11 code range",
    long_about = "Filter a tabular dataset by an alphanumeric diagnosis-code range.\n\n\
                  Accepts .xlsx, .csv, and line-oriented .txt files, reports the\n\
                  ICD-11 chapter containing the range, and exports the matching rows."
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
    /// Filter one dataset by a diagnosis-code range and export the matches.
    Analyze(AnalyzeArgs),

    /// List the predefined ICD-11 chapter ranges.
    Categories,

    /// Process submissions interactively until end of input.
    Session,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Dataset file to analyze (.xlsx, .csv, or .txt).
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Start of the diagnosis-code range (e.g. 1A00).
    #[arg(long, short = 's', value_name = "CODE")]
    pub start: String,

    /// End of the diagnosis-code range (e.g. 1H0Z).
    #[arg(long, short = 'e', value_name = "CODE")]
    pub end: String,

    /// Where to write the filtered rows (default: filtered_diagnosis.csv
    /// next to the dataset).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Classify and count without writing the filtered file.
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
