//! CLI argument definitions for the MCQ scorer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use mcq_model::DEFAULT_COMPLETENESS_THRESHOLD;

#[derive(Parser)]
#[command(
    name = "mcq-scorer",
    version,
    about = "MCQ survey scorer - sequence scores, completeness filter and k_geo",
    long_about = "Score multiple-choice questionnaire responses.\n\n\
                  Computes SmlSeq/MedSeq/LrgSeq for every respondent, keeps respondents\n\
                  whose completeness counters reach the threshold, and adds the geometric\n\
                  mean k_geo of SmlK/MedK/LrgK with its base-10 logarithm."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Allow respondent values in trace logs (redacted otherwise).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Process a survey CSV file and print the scored respondents as JSON.
    Process(ProcessArgs),

    /// List the questionnaire items of each subscale with their weights.
    Subscales,
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Survey CSV file with a header row.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Minimum value for SmlCon, MedCon and LrgCon.
    #[arg(long = "threshold", value_name = "N", default_value_t = DEFAULT_COMPLETENESS_THRESHOLD)]
    pub threshold: f64,

    /// Fail on zero, negative or non-numeric SmlK/MedK/LrgK.
    ///
    /// By default such rows are kept and their k_geo/log10_k_geo are emitted
    /// as null (or 0 for a zero magnitude).
    #[arg(long = "strict")]
    pub strict: bool,

    /// Print a run summary table to stderr.
    #[arg(long = "summary")]
    pub summary: bool,
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
