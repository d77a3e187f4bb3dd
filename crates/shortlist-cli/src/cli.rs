//! CLI argument definitions for the shortlisting tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use shortlist_model::FilterCriteria;

#[derive(Parser)]
#[command(
    name = "shortlist",
    version,
    about = "Resume Shortlisting - Score and rank candidates from a CSV dataset",
    long_about = "Score and rank candidates from a CSV resume dataset.\n\n\
                  Candidates earn fixed points for matching age, location, job title,\n\
                  minimum experience and minimum current CTC (100 points at most),\n\
                  and are listed highest score first."
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

    /// Allow candidate values (ages, locations, salaries) in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score every candidate in a CSV file and list them by score.
    Rank(RankArgs),

    /// Show a file's normalized columns and check the required ones.
    Columns(ColumnsArgs),
}

#[derive(Parser)]
pub struct RankArgs {
    /// Path to the candidate CSV file.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Age to match (compared as text).
    #[arg(long)]
    pub age: Option<String>,

    /// Location to match (case-insensitive; partial matches score less).
    #[arg(long)]
    pub location: Option<String>,

    /// Job title to match (case-insensitive).
    #[arg(long = "job-title")]
    pub job_title: Option<String>,

    /// Minimum years of experience.
    #[arg(long)]
    pub experience: Option<String>,

    /// Minimum current CTC.
    #[arg(long = "current-ctc")]
    pub current_ctc: Option<String>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Only list the N highest-scoring candidates.
    #[arg(long = "top", value_name = "N")]
    pub top: Option<usize>,

    /// Skip the distribution tables after the ranking.
    #[arg(long = "no-summary")]
    pub no_summary: bool,
}

impl RankArgs {
    /// Criteria as entered; options not given are empty text.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(
            self.age.clone().unwrap_or_default(),
            self.location.clone().unwrap_or_default(),
            self.job_title.clone().unwrap_or_default(),
            self.experience.clone().unwrap_or_default(),
            self.current_ctc.clone().unwrap_or_default(),
        )
    }
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// Path to the candidate CSV file.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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
