use anyhow::{Context, Result};
use tracing::{info, warn};

use shortlist_cli::pipeline::{RankOutcome, inspect_columns, rank_file};

use crate::cli::{ColumnsArgs, OutputFormatArg, RankArgs};
use crate::summary::{print_columns, print_report};

/// Runs the `rank` command and returns the process exit code.
pub fn run_rank(args: &RankArgs) -> Result<i32> {
    let criteria = args.criteria();
    let mut report = match rank_file(&args.input, &criteria)? {
        RankOutcome::Ranked(report) => report,
        RankOutcome::MissingColumns(err) => {
            warn!(missing = ?err.missing_names(), "cannot score candidates");
            eprintln!("error: {err}");
            return Ok(1);
        }
    };

    if report.candidates.is_empty() {
        eprintln!("No candidates found.");
        return Ok(0);
    }
    info!(
        candidates = report.summary.candidate_count,
        locations = report.summary.by_location.len(),
        "report ready"
    );

    match args.format {
        OutputFormatArg::Table => print_report(&report, args.top, !args.no_summary),
        OutputFormatArg::Json => {
            if let Some(top) = args.top {
                report.candidates.truncate(top);
            }
            let json = serde_json::to_string_pretty(&report).context("serialize report")?;
            println!("{json}");
        }
    }
    Ok(0)
}

/// Runs the `columns` command and returns the process exit code.
pub fn run_columns(args: &ColumnsArgs) -> Result<i32> {
    let report = inspect_columns(&args.input)?;
    print_columns(&report);
    if report.missing.is_empty() {
        Ok(0)
    } else {
        Ok(1)
    }
}
