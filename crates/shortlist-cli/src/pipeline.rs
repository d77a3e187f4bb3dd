//! Load → score → summarize, independent of how results are printed.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use shortlist_ingest::{read_candidate_csv, read_candidate_headers};
use shortlist_model::{FilterCriteria, RequiredColumn, SchemaError, ShortlistReport};
use shortlist_score::{ScoreError, build_report, score_all_candidates};

use crate::logging::redact_value;

/// Result of a ranking run that got as far as scoring.
#[derive(Debug)]
pub enum RankOutcome {
    Ranked(ShortlistReport),
    /// The table lacked required columns; nothing was scored.
    MissingColumns(SchemaError),
}

/// Header check for a candidate file.
#[derive(Debug, Clone)]
pub struct ColumnReport {
    pub raw: Vec<String>,
    pub normalized: Vec<String>,
    pub missing: Vec<RequiredColumn>,
}

impl ColumnReport {
    /// Required columns with their presence, in canonical order.
    pub fn required(&self) -> Vec<(RequiredColumn, bool)> {
        RequiredColumn::ALL
            .into_iter()
            .map(|column| (column, !self.missing.contains(&column)))
            .collect()
    }
}

/// Loads `path`, scores every candidate against `criteria` and builds the report.
///
/// # Errors
///
/// Returns an error when the file cannot be loaded. A table with missing
/// columns is not an error here; it is reported as
/// [`RankOutcome::MissingColumns`].
pub fn rank_file(path: &Path, criteria: &FilterCriteria) -> Result<RankOutcome> {
    let span = info_span!("rank", input = %path.display());
    let _guard = span.enter();
    debug!(
        age = redact_value(&criteria.age),
        location = redact_value(&criteria.location),
        job_title = redact_value(&criteria.job_title),
        min_experience = redact_value(&criteria.min_experience),
        min_current_ctc = redact_value(&criteria.min_current_ctc),
        "filter criteria"
    );

    let load_start = Instant::now();
    let table = read_candidate_csv(path)
        .with_context(|| format!("load candidates: {}", path.display()))?;
    info!(
        rows = table.len(),
        duration_ms = load_start.elapsed().as_millis(),
        "load complete"
    );

    match score_all_candidates(&table, criteria) {
        Ok(shortlist) => {
            if let Some(top) = shortlist.candidates.first() {
                debug!(
                    row = top.record.row_index,
                    score = top.score,
                    location = redact_value(&top.record.location),
                    "top candidate"
                );
            }
            Ok(RankOutcome::Ranked(build_report(criteria, &shortlist)))
        }
        Err(ScoreError::MissingColumns(err)) => Ok(RankOutcome::MissingColumns(err)),
    }
}

/// Reads the header row of `path` and checks it for the required columns.
pub fn inspect_columns(path: &Path) -> Result<ColumnReport> {
    let headers = read_candidate_headers(path)
        .with_context(|| format!("read headers: {}", path.display()))?;
    let missing = RequiredColumn::ALL
        .into_iter()
        .filter(|column| !headers.contains(column.as_str()))
        .collect();
    Ok(ColumnReport {
        raw: headers.raw,
        normalized: headers.columns,
        missing,
    })
}
