//! Ranking of a whole candidate table.

use std::time::Instant;

use shortlist_model::{
    CandidateRecord, CandidateTable, FilterCriteria, RankedCandidate, Shortlist,
};
use tracing::{debug, info, info_span, warn};

use crate::calculate::CriteriaMatcher;
use crate::classify::categorize_record;
use crate::error::Result;

/// Classifies and scores every candidate, then sorts by score descending.
///
/// The table must contain every required column; otherwise no candidate is
/// scored and the missing columns are returned. Candidates with equal scores
/// keep their original row order.
pub fn score_all_candidates(table: &CandidateTable, criteria: &FilterCriteria) -> Result<Shortlist> {
    let span = info_span!("score_all_candidates", rows = table.len());
    let _guard = span.enter();

    let records = table.records().inspect_err(|err| {
        warn!(missing = ?err.missing_names(), "refusing to score candidate table");
    })?;
    Ok(rank_records(records, criteria))
}

/// Classifies, scores and ranks already-typed records.
pub fn rank_records(records: Vec<CandidateRecord>, criteria: &FilterCriteria) -> Shortlist {
    let start = Instant::now();
    let matcher = CriteriaMatcher::new(criteria);

    let mut candidates: Vec<RankedCandidate> = records
        .into_iter()
        .map(|record| {
            let experience_level = categorize_record(&record);
            let breakdown = matcher.breakdown(&record);
            let score = breakdown.total();
            debug!(
                row = record.row_index,
                score,
                level = %experience_level,
                unparsed_terms = breakdown.unparsed_terms(),
                "scored candidate"
            );
            RankedCandidate {
                record,
                experience_level,
                score,
                breakdown,
            }
        })
        .collect();

    // sort_by is stable, so ties keep load order.
    candidates.sort_by(|a, b| b.score.cmp(&a.score));

    info!(
        candidates = candidates.len(),
        top_score = candidates.first().map(|c| c.score),
        duration_ms = start.elapsed().as_millis(),
        "scoring complete"
    );
    Shortlist::new(candidates)
}
