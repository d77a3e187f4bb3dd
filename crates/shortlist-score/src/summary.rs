//! Aggregates over a ranked shortlist.
//!
//! These back the distribution and correlation views: candidate counts per
//! location and per experience level with their percentage shares, the
//! experience-vs-compensation pairs, and the score of every candidate.

use std::collections::BTreeMap;

use shortlist_model::{
    CategoryCount, FilterCriteria, ScatterPoint, ScoreBar, Shortlist, ShortlistReport,
    ShortlistSummary, parse_f64,
};

/// Candidate counts per location, most common first.
///
/// Locations are counted exactly as written (case-sensitive). Blank
/// locations are not counted.
pub fn location_distribution(shortlist: &Shortlist) -> Vec<CategoryCount> {
    count_labels(
        shortlist
            .iter()
            .map(|c| c.record.location.as_str())
            .filter(|location| !location.trim().is_empty()),
    )
}

/// Candidate counts per experience level, most common first.
pub fn experience_distribution(shortlist: &Shortlist) -> Vec<CategoryCount> {
    count_labels(shortlist.iter().map(|c| c.experience_level.as_str()))
}

/// Experience and compensation pairs for every candidate where both are numeric.
///
/// Experience is read as a decimal here, so "2.5" years is plotted even
/// though it does not classify.
pub fn experience_ctc_points(shortlist: &Shortlist) -> Vec<ScatterPoint> {
    shortlist
        .iter()
        .filter_map(|c| {
            let experience = parse_f64(&c.record.experience)?;
            let current_ctc = c.record.current_ctc_amount?;
            Some(ScatterPoint {
                row_index: c.record.row_index,
                experience,
                current_ctc,
            })
        })
        .collect()
}

/// Score of every candidate in ranked order.
pub fn score_distribution(shortlist: &Shortlist) -> Vec<ScoreBar> {
    shortlist
        .iter()
        .map(|c| ScoreBar {
            row_index: c.record.row_index,
            score: c.score,
        })
        .collect()
}

pub fn summarize(shortlist: &Shortlist) -> ShortlistSummary {
    ShortlistSummary {
        candidate_count: shortlist.len(),
        by_location: location_distribution(shortlist),
        by_experience_level: experience_distribution(shortlist),
        experience_vs_ctc: experience_ctc_points(shortlist),
        scores: score_distribution(shortlist),
    }
}

/// Bundles criteria, ranked candidates and their summary.
pub fn build_report(criteria: &FilterCriteria, shortlist: &Shortlist) -> ShortlistReport {
    ShortlistReport {
        criteria: criteria.clone(),
        candidates: shortlist.candidates.clone(),
        summary: summarize(shortlist),
    }
}

/// Counts labels, ordering by count descending and then by first appearance.
fn count_labels<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for (seen, label) in labels.enumerate() {
        counts.entry(label).or_insert((seen, 0)).1 += 1;
    }
    let total: usize = counts.values().map(|(_, count)| count).sum();

    let mut ordered: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(label, (first_seen, count))| (label, first_seen, count))
        .collect();
    ordered.sort_by(|a, b| b.2.cmp(&a.2).then(a.1.cmp(&b.1)));

    ordered
        .into_iter()
        .map(|(label, _, count)| CategoryCount {
            label: label.to_string(),
            count,
            share: count as f64 * 100.0 / total as f64,
        })
        .collect()
}
