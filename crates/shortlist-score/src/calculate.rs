//! Match score calculation.
//!
//! Each criterion contributes an independent, fixed award; the score is their
//! sum. A numeric term whose value does not parse on either side contributes
//! nothing and is recorded as unparseable in the breakdown.

use shortlist_model::{
    CandidateRecord, FilterCriteria, LocationMatch, ScoreBreakdown, ThresholdOutcome,
};

/// Filter criteria prepared for repeated comparisons.
///
/// Lowercasing and numeric parsing happen once here instead of once per
/// candidate.
#[derive(Debug, Clone)]
pub struct CriteriaMatcher<'a> {
    age: &'a str,
    location: String,
    job_title: String,
    min_experience: Option<i64>,
    min_current_ctc: Option<f64>,
}

impl<'a> CriteriaMatcher<'a> {
    pub fn new(criteria: &'a FilterCriteria) -> Self {
        Self {
            age: &criteria.age,
            location: criteria.location.to_lowercase(),
            job_title: criteria.job_title.to_lowercase(),
            min_experience: criteria.min_experience_years(),
            min_current_ctc: criteria.min_current_ctc_amount(),
        }
    }

    /// Evaluates every term for one candidate.
    pub fn breakdown(&self, record: &CandidateRecord) -> ScoreBreakdown {
        ScoreBreakdown {
            // Text equality; "030" does not match "30".
            age_matched: record.age == self.age,
            location: location_match(&record.location.to_lowercase(), &self.location),
            job_title_matched: record.job_title.to_lowercase() == self.job_title,
            experience: ThresholdOutcome::compare(record.experience_years, self.min_experience),
            current_ctc: ThresholdOutcome::compare(
                record.current_ctc_amount,
                self.min_current_ctc,
            ),
        }
    }

    pub fn score(&self, record: &CandidateRecord) -> u32 {
        self.breakdown(record).total()
    }
}

/// Compares lowercased locations. An exact match wins over containment.
fn location_match(candidate: &str, filter: &str) -> LocationMatch {
    if candidate == filter {
        LocationMatch::Exact
    } else if candidate.contains(filter) {
        LocationMatch::Partial
    } else {
        LocationMatch::NoMatch
    }
}

/// Case-insensitive location comparison.
pub fn match_location(candidate: &str, filter: &str) -> LocationMatch {
    location_match(&candidate.to_lowercase(), &filter.to_lowercase())
}

/// Per-term outcome of scoring `record` against `criteria`.
pub fn score_breakdown(record: &CandidateRecord, criteria: &FilterCriteria) -> ScoreBreakdown {
    CriteriaMatcher::new(criteria).breakdown(record)
}

/// Match score of `record` against `criteria`, between 0 and 100.
pub fn calculate_score(record: &CandidateRecord, criteria: &FilterCriteria) -> u32 {
    score_breakdown(record, criteria).total()
}
