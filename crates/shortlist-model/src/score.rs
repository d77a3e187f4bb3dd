//! Match scores and ranked candidates.
//!
//! A score is the sum of fixed partial awards, one per criterion. The
//! breakdown keeps the outcome of every term so callers can see why a
//! candidate scored what it did, including terms skipped on parse failure.

use serde::{Deserialize, Serialize};

use crate::{CandidateRecord, ExperienceLevel};

/// Award for an exact age match.
pub const AGE_AWARD: u32 = 10;
/// Award for a case-insensitive location match.
pub const LOCATION_EXACT_AWARD: u32 = 15;
/// Award when the filter location is contained in the candidate location.
pub const LOCATION_PARTIAL_AWARD: u32 = 5;
/// Award for a case-insensitive job title match.
pub const JOB_TITLE_AWARD: u32 = 25;
/// Award for meeting the minimum experience.
pub const EXPERIENCE_AWARD: u32 = 30;
/// Award for meeting the minimum current compensation.
pub const CURRENT_CTC_AWARD: u32 = 20;

/// Highest attainable score.
pub const MAX_SCORE: u32 =
    AGE_AWARD + LOCATION_EXACT_AWARD + JOB_TITLE_AWARD + EXPERIENCE_AWARD + CURRENT_CTC_AWARD;

/// Outcome of the location term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationMatch {
    Exact,
    Partial,
    NoMatch,
}

impl LocationMatch {
    pub fn points(self) -> u32 {
        match self {
            LocationMatch::Exact => LOCATION_EXACT_AWARD,
            LocationMatch::Partial => LOCATION_PARTIAL_AWARD,
            LocationMatch::NoMatch => 0,
        }
    }
}

/// Which side of a comparison failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSource {
    Candidate,
    Criteria,
}

/// Outcome of a minimum-threshold term (experience, compensation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdOutcome {
    Met,
    Below,
    /// The term was skipped; the candidate value is reported first when both fail.
    Unparseable(ValueSource),
}

impl ThresholdOutcome {
    /// Compares a candidate value against a minimum.
    pub fn compare<T: PartialOrd>(candidate: Option<T>, minimum: Option<T>) -> Self {
        match (candidate, minimum) {
            (None, _) => ThresholdOutcome::Unparseable(ValueSource::Candidate),
            (_, None) => ThresholdOutcome::Unparseable(ValueSource::Criteria),
            (Some(value), Some(minimum)) if value >= minimum => ThresholdOutcome::Met,
            (Some(_), Some(_)) => ThresholdOutcome::Below,
        }
    }

    pub fn is_met(self) -> bool {
        self == ThresholdOutcome::Met
    }

    pub fn is_unparseable(self) -> bool {
        matches!(self, ThresholdOutcome::Unparseable(_))
    }
}

/// Per-term outcome of scoring one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub age_matched: bool,
    pub location: LocationMatch,
    pub job_title_matched: bool,
    pub experience: ThresholdOutcome,
    pub current_ctc: ThresholdOutcome,
}

impl ScoreBreakdown {
    pub fn age_points(&self) -> u32 {
        if self.age_matched { AGE_AWARD } else { 0 }
    }

    pub fn location_points(&self) -> u32 {
        self.location.points()
    }

    pub fn job_title_points(&self) -> u32 {
        if self.job_title_matched {
            JOB_TITLE_AWARD
        } else {
            0
        }
    }

    pub fn experience_points(&self) -> u32 {
        if self.experience.is_met() {
            EXPERIENCE_AWARD
        } else {
            0
        }
    }

    pub fn current_ctc_points(&self) -> u32 {
        if self.current_ctc.is_met() {
            CURRENT_CTC_AWARD
        } else {
            0
        }
    }

    /// Sum of all partial awards.
    pub fn total(&self) -> u32 {
        self.age_points()
            + self.location_points()
            + self.job_title_points()
            + self.experience_points()
            + self.current_ctc_points()
    }

    /// Number of terms skipped because a value did not parse.
    pub fn unparsed_terms(&self) -> usize {
        [self.experience, self.current_ctc]
            .iter()
            .filter(|outcome| outcome.is_unparseable())
            .count()
    }
}

/// A candidate after classification and scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    #[serde(flatten)]
    pub record: CandidateRecord,
    pub experience_level: ExperienceLevel,
    pub score: u32,
    pub breakdown: ScoreBreakdown,
}

/// Candidates ordered by score, highest first.
///
/// Candidates with equal scores keep their load order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shortlist {
    pub candidates: Vec<RankedCandidate>,
}

impl Shortlist {
    pub fn new(candidates: Vec<RankedCandidate>) -> Self {
        Self { candidates }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// True when scoring produced no candidates ("no candidates found").
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedCandidate> {
        self.candidates.iter()
    }
}

impl<'a> IntoIterator for &'a Shortlist {
    type Item = &'a RankedCandidate;
    type IntoIter = std::slice::Iter<'a, RankedCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_score_is_one_hundred() {
        assert_eq!(MAX_SCORE, 100);
    }

    #[test]
    fn threshold_compare() {
        assert_eq!(
            ThresholdOutcome::compare(Some(5), Some(3)),
            ThresholdOutcome::Met
        );
        assert_eq!(
            ThresholdOutcome::compare(Some(3), Some(3)),
            ThresholdOutcome::Met
        );
        assert_eq!(
            ThresholdOutcome::compare(Some(2), Some(3)),
            ThresholdOutcome::Below
        );
        assert_eq!(
            ThresholdOutcome::compare::<i64>(None, None),
            ThresholdOutcome::Unparseable(ValueSource::Candidate)
        );
        assert_eq!(
            ThresholdOutcome::compare(Some(1.0), None),
            ThresholdOutcome::Unparseable(ValueSource::Criteria)
        );
    }

    #[test]
    fn nan_never_meets_a_minimum() {
        assert_eq!(
            ThresholdOutcome::compare(Some(f64::NAN), Some(0.0)),
            ThresholdOutcome::Below
        );
    }

    #[test]
    fn breakdown_total() {
        let breakdown = ScoreBreakdown {
            age_matched: true,
            location: LocationMatch::Partial,
            job_title_matched: false,
            experience: ThresholdOutcome::Met,
            current_ctc: ThresholdOutcome::Unparseable(ValueSource::Candidate),
        };
        assert_eq!(breakdown.total(), 10 + 5 + 30);
        assert_eq!(breakdown.unparsed_terms(), 1);
    }
}
