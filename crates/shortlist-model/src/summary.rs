//! Aggregate views of a shortlist, shaped for charting.

use serde::{Deserialize, Serialize};

use crate::{FilterCriteria, RankedCandidate};

/// Count of candidates sharing one label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
    /// Percentage of the counted candidates (0-100).
    pub share: f64,
}

/// One (experience, current_ctc) pair for an experience-vs-compensation plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub row_index: usize,
    pub experience: f64,
    pub current_ctc: f64,
}

/// One candidate's score, keyed by its original row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBar {
    pub row_index: usize,
    pub score: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShortlistSummary {
    pub candidate_count: usize,
    pub by_location: Vec<CategoryCount>,
    pub by_experience_level: Vec<CategoryCount>,
    pub experience_vs_ctc: Vec<ScatterPoint>,
    pub scores: Vec<ScoreBar>,
}

/// Serializable result of one scoring run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortlistReport {
    pub criteria: FilterCriteria,
    pub candidates: Vec<RankedCandidate>,
    pub summary: ShortlistSummary,
}
