//! Data model for resume shortlisting.
//!
//! Candidate tables as loaded from CSV, the recruiter's filter criteria, and
//! the scored, ranked output. Scoring logic lives in `shortlist-score`.

pub mod columns;
pub mod criteria;
pub mod error;
pub mod experience;
pub mod score;
pub mod summary;
pub mod table;
pub mod values;

pub use columns::RequiredColumn;
pub use criteria::FilterCriteria;
pub use error::SchemaError;
pub use experience::ExperienceLevel;
pub use score::{
    AGE_AWARD, CURRENT_CTC_AWARD, EXPERIENCE_AWARD, JOB_TITLE_AWARD, LOCATION_EXACT_AWARD,
    LOCATION_PARTIAL_AWARD, LocationMatch, MAX_SCORE, RankedCandidate, ScoreBreakdown, Shortlist,
    ThresholdOutcome, ValueSource,
};
pub use summary::{CategoryCount, ScatterPoint, ScoreBar, ShortlistReport, ShortlistSummary};
pub use table::{CandidateRecord, CandidateTable};
pub use values::{format_numeric, parse_f64, parse_i64};
