//! Resume scoring and ranking.
//!
//! The core of the shortlisting tool:
//!
//! - [`categorize_experience`] buckets years of experience into a level
//! - [`calculate_score`] sums fixed awards for each matching criterion
//! - [`score_all_candidates`] checks the table schema, scores every
//!   candidate and ranks them by score
//!
//! Everything here is a pure function of its inputs. The only error is a
//! table missing required columns.

pub mod calculate;
pub mod classify;
pub mod error;
pub mod rank;
pub mod summary;

pub use calculate::{CriteriaMatcher, calculate_score, match_location, score_breakdown};
pub use classify::{categorize_experience, categorize_record, categorize_years};
pub use error::{Result, ScoreError};
pub use rank::{rank_records, score_all_candidates};
pub use summary::{
    build_report, experience_ctc_points, experience_distribution, location_distribution,
    score_distribution, summarize,
};
