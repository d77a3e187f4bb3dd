use serde::{Deserialize, Serialize};

use crate::values::{parse_f64, parse_i64};

/// Recruiter-supplied filter values.
///
/// All five values are free text, exactly as entered. The two minimums are
/// parsed on demand; a value that does not parse disables its scoring term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub age: String,
    pub location: String,
    pub job_title: String,
    pub min_experience: String,
    pub min_current_ctc: String,
}

impl FilterCriteria {
    pub fn new(
        age: impl Into<String>,
        location: impl Into<String>,
        job_title: impl Into<String>,
        min_experience: impl Into<String>,
        min_current_ctc: impl Into<String>,
    ) -> Self {
        Self {
            age: age.into(),
            location: location.into(),
            job_title: job_title.into(),
            min_experience: min_experience.into(),
            min_current_ctc: min_current_ctc.into(),
        }
    }

    /// Minimum experience as whole years, if it parses.
    pub fn min_experience_years(&self) -> Option<i64> {
        parse_i64(&self.min_experience)
    }

    /// Minimum current compensation, if it parses.
    pub fn min_current_ctc_amount(&self) -> Option<f64> {
        parse_f64(&self.min_current_ctc)
    }
}
