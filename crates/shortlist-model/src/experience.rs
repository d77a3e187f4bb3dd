//! Experience levels derived from years of experience.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal seniority bucket for a candidate.
///
/// Buckets are fixed: up to 1 year is `Fresher`, 2-3 `JuniorDeveloper`,
/// 4-6 `MidLevelDeveloper`, above 6 `SeniorDeveloper`. A value that does not
/// parse as a whole number of years is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "Fresher")]
    Fresher,
    #[serde(rename = "Junior Developer")]
    JuniorDeveloper,
    #[serde(rename = "Mid-Level Developer")]
    MidLevelDeveloper,
    #[serde(rename = "Senior Developer")]
    SeniorDeveloper,
    #[serde(rename = "Other")]
    Other,
}

impl ExperienceLevel {
    /// Display label used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Fresher => "Fresher",
            ExperienceLevel::JuniorDeveloper => "Junior Developer",
            ExperienceLevel::MidLevelDeveloper => "Mid-Level Developer",
            ExperienceLevel::SeniorDeveloper => "Senior Developer",
            ExperienceLevel::Other => "Other",
        }
    }

    /// Buckets a whole number of years.
    pub fn from_years(years: i64) -> Self {
        if years <= 1 {
            ExperienceLevel::Fresher
        } else if years <= 3 {
            ExperienceLevel::JuniorDeveloper
        } else if years <= 6 {
            ExperienceLevel::MidLevelDeveloper
        } else {
            ExperienceLevel::SeniorDeveloper
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
