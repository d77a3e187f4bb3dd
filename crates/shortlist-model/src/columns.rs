//! Required candidate columns.
//!
//! Column names are matched after normalization (trimmed, lowercased), so the
//! canonical names below are all lowercase.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A column that must be present before candidates can be scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredColumn {
    Age,
    Location,
    JobTitle,
    Experience,
    CurrentCtc,
}

impl RequiredColumn {
    /// All required columns in canonical report order.
    pub const ALL: [RequiredColumn; 5] = [
        RequiredColumn::Age,
        RequiredColumn::Location,
        RequiredColumn::JobTitle,
        RequiredColumn::Experience,
        RequiredColumn::CurrentCtc,
    ];

    /// Returns the normalized column name as it appears in a loaded table.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredColumn::Age => "age",
            RequiredColumn::Location => "location",
            RequiredColumn::JobTitle => "job title",
            RequiredColumn::Experience => "experience",
            RequiredColumn::CurrentCtc => "current_ctc",
        }
    }
}

impl fmt::Display for RequiredColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
