//! Loaded candidate tables and typed candidate records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::values::{parse_f64, parse_i64};
use crate::{RequiredColumn, SchemaError};

/// A candidate dataset as loaded from CSV.
///
/// Column names are already normalized. Rows are kept in load order and every
/// row has exactly one cell per column; missing cells are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CandidateTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a row, padding short rows and truncating long ones to the table width.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Required columns absent from this table, in canonical order.
    pub fn missing_required_columns(&self) -> Vec<RequiredColumn> {
        RequiredColumn::ALL
            .into_iter()
            .filter(|column| !self.has_column(column.as_str()))
            .collect()
    }

    /// Converts every row into a typed record.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] naming every missing required column. No
    /// records are produced in that case.
    pub fn records(&self) -> Result<Vec<CandidateRecord>, SchemaError> {
        let mut positions = [0usize; RequiredColumn::ALL.len()];
        let mut missing = Vec::new();
        for (slot, column) in positions.iter_mut().zip(RequiredColumn::ALL) {
            match self.column_index(column.as_str()) {
                Some(index) => *slot = index,
                None => missing.push(column),
            }
        }
        if !missing.is_empty() {
            return Err(SchemaError::new(missing));
        }
        let [age, location, job_title, experience, current_ctc] = positions;

        let records = self
            .rows
            .iter()
            .enumerate()
            .map(|(row_index, row)| {
                let cell = |idx: usize| row.get(idx).cloned().unwrap_or_default();
                let extra = self
                    .columns
                    .iter()
                    .enumerate()
                    .filter(|(idx, _)| !positions.contains(idx))
                    .map(|(idx, name)| (name.clone(), cell(idx)))
                    .collect();
                CandidateRecord::new(
                    row_index,
                    cell(age),
                    cell(location),
                    cell(job_title),
                    cell(experience),
                    cell(current_ctc),
                )
                .with_extra(extra)
            })
            .collect();
        Ok(records)
    }
}

/// One candidate row with its scoring fields pulled out.
///
/// The numeric fields are parsed once, when the record is built. `None`
/// means the raw text did not parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    /// Zero-based position in the loaded table.
    pub row_index: usize,
    pub age: String,
    pub location: String,
    #[serde(rename = "job title")]
    pub job_title: String,
    pub experience: String,
    pub current_ctc: String,
    /// Whole years parsed from `experience`.
    pub experience_years: Option<i64>,
    /// Decimal amount parsed from `current_ctc`.
    pub current_ctc_amount: Option<f64>,
    /// Columns not used by scoring, keyed by normalized name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl CandidateRecord {
    pub fn new(
        row_index: usize,
        age: impl Into<String>,
        location: impl Into<String>,
        job_title: impl Into<String>,
        experience: impl Into<String>,
        current_ctc: impl Into<String>,
    ) -> Self {
        let experience = experience.into();
        let current_ctc = current_ctc.into();
        Self {
            row_index,
            age: age.into(),
            location: location.into(),
            job_title: job_title.into(),
            experience_years: parse_i64(&experience),
            current_ctc_amount: parse_f64(&current_ctc),
            experience,
            current_ctc,
            extra: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_extra(mut self, extra: BTreeMap<String, String>) -> Self {
        self.extra = extra;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(columns: &[&str], rows: &[&[&str]]) -> CandidateTable {
        let mut table = CandidateTable::new(columns.iter().map(|c| c.to_string()).collect());
        for row in rows {
            table.push_row(row.iter().map(|v| v.to_string()).collect());
        }
        table
    }

    #[test]
    fn push_row_pads_to_width() {
        let t = table(&["a", "b", "c"], &[&["1"]]);
        assert_eq!(t.rows[0], vec!["1", "", ""]);
    }

    #[test]
    fn missing_columns_in_canonical_order() {
        let t = table(&["current_ctc", "location", "notes"], &[]);
        assert_eq!(
            t.missing_required_columns(),
            vec![
                RequiredColumn::Age,
                RequiredColumn::JobTitle,
                RequiredColumn::Experience
            ]
        );
    }

    #[test]
    fn records_parse_numeric_fields_once() {
        let t = table(
            &["name", "age", "location", "job title", "experience", "current_ctc"],
            &[
                &["Asha", "30", "Pune", "Developer", "5", "50000"],
                &["Ravi", "x", "Mumbai", "Tester", "three", ""],
            ],
        );
        let records = t.records().expect("records");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].experience_years, Some(5));
        assert_eq!(records[0].current_ctc_amount, Some(50000.0));
        assert_eq!(records[0].extra.get("name").map(String::as_str), Some("Asha"));
        assert_eq!(records[1].row_index, 1);
        assert_eq!(records[1].experience_years, None);
        assert_eq!(records[1].current_ctc_amount, None);
    }

    #[test]
    fn records_refused_without_schema() {
        let t = table(
            &["age", "location", "job title", "experience"],
            &[&["30", "Pune", "Developer", "5"]],
        );
        let err = t.records().unwrap_err();
        assert_eq!(err.missing, vec![RequiredColumn::CurrentCtc]);
        assert_eq!(err.missing_names(), vec!["current_ctc"]);
    }
}
