use thiserror::Error;

use crate::RequiredColumn;

/// One or more required columns are absent from a candidate table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Required columns missing: {}. Please check the dataset.",
    join_columns(.missing)
)]
pub struct SchemaError {
    /// Missing columns in canonical order.
    pub missing: Vec<RequiredColumn>,
}

impl SchemaError {
    pub fn new(missing: Vec<RequiredColumn>) -> Self {
        Self { missing }
    }

    /// Missing column names, as shown to the user.
    pub fn missing_names(&self) -> Vec<&'static str> {
        self.missing.iter().map(RequiredColumn::as_str).collect()
    }
}

fn join_columns(columns: &[RequiredColumn]) -> String {
    columns
        .iter()
        .map(RequiredColumn::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
