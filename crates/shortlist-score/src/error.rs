use shortlist_model::{RequiredColumn, SchemaError};
use thiserror::Error;

/// Errors that stop a scoring run.
///
/// Per-field parse failures are not errors; they show up in each
/// candidate's score breakdown instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Required columns are absent; nothing was scored.
    #[error(transparent)]
    MissingColumns(#[from] SchemaError),
}

impl ScoreError {
    /// Missing columns, if this is a schema failure.
    pub fn missing_columns(&self) -> &[RequiredColumn] {
        match self {
            ScoreError::MissingColumns(err) => &err.missing,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoreError>;
