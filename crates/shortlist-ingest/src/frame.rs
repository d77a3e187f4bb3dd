//! Conversion from Polars frames to candidate tables.

use std::path::Path;

use polars::prelude::{AnyValue, DataFrame};
use shortlist_model::CandidateTable;

use crate::csv::normalize_column_name;
use crate::error::{IngestError, Result};

/// Converts a Polars `AnyValue` to the cell text stored in a candidate table.
///
/// Frames are read with every column as text, so cells are strings or nulls.
/// Nulls become empty strings.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Builds a [`CandidateTable`] from a frame, normalizing every column name.
///
/// Rows keep the frame's order.
pub fn frame_to_table(df: &DataFrame, path: &Path) -> Result<CandidateTable> {
    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| normalize_column_name(name.as_str()))
        .collect();
    for (idx, name) in columns.iter().enumerate() {
        if columns[..idx].contains(name) {
            return Err(IngestError::DuplicateColumn {
                column: name.clone(),
                path: path.to_path_buf(),
            });
        }
    }

    let mut table = CandidateTable::new(columns);
    let frame_columns = df.get_columns();
    for row_idx in 0..df.height() {
        let mut row = Vec::with_capacity(frame_columns.len());
        for column in frame_columns {
            row.push(any_to_string(column.get(row_idx)?));
        }
        table.push_row(row);
    }
    Ok(table)
}
