//! Candidate data ingestion.
//!
//! This crate loads a resume dataset from CSV into a [`CandidateTable`]. The
//! file is parsed with Polars, every column is kept as text, and every column
//! name is trimmed and lowercased so later stages can look columns up
//! regardless of how the header was typed.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use shortlist_ingest::read_candidate_csv;
//!
//! let table = read_candidate_csv(Path::new("resumes.csv"))?;
//! let missing = table.missing_required_columns();
//! ```
//!
//! [`CandidateTable`]: shortlist_model::CandidateTable

mod csv;
mod error;
mod frame;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    CandidateHeaders, MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit,
    normalize_column_name, parse_csv_line, read_candidate_bytes, read_candidate_csv,
    read_candidate_headers, validate_encoding,
};

// === Frame Conversion ===
pub use frame::{any_to_string, frame_to_table};
