//! CSV reading utilities.

mod header;
mod reader;

pub use header::{CandidateHeaders, normalize_column_name, parse_csv_line};
pub use reader::{
    MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, read_candidate_bytes,
    read_candidate_csv, read_candidate_headers, validate_encoding,
};
