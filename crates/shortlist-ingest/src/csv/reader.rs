//! CSV file reading into candidate tables.
//!
//! Every column is read as text. Numeric interpretation is left to the
//! scoring layer, which parses the few fields it needs.

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Read};
use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use shortlist_model::CandidateTable;

use crate::error::{IngestError, Result};
use crate::frame::frame_to_table;

use super::header::{CandidateHeaders, parse_csv_line};

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Reject encodings the loader does not read (UTF-16).
///
/// A UTF-8 BOM is accepted and stripped from the header.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| io_error(path, e))?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    check_bom(&buffer[..bytes_read], path)
}

fn check_bom(prefix: &[u8], path: &Path) -> Result<()> {
    if prefix.starts_with(&[0xFF, 0xFE]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 LE",
        });
    }
    if prefix.starts_with(&[0xFE, 0xFF]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 BE",
        });
    }
    Ok(())
}

fn io_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

/// Parses the first non-blank line of `reader` as a header row.
fn read_header_line<R: BufRead>(reader: R, path: &Path) -> Result<CandidateHeaders> {
    let mut header = None;
    for line in reader.lines() {
        let line = line.map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        // Skip BOM if present
        let cleaned = line.strip_prefix('\u{feff}').unwrap_or(&line);
        if !cleaned.trim().is_empty() {
            header = Some(cleaned.to_string());
            break;
        }
    }
    let Some(cleaned) = header else {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    };

    let headers = CandidateHeaders::from_raw(parse_csv_line(&cleaned));
    if headers.columns.iter().all(String::is_empty) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }
    if let Some(column) = headers.first_duplicate() {
        return Err(IngestError::DuplicateColumn {
            column: column.to_string(),
            path: path.to_path_buf(),
        });
    }
    Ok(headers)
}

/// Reads and normalizes the header row of a candidate CSV file.
pub fn read_candidate_headers(path: &Path) -> Result<CandidateHeaders> {
    validate_encoding(path)?;
    let file = File::open(path).map_err(|e| io_error(path, e))?;
    read_header_line(BufReader::new(file), path)
}

/// Loads a candidate CSV file into a table with normalized column names.
///
/// A file with a header row but no data rows loads as an empty table.
pub fn read_candidate_csv(path: &Path) -> Result<CandidateTable> {
    check_file_size(path)?;
    let bytes = std::fs::read(path).map_err(|e| io_error(path, e))?;
    check_bom(&bytes, path)?;
    read_text_table(bytes, path)
}

/// Loads candidate CSV content already held in memory, such as an uploaded file.
///
/// `name` identifies the content in error messages.
pub fn read_candidate_bytes(bytes: Vec<u8>, name: &str) -> Result<CandidateTable> {
    let path = Path::new(name);
    check_bom(&bytes, path)?;
    read_text_table(bytes, path)
}

fn read_text_table(mut bytes: Vec<u8>, path: &Path) -> Result<CandidateTable> {
    let headers = read_header_line(Cursor::new(bytes.as_slice()), path)?;
    let offset = leading_blank_lines_len(&bytes);
    if offset > 0 {
        bytes.drain(..offset);
    }

    let df = text_csv_options()
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()
        .map_err(|e| csv_parse_error(path, &e))?;

    finish_table(&df, &headers, path)
}

/// Byte length of the blank lines (and any BOM) in front of the header row.
fn leading_blank_lines_len(bytes: &[u8]) -> usize {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut header_start = 0;
    for (idx, byte) in body.iter().enumerate() {
        match byte {
            b'\n' => header_start = idx + 1,
            b' ' | b'\t' | b'\r' => {}
            _ => break,
        }
    }
    if header_start == 0 {
        0
    } else {
        bytes.len() - body.len() + header_start
    }
}

fn text_csv_options() -> CsvReadOptions {
    // Schema inference length 0 reads every column as a string.
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
}

fn csv_parse_error(path: &Path, e: &impl ToString) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

fn finish_table(df: &DataFrame, headers: &CandidateHeaders, path: &Path) -> Result<CandidateTable> {
    let table = frame_to_table(df, path)?;
    if table.columns.len() != headers.len() {
        tracing::warn!(
            path = %path.display(),
            header_columns = headers.len(),
            parsed_columns = table.columns.len(),
            "Header row and parsed column count differ"
        );
    }
    tracing::info!(
        path = %path.display(),
        rows = table.len(),
        columns = table.columns.len(),
        "Loaded candidate table"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_headers_normalizes() {
        let file = create_temp_csv("Age, Location ,Job Title\n30,Pune,Dev\n");
        let headers = read_candidate_headers(file.path()).unwrap();

        assert_eq!(headers.raw, vec!["Age", " Location ", "Job Title"]);
        assert_eq!(headers.columns, vec!["age", "location", "job title"]);
    }

    #[test]
    fn test_read_headers_empty_file() {
        let file = create_temp_csv("");
        let result = read_candidate_headers(file.path());

        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_read_headers_skips_leading_blank_lines() {
        let file = create_temp_csv("\n  \nAge,Location\n30,Pune\n");
        let headers = read_candidate_headers(file.path()).unwrap();

        assert_eq!(headers.columns, vec!["age", "location"]);
    }

    #[test]
    fn test_read_headers_blank_lines_only() {
        let file = create_temp_csv("\n\n");
        let result = read_candidate_headers(file.path());

        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_read_headers_with_bom() {
        let file = create_temp_csv("\u{feff}Age,Location\n30,Pune\n");
        let headers = read_candidate_headers(file.path()).unwrap();

        assert_eq!(headers.columns, vec!["age", "location"]);
    }

    #[test]
    fn test_read_headers_duplicate_after_normalizing() {
        let file = create_temp_csv("Age,age \n30,31\n");
        let result = read_candidate_headers(file.path());

        assert!(matches!(
            result,
            Err(IngestError::DuplicateColumn { ref column, .. }) if column == "age"
        ));
    }

    #[test]
    fn test_leading_blank_lines_len() {
        assert_eq!(leading_blank_lines_len(b"age\n30\n"), 0);
        assert_eq!(leading_blank_lines_len(b"\n \r\nage\n"), 4);
        assert_eq!(leading_blank_lines_len(b"\xEF\xBB\xBF\nage\n"), 4);
        assert_eq!(leading_blank_lines_len(b"\xEF\xBB\xBFage\n"), 0);
        assert_eq!(leading_blank_lines_len(b"  age\n"), 0);
    }

    #[test]
    fn test_missing_file() {
        let result = read_candidate_csv(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_file_size_limit() {
        let file = create_temp_csv("Age\n30\n");
        let result = check_file_size_with_limit(file.path(), 3);
        assert!(matches!(result, Err(IngestError::FileTooLarge { .. })));
        assert!(check_file_size_with_limit(file.path(), 1024).is_ok());
    }

    #[test]
    fn test_utf16_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xFE, b'A', 0x00]).unwrap();
        let result = validate_encoding(file.path());
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }
}
