//! CSV header parsing and normalization.

/// Header row of a candidate file, before and after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateHeaders {
    /// Header names exactly as written in the file.
    pub raw: Vec<String>,
    /// Trimmed, lowercased names used to look columns up.
    pub columns: Vec<String>,
}

impl CandidateHeaders {
    pub fn from_raw(raw: Vec<String>) -> Self {
        let columns = raw.iter().map(|name| normalize_column_name(name)).collect();
        Self { raw, columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns true if a normalized column with this name exists.
    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// First normalized name that appears more than once.
    pub fn first_duplicate(&self) -> Option<&str> {
        self.columns
            .iter()
            .enumerate()
            .find(|(idx, name)| self.columns[..*idx].contains(*name))
            .map(|(_, name)| name.as_str())
    }
}

/// Normalizes a column name: strips surrounding whitespace (and a BOM) and lowercases.
pub fn normalize_column_name(value: &str) -> String {
    value
        .trim()
        .trim_matches('\u{feff}')
        .trim()
        .to_lowercase()
}

/// Parses a CSV line into fields, handling quoted values.
///
/// Fields are returned verbatim apart from quote handling.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes => {
                in_quotes = true;
            }
            '"' if in_quotes => {
                // Check for escaped quote ("")
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => {
                current.push(c);
            }
        }
    }

    fields.push(current);
    fields
}
