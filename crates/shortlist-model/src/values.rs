//! Parsing of numeric cell and criteria text.
//!
//! Candidate data arrives as free text. Numeric fields are parsed on demand and
//! a failed parse is represented as `None`, never as an error.

/// Parses a string as `i64`, returning `None` for invalid or empty strings.
///
/// Surrounding whitespace is ignored. Decimal values such as `"2.5"` do not
/// parse as integers.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

/// Parses a string as `f64`, returning `None` for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Formats a floating-point number without trailing zeros after the decimal point.
///
/// # Examples
///
/// ```
/// use shortlist_model::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.50), "1.5");
/// assert_eq!(format_numeric(40.0), "40");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_i64() {
        assert_eq!(parse_i64(""), None);
        assert_eq!(parse_i64("  "), None);
        assert_eq!(parse_i64("42"), Some(42));
        assert_eq!(parse_i64("  -3  "), Some(-3));
        assert_eq!(parse_i64("+7"), Some(7));
        assert_eq!(parse_i64("2.5"), None);
        assert_eq!(parse_i64("five"), None);
    }

    #[test]
    fn test_parse_f64() {
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64("50000"), Some(50000.0));
        assert_eq!(parse_f64(" 12.75 "), Some(12.75));
        assert_eq!(parse_f64("1e5"), Some(100000.0));
        assert_eq!(parse_f64("10 LPA"), None);
    }

    #[test]
    fn test_format_numeric() {
        assert_eq!(format_numeric(0.0), "0");
        assert_eq!(format_numeric(100.0), "100");
        assert_eq!(format_numeric(2.25), "2.25");
    }
}
