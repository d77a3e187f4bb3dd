//! Experience classification.

use shortlist_model::{CandidateRecord, ExperienceLevel, parse_i64};

/// Maps a raw experience value to its level.
///
/// Total: text that is not a whole number of years yields
/// [`ExperienceLevel::Other`]. Cells are text, so a decimal such as "5.0"
/// is not coerced to 5 and also yields `Other`.
pub fn categorize_experience(raw: &str) -> ExperienceLevel {
    parse_i64(raw).map_or(ExperienceLevel::Other, categorize_years)
}

/// Maps whole years of experience to a level.
pub fn categorize_years(years: i64) -> ExperienceLevel {
    ExperienceLevel::from_years(years)
}

/// Level of a loaded record, using the years parsed at load time.
pub fn categorize_record(record: &CandidateRecord) -> ExperienceLevel {
    record
        .experience_years
        .map_or(ExperienceLevel::Other, categorize_years)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_at_boundaries() {
        let cases = [
            ("1", "Fresher"),
            ("2", "Junior Developer"),
            ("3", "Junior Developer"),
            ("4", "Mid-Level Developer"),
            ("6", "Mid-Level Developer"),
            ("7", "Senior Developer"),
        ];
        for (raw, label) in cases {
            assert_eq!(categorize_experience(raw).as_str(), label, "input {raw}");
        }
    }

    #[test]
    fn non_integer_is_other() {
        assert_eq!(categorize_experience("abc"), ExperienceLevel::Other);
        assert_eq!(categorize_experience(""), ExperienceLevel::Other);
        assert_eq!(categorize_experience("4.5"), ExperienceLevel::Other);
        assert_eq!(categorize_experience("5.0"), ExperienceLevel::Other);
        assert_eq!(
            categorize_experience("99999999999999999999"),
            ExperienceLevel::Other
        );
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_eq!(categorize_experience(" 0 "), ExperienceLevel::Fresher);
    }

    #[test]
    fn record_uses_parsed_years() {
        let record = CandidateRecord::new(0, "25", "Delhi", "Analyst", "12", "");
        assert_eq!(categorize_record(&record), ExperienceLevel::SeniorDeveloper);

        let record = CandidateRecord::new(1, "25", "Delhi", "Analyst", "n/a", "");
        assert_eq!(categorize_record(&record), ExperienceLevel::Other);
    }
}
