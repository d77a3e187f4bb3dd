//! Integration tests for the pipeline module.

use std::io::Write;

use shortlist_cli::pipeline::{RankOutcome, inspect_columns, rank_file};
use shortlist_model::{ExperienceLevel, FilterCriteria, RequiredColumn};
use tempfile::NamedTempFile;

fn temp_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn criteria() -> FilterCriteria {
    FilterCriteria::new("30", "pune", "developer", "3", "40000")
}

#[test]
fn test_rank_file_orders_by_score() {
    let file = temp_csv(
        "Age,Location,Job Title,Experience,Current_CTC\n\
         41,Mumbai,Manager,15,150000\n\
         30,Pune,Developer,5,50000\n\
         28,Pune West,developer,2,30000\n",
    );

    let RankOutcome::Ranked(report) = rank_file(file.path(), &criteria()).unwrap() else {
        panic!("expected a ranked report");
    };

    let scores: Vec<(usize, u32)> = report
        .candidates
        .iter()
        .map(|c| (c.record.row_index, c.score))
        .collect();
    assert_eq!(scores, vec![(1, 100), (0, 50), (2, 30)]);
    assert_eq!(
        report.candidates[0].experience_level,
        ExperienceLevel::MidLevelDeveloper
    );
    assert_eq!(report.summary.candidate_count, 3);
    assert_eq!(report.summary.by_location.len(), 3);
    assert_eq!(report.summary.experience_vs_ctc.len(), 3);
}

#[test]
fn test_rank_file_reports_missing_columns() {
    let file = temp_csv("age,location,experience\n30,Pune,5\n");

    let RankOutcome::MissingColumns(err) = rank_file(file.path(), &criteria()).unwrap() else {
        panic!("expected missing columns");
    };

    assert_eq!(
        err.missing,
        vec![RequiredColumn::JobTitle, RequiredColumn::CurrentCtc]
    );
    insta::assert_snapshot!(
        err.to_string(),
        @"Required columns missing: job title, current_ctc. Please check the dataset."
    );
}

#[test]
fn test_rank_file_header_only() {
    let file = temp_csv("age,location,job title,experience,current_ctc\n");

    let RankOutcome::Ranked(report) = rank_file(file.path(), &criteria()).unwrap() else {
        panic!("expected a ranked report");
    };
    assert!(report.candidates.is_empty());
    assert_eq!(report.summary.candidate_count, 0);
}

#[test]
fn test_rank_file_missing_path_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");

    let err = rank_file(&path, &criteria()).unwrap_err();
    assert!(format!("{err:#}").contains("absent.csv"));
}

#[test]
fn test_report_serializes_candidates_flat() {
    let file = temp_csv(
        "age,location,job title,experience,current_ctc,name\n\
         30,Pune,Developer,5,50000,Asha\n",
    );
    let RankOutcome::Ranked(report) = rank_file(file.path(), &criteria()).unwrap() else {
        panic!("expected a ranked report");
    };

    let json = serde_json::to_value(&report).unwrap();
    let candidate = &json["candidates"][0];
    assert_eq!(candidate["score"], 100);
    assert_eq!(candidate["job title"], "Developer");
    assert_eq!(candidate["experience_level"], "Mid-Level Developer");
    assert_eq!(candidate["extra"]["name"], "Asha");
}

#[test]
fn test_inspect_columns() {
    let file = temp_csv("\u{feff} Age ,LOCATION,Job Title,notes\n30,Pune,Developer,x\n");

    let report = inspect_columns(file.path()).unwrap();

    assert_eq!(report.normalized, vec!["age", "location", "job title", "notes"]);
    assert_eq!(
        report.missing,
        vec![RequiredColumn::Experience, RequiredColumn::CurrentCtc]
    );
    let present: Vec<bool> = report.required().into_iter().map(|(_, p)| p).collect();
    assert_eq!(present, vec![true, true, true, false, false]);
}
