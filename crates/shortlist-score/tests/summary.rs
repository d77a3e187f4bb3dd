//! Distribution and correlation summaries over a ranked shortlist.

use proptest::prelude::{prop, prop_assert, prop_assert_eq, proptest};

use shortlist_model::{CandidateTable, FilterCriteria, ScatterPoint, ScoreBar, Shortlist};
use shortlist_score::{
    experience_ctc_points, experience_distribution, location_distribution, score_all_candidates,
    score_distribution, summarize,
};

const HEADER: [&str; 5] = ["age", "location", "job title", "experience", "current_ctc"];

fn shortlist_of(rows: &[[&str; 5]]) -> Shortlist {
    let mut table = CandidateTable::new(HEADER.iter().map(|c| c.to_string()).collect());
    for row in rows {
        table.push_row(row.iter().map(|v| v.to_string()).collect());
    }
    score_all_candidates(&table, &FilterCriteria::default()).unwrap()
}

/// Ranked order with empty criteria: row 1 (empty location, 15 points) first,
/// then rows 0, 2, 3, 4 with 5 points each.
fn mixed_shortlist() -> Shortlist {
    shortlist_of(&[
        ["30", "Pune", "Developer", "5", "50000"],
        ["31", "", "Developer", "1", "20000"],
        ["32", "Pune", "Developer", "abc", "30000"],
        ["33", "Goa", "Developer", "8", "lots"],
        ["34", "  ", "Developer", "2.5", "45000"],
    ])
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn location_counts_skip_blank_locations() {
    let counts = location_distribution(&mixed_shortlist());

    let labels: Vec<(&str, usize)> = counts.iter().map(|c| (c.label.as_str(), c.count)).collect();
    assert_eq!(labels, vec![("Pune", 2), ("Goa", 1)]);
    assert_close(counts[0].share, 200.0 / 3.0);
    assert_close(counts[1].share, 100.0 / 3.0);
}

#[test]
fn location_counts_are_case_sensitive() {
    let counts = location_distribution(&shortlist_of(&[
        ["30", "Pune", "Developer", "5", "50000"],
        ["30", "pune", "Developer", "5", "50000"],
    ]));

    assert_eq!(counts.len(), 2);
    assert!(counts.iter().all(|c| c.count == 1));
}

#[test]
fn experience_levels_are_counted_per_label() {
    let counts = experience_distribution(&mixed_shortlist());

    let labels: Vec<(&str, usize)> = counts.iter().map(|c| (c.label.as_str(), c.count)).collect();
    assert_eq!(
        labels,
        vec![
            ("Other", 2),
            ("Fresher", 1),
            ("Mid-Level Developer", 1),
            ("Senior Developer", 1),
        ]
    );
    assert_close(counts[0].share, 40.0);
    assert_close(counts.iter().map(|c| c.share).sum(), 100.0);
}

#[test]
fn scatter_points_need_both_values() {
    let points = experience_ctc_points(&mixed_shortlist());

    assert_eq!(
        points,
        vec![
            ScatterPoint {
                row_index: 1,
                experience: 1.0,
                current_ctc: 20000.0,
            },
            ScatterPoint {
                row_index: 0,
                experience: 5.0,
                current_ctc: 50000.0,
            },
            ScatterPoint {
                row_index: 4,
                experience: 2.5,
                current_ctc: 45000.0,
            },
        ]
    );
}

#[test]
fn score_bars_follow_ranking() {
    let bars = score_distribution(&mixed_shortlist());

    let expected: Vec<ScoreBar> = [(1, 15), (0, 5), (2, 5), (3, 5), (4, 5)]
        .into_iter()
        .map(|(row_index, score)| ScoreBar { row_index, score })
        .collect();
    assert_eq!(bars, expected);
}

#[test]
fn empty_shortlist_summarizes_to_nothing() {
    let summary = summarize(&shortlist_of(&[]));

    assert_eq!(summary.candidate_count, 0);
    assert!(summary.by_location.is_empty());
    assert!(summary.by_experience_level.is_empty());
    assert!(summary.experience_vs_ctc.is_empty());
    assert!(summary.scores.is_empty());
}

proptest! {
    #[test]
    fn distribution_totals_match_counted_rows(
        rows in prop::collection::vec(
            (
                prop::sample::select(vec!["Pune", "Goa", "", " ", "Delhi"]),
                prop::sample::select(vec!["0", "2", "5", "9", "x", ""]),
            ),
            0..40,
        )
    ) {
        let table_rows: Vec<[&str; 5]> = rows
            .iter()
            .map(|(location, experience)| ["30", *location, "Developer", *experience, "1000"])
            .collect();
        let summary = summarize(&shortlist_of(&table_rows));

        let located = rows.iter().filter(|(l, _)| !l.trim().is_empty()).count();
        let location_total: usize = summary.by_location.iter().map(|c| c.count).sum();
        prop_assert_eq!(location_total, located);

        let level_total: usize = summary.by_experience_level.iter().map(|c| c.count).sum();
        prop_assert_eq!(level_total, rows.len());

        for counts in [&summary.by_location, &summary.by_experience_level] {
            if !counts.is_empty() {
                let share: f64 = counts.iter().map(|c| c.share).sum();
                prop_assert!((share - 100.0).abs() < 1e-6);
            }
            for pair in counts.windows(2) {
                prop_assert!(pair[0].count >= pair[1].count);
            }
        }
    }
}
