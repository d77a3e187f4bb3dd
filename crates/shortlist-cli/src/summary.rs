use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use shortlist_model::{
    CategoryCount, ExperienceLevel, MAX_SCORE, RankedCandidate, ScatterPoint, ShortlistReport,
    format_numeric,
};

use shortlist_cli::pipeline::ColumnReport;

const BAR_WIDTH: u32 = 20;

pub fn print_report(report: &ShortlistReport, top: Option<usize>, with_summary: bool) {
    let shown = top.map_or(report.candidates.len(), |n| n.min(report.candidates.len()));
    println!(
        "All Candidates with Scores ({} of {}):",
        shown,
        report.candidates.len()
    );
    println!("{}", ranking_table(&report.candidates[..shown]));
    if !with_summary {
        return;
    }

    println!();
    println!("Candidate Distribution by Location:");
    println!("{}", distribution_table("Location", &report.summary.by_location));

    println!();
    println!("Candidates Categorized by Experience Level:");
    println!(
        "{}",
        distribution_table("Experience Level", &report.summary.by_experience_level)
    );

    println!();
    println!("Experience vs. Current CTC:");
    println!("{}", scatter_table(&report.summary.experience_vs_ctc));
}

fn ranking_table(candidates: &[RankedCandidate]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Age"),
        header_cell("Location"),
        header_cell("Job Title"),
        header_cell("Experience Level"),
        header_cell("Current CTC"),
        header_cell("Score"),
        header_cell(""),
    ]);
    apply_ranking_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);
    for candidate in candidates {
        let record = &candidate.record;
        table.add_row(vec![
            dim_cell(record.row_index),
            text_cell(&record.age),
            text_cell(&record.location),
            text_cell(&record.job_title),
            level_cell(candidate.experience_level),
            text_cell(&record.current_ctc),
            score_cell(candidate.score),
            Cell::new(score_bar(candidate.score)).fg(score_color(candidate.score)),
        ]);
    }
    table
}

fn distribution_table(label: &str, counts: &[CategoryCount]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(label),
        header_cell("Candidates"),
        header_cell("Share"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    if counts.is_empty() {
        table.add_row(vec![dim_cell("-"), dim_cell(0), dim_cell("-")]);
    }
    for entry in counts {
        table.add_row(vec![
            Cell::new(&entry.label),
            Cell::new(entry.count),
            Cell::new(format!("{:.1}%", entry.share)),
        ]);
    }
    table
}

fn scatter_table(points: &[ScatterPoint]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Experience (Years)"),
        header_cell("Current CTC"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    if points.is_empty() {
        table.add_row(vec![dim_cell("-"), dim_cell("-"), dim_cell("-")]);
    }
    for point in points {
        table.add_row(vec![
            dim_cell(point.row_index),
            Cell::new(format_numeric(point.experience)),
            Cell::new(format_numeric(point.current_ctc)),
        ]);
    }
    table
}

pub fn print_columns(report: &ColumnReport) {
    let (headers, required) = column_tables(report);
    println!("{headers}");
    println!("{required}");
}

fn column_tables(report: &ColumnReport) -> (Table, Table) {
    let mut headers = Table::new();
    headers.set_header(vec![header_cell("Header"), header_cell("Column")]);
    apply_table_style(&mut headers);
    for (raw, normalized) in report.raw.iter().zip(&report.normalized) {
        headers.add_row(vec![Cell::new(format!("{raw:?}")), Cell::new(normalized)]);
    }

    let mut required = Table::new();
    required.set_header(vec![header_cell("Required Column"), header_cell("Present")]);
    apply_table_style(&mut required);
    align_column(&mut required, 1, CellAlignment::Center);
    for (column, present) in report.required() {
        let status = if present {
            Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold)
        } else {
            Cell::new("✗").fg(Color::Red).add_attribute(Attribute::Bold)
        };
        required.add_row(vec![Cell::new(column.as_str()), status]);
    }
    (headers, required)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_ranking_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 8 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::LowerBoundary(Width::Fixed(12)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(BAR_WIDTH as u16 + 2)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// Horizontal bar proportional to the score.
fn score_bar(score: u32) -> String {
    let filled = (score.min(MAX_SCORE) * BAR_WIDTH).div_ceil(MAX_SCORE) as usize;
    "█".repeat(filled)
}

fn score_color(score: u32) -> Color {
    match score {
        s if s >= 75 => Color::Green,
        s if s >= 40 => Color::Yellow,
        _ => Color::DarkGrey,
    }
}

fn score_cell(score: u32) -> Cell {
    Cell::new(score)
        .fg(score_color(score))
        .add_attribute(Attribute::Bold)
}

fn level_cell(level: ExperienceLevel) -> Cell {
    match level {
        ExperienceLevel::Other => dim_cell(level),
        ExperienceLevel::SeniorDeveloper => Cell::new(level).fg(Color::Blue),
        _ => Cell::new(level),
    }
}

fn text_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
