use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use icd_filter::FilterSummary;

use crate::types::AnalysisOutcome;

pub fn print_outcome(outcome: &AnalysisOutcome) {
    println!("Dataset: {}", outcome.dataset_path.display());
    let summary = &outcome.summary;

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Range"),
        header_cell("Category"),
        header_cell("Records"),
        header_cell("In range"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(summary.range.to_string()),
        category_cell(summary),
        Cell::new(summary.total_records),
        count_cell(summary.matched_records()),
    ]);
    println!("{table}");

    match &outcome.export {
        Some(path) => println!("Filtered rows written to {}", path.display()),
        None => println!("Dry run: no file written"),
    }
    if summary.category.is_none() {
        eprintln!(
            "warning: range {} does not match any predefined category",
            summary.range
        );
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn category_cell(summary: &FilterSummary) -> Cell {
    match summary.category {
        Some(chapter) => Cell::new(chapter.name)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        None => Cell::new("(no matching category)").fg(Color::Yellow),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
