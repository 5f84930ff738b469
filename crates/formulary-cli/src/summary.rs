use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use formulary_extract::CATEGORY_KEYWORDS;
use formulary_model::Schedule;

use crate::types::{ExtractResult, IntegrateResult};

pub fn print_extract_summary(result: &ExtractResult) {
    println!("Document: {}", result.document.display());
    println!("Backend: {}", result.backend);
    println!(
        "Pages: {}  Lines: {}  Parsed: {}  Unique: {}",
        result.stats.pages, result.stats.lines, result.stats.parsed, result.unique
    );
    println!("Saved: {}", result.output.display());

    if result.sample.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Generic"),
        header_cell("Brand"),
        header_cell("Strength"),
        header_cell("Form"),
        header_cell("Category"),
        header_cell("Schedule"),
    ]);
    apply_table_style(&mut table);
    for record in &result.sample {
        table.add_row(vec![
            Cell::new(&record.generic_name),
            Cell::new(&record.brand_name),
            Cell::new(&record.strength),
            Cell::new(record.form.as_str()),
            Cell::new(record.category.as_str()),
            Cell::new(record.schedule.as_str()),
        ]);
    }
    println!();
    println!("Sample (first {} records):", result.sample.len());
    println!("{table}");
}

pub fn print_integrate_summary(result: &IntegrateResult) {
    println!("Target: {}", result.target.display());
    println!(
        "Loaded: {}  Valid: {}  Inserted: {}",
        result.outcome.loaded, result.outcome.valid, result.outcome.inserted
    );
    if result.dry_run {
        println!("Dry run: target file left unchanged");
    }
}

pub fn print_taxonomy() {
    let mut categories = Table::new();
    categories.set_header(vec![header_cell("Category"), header_cell("Keywords")]);
    apply_table_style(&mut categories);
    for (category, keywords) in CATEGORY_KEYWORDS {
        categories.add_row(vec![
            Cell::new(category.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(keywords.join(", ")),
        ]);
    }
    println!("Categories (priority order, first match wins):");
    println!("{categories}");

    let mut schedules = Table::new();
    schedules.set_header(vec![header_cell("Schedule"), header_cell("Level")]);
    apply_table_style(&mut schedules);
    if let Some(column) = schedules.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for schedule in Schedule::ALL {
        schedules.add_row(vec![
            Cell::new(schedule.as_str()),
            Cell::new(schedule.level()),
        ]);
    }
    println!();
    println!("Schedules (0 = unscheduled, 6 = most restricted):");
    println!("{schedules}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
