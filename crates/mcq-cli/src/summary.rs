use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use mcq_model::Subscale;

use crate::types::ProcessResult;

pub fn print_summary(result: &ProcessResult) {
    eprintln!("Source: {}", result.source.display());
    eprintln!("{}", summary_table(result));
}

fn summary_table(result: &ProcessResult) -> Table {
    let summary = &result.summary;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Rows"),
        header_cell("Detail"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![
        Cell::new("Input"),
        Cell::new(summary.input_rows),
        dim_cell("-"),
    ]);
    table.add_row(vec![
        Cell::new("Scored"),
        Cell::new(summary.scored_rows),
        dim_cell("SmlSeq, MedSeq, LrgSeq"),
    ]);
    for (slot, subscale) in Subscale::ALL.iter().enumerate() {
        let below = summary.filter.below_threshold[slot];
        let not_numeric = summary.filter.not_numeric[slot];
        table.add_row(vec![
            Cell::new(format!("Excluded by {}", subscale.completeness_field())),
            count_cell(below + not_numeric, Color::Yellow),
            dim_cell(format!("{below} below threshold, {not_numeric} not numeric")),
        ]);
    }
    table.add_row(vec![
        Cell::new("Non-finite k_geo"),
        count_cell(summary.composite.non_finite, Color::Red),
        dim_cell("emitted as null"),
    ]);
    table.add_row(vec![
        Cell::new("OUTPUT")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.output_rows()).add_attribute(Attribute::Bold),
        Cell::new(format!("{} excluded", summary.filter.excluded))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
    ]);
    table
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
