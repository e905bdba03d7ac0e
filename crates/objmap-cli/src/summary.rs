//! Table rendering for `objmap types`.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use crate::commands::TypeSummary;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// Render declared types as a table: name, fields, required fields.
pub fn types_table(types: &[TypeSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Type", "Fields", "Required"]);
    apply_table_style(&mut table);
    for summary in types {
        table.add_row(vec![
            Cell::new(&summary.name).fg(Color::Cyan),
            Cell::new(summary.fields.join(", ")),
            required_cell(&summary.required),
        ]);
    }
    table
}

fn required_cell(required: &[String]) -> Cell {
    if required.is_empty() {
        Cell::new("-").fg(Color::DarkGrey)
    } else {
        Cell::new(required.join(", ")).fg(Color::Yellow)
    }
}
