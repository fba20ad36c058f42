use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use ratemap::pipeline::RateView;
use ratemap::summary::{DisplayTable, TOOLTIP_SEPARATOR};

pub fn print_display_table(table: &DisplayTable) {
    if table.is_empty() {
        println!("\n⚠️  No states to display.");
        return;
    }

    let mut out = Table::new();
    out.load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    out.set_header(vec![
        Cell::new("State").add_attribute(Attribute::Bold),
        Cell::new("Code"),
        Cell::new("Total").fg(Color::Cyan),
        Cell::new("Categories"),
    ]);
    if let Some(col) = out.column_mut(2) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for row in table.rows() {
        out.add_row(vec![
            Cell::new(&row.state),
            Cell::new(row.state_code).set_alignment(CellAlignment::Center),
            Cell::new(row.total_count),
            Cell::new(row.tooltip_text.replace(TOOLTIP_SEPARATOR, "\n")),
        ]);
    }

    println!("\n📍 === RECORDS BY STATE === 📍");
    println!("{}", out);
}

pub fn print_state_options(options: &[&str]) {
    for state in options {
        println!("{}", state);
    }
}

pub fn print_rate(view: &RateView) {
    println!("\n📌 {}", view.render());
}
