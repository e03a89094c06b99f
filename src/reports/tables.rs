use betti_summary::summary::{format_average, IndexedTotals, ProbabilitySummary, MIN_HEADER_DIMS};
use betti_summary::vector::dimension_label;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

fn right_align(table: &mut Table, columns: usize) {
    for i in 1..=columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn summary(summary: &ProbabilitySummary, precision: usize) -> String {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let width = summary.width();
    let mut header = vec![Cell::new("Perc. Prob.").add_attribute(Attribute::Bold)];
    header.push(Cell::new("Files"));
    header.extend((0..width).map(|k| Cell::new(dimension_label(k)).fg(Color::Cyan)));
    table.add_row(header);

    for row in &summary.rows {
        let mut cells = vec![
            Cell::new(&row.probability).add_attribute(Attribute::Bold),
            Cell::new(row.files),
        ];
        cells.extend(row.averages.iter().map(|v| Cell::new(format_average(*v, precision))));
        table.add_row(cells);
    }

    right_align(&mut table, width + 1);
    format!("\nSize {}\n{}", summary.size, table)
}

pub fn totals(totals: &IndexedTotals) -> String {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let width = totals.aggregate.len().max(MIN_HEADER_DIMS);
    let mut header = vec![Cell::new("File").add_attribute(Attribute::Bold)];
    header.extend((0..width).map(|k| Cell::new(dimension_label(k)).fg(Color::Cyan)));
    table.add_row(header);

    for fv in &totals.files {
        let name = fv
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| fv.path.display().to_string());
        let mut cells = vec![Cell::new(name)];
        cells.extend(fv.counts.as_slice().iter().map(|&c| Cell::new(c)));
        table.add_row(cells);
    }

    let mut total_row = vec![Cell::new("Total").add_attribute(Attribute::Bold)];
    total_row.extend(
        totals
            .aggregate
            .totals
            .iter()
            .map(|&t| Cell::new(t).fg(Color::Green).add_attribute(Attribute::Bold)),
    );
    table.add_row(total_row);

    right_align(&mut table, width);
    format!("\nSize {}\n{}", totals.size, table)
}
