use super::{COLUMNS, DomainLabels, ReportRow};

/// Renders rows as a fixed-column text table: a header, a dashed divider and
/// one line per row, every column padded to its widest value.
pub fn format_table(rows: &[ReportRow], labels: &DomainLabels) -> String {
    let cells: Vec<[String; 5]> = rows.iter().map(|row| row.columns(labels)).collect();

    let mut widths = COLUMNS.map(|name| name.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render = |values: &[&str]| {
        values
            .iter()
            .zip(widths)
            .map(|(value, width)| format!("{value:<width$}"))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    let mut lines = Vec::with_capacity(cells.len() + 2);
    lines.push(render(&COLUMNS));
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &cells {
        let values: Vec<&str> = row.iter().map(String::as_str).collect();
        lines.push(render(&values));
    }
    lines.join("\n")
}
