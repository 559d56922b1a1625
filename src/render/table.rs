//! Box-drawn grid of the report for the terminal.

use crate::domain::model::{Column, Report, ReportRow};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

pub const TABLE_TITLE: &str = "Lot parameters";
pub const MISSING: &str = "n/a";

/// Display text for one cell. Rounding is for display only.
pub fn format_cell(column: Column, row: &ReportRow) -> String {
    match column {
        Column::RequestedArea => format!("{:.0}", row.requested_area),
        _ => match column.value(row) {
            Some(value) => format!("{:.2}", value),
            None => MISSING.to_string(),
        },
    }
}

fn centered(text: impl Into<String>) -> Cell {
    Cell::new(text.into()).set_alignment(CellAlignment::Center)
}

/// Renders every row of the report under the short column labels.
pub fn render_table(report: &Report) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(Column::ALL.iter().map(|column| centered(column.short_label())));

    for row in report.rows() {
        table.add_row(
            Column::ALL
                .iter()
                .map(|&column| centered(format_cell(column, row))),
        );
    }

    let body = table.to_string();
    let width = body.lines().next().map_or(0, |line| line.chars().count());
    format!("{:^width$}\n{}", TABLE_TITLE, body, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::build_report;
    use crate::domain::model::AreaRequest;

    fn table(areas: &[f64]) -> String {
        let areas: Vec<AreaRequest> = areas.iter().copied().map(AreaRequest).collect();
        render_table(&build_report(&areas))
    }

    #[test]
    fn test_table_has_title_header_and_rows() {
        let rendered = table(&[1600.0, 2000.0]);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0].trim(), TABLE_TITLE);
        assert!(lines[2].contains("Lot area (m²)"));
        assert!(lines[2].contains("Front. dist. (3x)"));
        // title, top border, header, header rule, row, row rule, row, bottom border
        assert_eq!(lines.len(), 8);
        assert!(lines[4].contains(" 1600 "));
        assert!(lines[6].contains(" 2000 "));
    }

    #[test]
    fn test_rows_align_to_header_width() {
        let rendered = table(&[1600.0, 10.0, 123_456.0]);
        let widths: Vec<usize> = rendered
            .lines()
            .skip(1)
            .map(|line| line.chars().count())
            .collect();
        assert!(widths.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_values_rounded_for_display() {
        let rendered = table(&[1600.0]);
        let row = rendered.lines().nth(4).unwrap();
        assert!(row.contains(" 1600 "));
        assert!(row.contains(" 0.00 "));
        assert!(row.contains(" 40.00 "));
        assert!(row.contains(" 1600.00 "));
    }

    #[test]
    fn test_missing_row_prints_marker() {
        let rendered = table(&[10.0]);
        let row = rendered.lines().nth(4).unwrap();
        assert!(row.contains(" 10 "));
        assert_eq!(row.matches(MISSING).count(), 9);
    }

    #[test]
    fn test_requested_area_printed_as_whole_number() {
        let report = build_report(&[AreaRequest(99999999999999999999999.0)]);
        let cell = format_cell(Column::RequestedArea, &report.rows()[0]);
        assert!(!cell.contains('.'));
        assert!(cell.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_format_cell_keeps_underlying_value() {
        let report = build_report(&[AreaRequest(2000.0)]);
        let row = &report.rows()[0];
        let x = row.layout.unwrap().x;
        assert_eq!(format_cell(Column::X, row), format!("{:.2}", x));
        assert_ne!(x, format!("{:.2}", x).parse::<f64>().unwrap());
    }
}
