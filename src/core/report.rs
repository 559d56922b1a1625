use crate::core::solver::solve_for_area;
use crate::domain::model::{AreaRequest, Report, ReportRow};
use csv::{ReaderBuilder, Terminator, Trim};

/// Parses a comma-separated line of areas.
///
/// Only tokens made entirely of ASCII digits survive; negatives, decimals,
/// blanks and anything else are dropped without being reported. Order and
/// duplicates are kept.
pub fn parse_areas(input: &str) -> Vec<AreaRequest> {
    // Only '\n' ends the line; a stray '\r' stays inside its token.
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .terminator(Terminator::Any(b'\n'))
        .trim(Trim::All)
        .from_reader(input.as_bytes());

    let mut areas = Vec::new();
    // Everything after the first line is ignored; the prompt reads a single line.
    match reader.records().next() {
        Some(Ok(record)) => areas.extend(record.iter().filter_map(parse_token)),
        Some(Err(e)) => tracing::debug!("Skipping unreadable input line: {}", e),
        None => {}
    }

    tracing::debug!("Parsed {} area(s) from input", areas.len());
    areas
}

fn parse_token(token: &str) -> Option<AreaRequest> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        tracing::trace!("Skipping token {:?}", token);
        return None;
    }

    token.parse::<f64>().ok().map(AreaRequest)
}

/// One row per request, in request order.
pub fn build_report(areas: &[AreaRequest]) -> Report {
    let rows = areas
        .iter()
        .map(|&request| match solve_for_area(request.value()) {
            Some(solution) => ReportRow::solved(request, solution),
            None => {
                tracing::debug!("No non-negative root for area {}", request.value());
                ReportRow::missing(request)
            }
        })
        .collect();

    Report::new(rows)
}
