use serde::{Deserialize, Serialize};

/// A requested lot area in m², as parsed from the input line.
///
/// Always a non-negative whole number; held as `f64` so digit strings of any
/// length are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AreaRequest(pub f64);

impl AreaRequest {
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Root of `(8x + 40)(7x + 40) = A` together with the lot it produces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub x: f64,
    pub width: f64,
    pub length: f64,
    pub computed_area: f64,
}

/// Populated payload of a report row. Every spacing field is a multiple of `x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LotLayout {
    pub x: f64,
    pub width: f64,
    pub length: f64,
    pub lateral_distance: f64,
    pub frontal_distance: f64,
    pub lateral_margin: f64,
    pub rear_margin: f64,
    pub front_margin: f64,
    pub computed_area: f64,
}

impl From<Solution> for LotLayout {
    fn from(solution: Solution) -> Self {
        let x = solution.x;
        Self {
            x,
            width: solution.width,
            length: solution.length,
            lateral_distance: x,
            frontal_distance: 3.0 * x,
            lateral_margin: 2.0 * x,
            rear_margin: 2.0 * x,
            front_margin: 2.0 * x,
            computed_area: solution.computed_area,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub requested_area: f64,
    /// `None` when the area has no non-negative root.
    pub layout: Option<LotLayout>,
}

impl ReportRow {
    pub fn solved(request: AreaRequest, solution: Solution) -> Self {
        Self {
            requested_area: request.value(),
            layout: Some(LotLayout::from(solution)),
        }
    }

    pub fn missing(request: AreaRequest) -> Self {
        Self {
            requested_area: request.value(),
            layout: None,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.layout.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Report {
    rows: Vec<ReportRow>,
}

impl Report {
    pub fn new(rows: Vec<ReportRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn solved_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_solved()).count()
    }

    /// `(requested area, x)` for every populated row, in report order.
    pub fn solved_points(&self) -> Vec<(f64, f64)> {
        self.rows
            .iter()
            .filter_map(|row| {
                row.layout
                    .as_ref()
                    .map(|layout| (row.requested_area, layout.x))
            })
            .collect()
    }
}

/// Table columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    RequestedArea,
    X,
    Width,
    Length,
    LateralDistance,
    FrontalDistance,
    LateralMargin,
    RearMargin,
    FrontMargin,
    ComputedArea,
}

impl Column {
    pub const ALL: [Column; 10] = [
        Column::RequestedArea,
        Column::X,
        Column::Width,
        Column::Length,
        Column::LateralDistance,
        Column::FrontalDistance,
        Column::LateralMargin,
        Column::RearMargin,
        Column::FrontMargin,
        Column::ComputedArea,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Column::RequestedArea => "Requested area",
            Column::X => "x",
            Column::Width => "Width W",
            Column::Length => "Length L",
            Column::LateralDistance => "Internal lateral distance (x)",
            Column::FrontalDistance => "Frontal distance between rows (3x)",
            Column::LateralMargin => "Lot lateral margin (2x)",
            Column::RearMargin => "Lot rear margin (2x)",
            Column::FrontMargin => "Lot front margin (2x)",
            Column::ComputedArea => "Computed area",
        }
    }

    pub fn short_label(self) -> &'static str {
        match self {
            Column::RequestedArea => "Lot area (m²)",
            Column::X => "x",
            Column::Width => "Width W (m)",
            Column::Length => "Length L (m)",
            Column::LateralDistance => "Lat. dist. (x)",
            Column::FrontalDistance => "Front. dist. (3x)",
            Column::LateralMargin => "Lat. margin (2x)",
            Column::RearMargin => "Rear margin (2x)",
            Column::FrontMargin => "Front margin (2x)",
            Column::ComputedArea => "Calc. area (m²)",
        }
    }

    pub fn value(self, row: &ReportRow) -> Option<f64> {
        let layout = row.layout.as_ref();
        match self {
            Column::RequestedArea => Some(row.requested_area),
            Column::X => layout.map(|l| l.x),
            Column::Width => layout.map(|l| l.width),
            Column::Length => layout.map(|l| l.length),
            Column::LateralDistance => layout.map(|l| l.lateral_distance),
            Column::FrontalDistance => layout.map(|l| l.frontal_distance),
            Column::LateralMargin => layout.map(|l| l.lateral_margin),
            Column::RearMargin => layout.map(|l| l.rear_margin),
            Column::FrontMargin => layout.map(|l| l.front_margin),
            Column::ComputedArea => layout.map(|l| l.computed_area),
        }
    }
}

/// Outcome of the load stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub chart_path: Option<String>,
    pub rows: usize,
    pub solved: usize,
}
