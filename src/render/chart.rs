//! Line chart of `x` against the requested area.
//!
//! The chart is composed as SVG on an 800×600 canvas (8×6 in at 100 units
//! per inch) and rasterised at 3× so the PNG is 8×6 in at 300 DPI.

use crate::domain::model::Report;
use crate::utils::error::{LotError, Result};
use png::{BitDepth, ColorType, Encoder, PixelDimensions, Unit};
use resvg::{tiny_skia, usvg};

pub const CHART_FILE_NAME: &str = "lot_area_vs_x.png";

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;
const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 70.0;
const TICKS: usize = 5;

const DPI: u32 = 300;
const SCALE: f32 = 3.0;
/// 300 px/in expressed in px/m for the pHYs chunk.
const PIXELS_PER_METER: u32 = 11_811;

/// Closed interval an axis spans. Never zero-width.
#[derive(Debug, Clone, Copy, PartialEq)]
struct AxisRange {
    min: f64,
    max: f64,
}

impl AxisRange {
    fn from_values(values: impl Iterator<Item = f64>) -> Self {
        let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

        if !min.is_finite() || !max.is_finite() {
            return Self { min: 0.0, max: 1.0 };
        }

        let span = max - min;
        let pad = if span > 0.0 {
            span * 0.05
        } else if min != 0.0 {
            min.abs() * 0.05
        } else {
            1.0
        };
        Self {
            min: min - pad,
            max: max + pad,
        }
    }

    fn fraction(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }

    fn ticks(&self) -> impl Iterator<Item = f64> + '_ {
        let step = (self.max - self.min) / (TICKS - 1) as f64;
        (0..TICKS).map(move |i| self.min + step * i as f64)
    }
}

struct Plot {
    x_range: AxisRange,
    y_range: AxisRange,
}

impl Plot {
    fn left(&self) -> f64 {
        MARGIN_LEFT
    }

    fn right(&self) -> f64 {
        WIDTH - MARGIN_RIGHT
    }

    fn top(&self) -> f64 {
        MARGIN_TOP
    }

    fn bottom(&self) -> f64 {
        HEIGHT - MARGIN_BOTTOM
    }

    fn px(&self, area: f64) -> f64 {
        self.left() + self.x_range.fraction(area) * (self.right() - self.left())
    }

    fn py(&self, x: f64) -> f64 {
        self.bottom() - self.y_range.fraction(x) * (self.bottom() - self.top())
    }
}

fn tick_label(value: f64) -> String {
    if value.abs() >= 100.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Builds the SVG document for the report. Rows without a solution are left out.
pub fn build_chart_svg(report: &Report) -> String {
    let points = report.solved_points();
    let plot = Plot {
        x_range: AxisRange::from_values(points.iter().map(|(area, _)| *area)),
        y_range: AxisRange::from_values(points.iter().map(|(_, x)| *x)),
    };

    let mut grid = String::new();
    for tick in plot.x_range.ticks() {
        let x = plot.px(tick);
        grid.push_str(&format!(
            r##"  <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="#d1d5db" stroke-width="0.8"/>
  <text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="12" fill="#374151">{}</text>
"##,
            x,
            plot.top(),
            x,
            plot.bottom(),
            x,
            plot.bottom() + 20.0,
            tick_label(tick)
        ));
    }
    for tick in plot.y_range.ticks() {
        let y = plot.py(tick);
        grid.push_str(&format!(
            r##"  <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="#d1d5db" stroke-width="0.8"/>
  <text x="{:.1}" y="{:.1}" text-anchor="end" font-size="12" fill="#374151">{}</text>
"##,
            plot.left(),
            y,
            plot.right(),
            y,
            plot.left() - 8.0,
            y + 4.0,
            tick_label(tick)
        ));
    }

    let mut series = String::new();
    if !points.is_empty() {
        let mut path = String::from("M");
        for (i, (area, x)) in points.iter().enumerate() {
            let cmd = if i == 0 {
                format!("{:.2},{:.2}", plot.px(*area), plot.py(*x))
            } else {
                format!(" L{:.2},{:.2}", plot.px(*area), plot.py(*x))
            };
            path.push_str(&cmd);
        }
        series.push_str(&format!(
            r##"  <path d="{}" fill="none" stroke="#1f77b4" stroke-width="2"/>
"##,
            path
        ));
        for (area, x) in &points {
            series.push_str(&format!(
                r##"  <circle cx="{:.2}" cy="{:.2}" r="3" fill="#1f77b4"/>
"##,
                plot.px(*area),
                plot.py(*x)
            ));
        }
    }

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
  <rect x="0" y="0" width="{w}" height="{h}" fill="white"/>
  <text x="{cx:.1}" y="35" text-anchor="middle" font-size="18" fill="#111827">Lot area vs distance x</text>
{grid}  <line x1="{l:.1}" y1="{b:.1}" x2="{r:.1}" y2="{b:.1}" stroke="#111827" stroke-width="1.2"/>
  <line x1="{l:.1}" y1="{t:.1}" x2="{l:.1}" y2="{b:.1}" stroke="#111827" stroke-width="1.2"/>
{series}  <text x="{cx:.1}" y="{xl:.1}" text-anchor="middle" font-size="14" fill="#111827">Lot area (m²)</text>
  <text x="20" y="{cy:.1}" text-anchor="middle" font-size="14" fill="#111827" transform="rotate(-90, 20, {cy:.1})">Lateral distance x (m)</text>
</svg>
"##,
        w = WIDTH,
        h = HEIGHT,
        cx = (plot.left() + plot.right()) / 2.0,
        cy = (plot.top() + plot.bottom()) / 2.0,
        l = plot.left(),
        r = plot.right(),
        t = plot.top(),
        b = plot.bottom(),
        xl = HEIGHT - 20.0,
    )
}

/// Renders the chart as a 300 DPI PNG. The drawing surface lives only for this call.
pub fn render_chart_png(report: &Report) -> Result<Vec<u8>> {
    let svg = build_chart_svg(report);

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(&svg, &options)
        .map_err(|err| LotError::chart(format!("SVG parse failed: {err}")))?;

    let width = (WIDTH as f32 * SCALE) as u32;
    let height = (HEIGHT as f32 * SCALE) as u32;
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| LotError::chart("Pixmap allocation failed"))?;
    pixmap.fill(tiny_skia::Color::WHITE);
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(SCALE, SCALE),
        &mut pixmap.as_mut(),
    );

    let mut out = Vec::new();
    {
        let mut encoder = Encoder::new(&mut out, width, height);
        encoder.set_color(ColorType::Rgba);
        encoder.set_depth(BitDepth::Eight);
        encoder.set_pixel_dims(Some(PixelDimensions {
            xppu: PIXELS_PER_METER,
            yppu: PIXELS_PER_METER,
            unit: Unit::Meter,
        }));
        encoder
            .write_header()
            .map_err(|err| LotError::chart(err.to_string()))?
            .write_image_data(pixmap.data())
            .map_err(|err| LotError::chart(err.to_string()))?;
    }

    tracing::debug!(
        "Rendered chart {}x{} px at {} DPI ({} bytes)",
        width,
        height,
        DPI,
        out.len()
    );
    Ok(out)
}
