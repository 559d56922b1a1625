use crate::core::report::{build_report, parse_areas};
use crate::core::{AreaRequest, Console, LoadSummary, Pipeline, Report, Storage};
use crate::render::chart::{render_chart_png, CHART_FILE_NAME};
use crate::render::table::render_table;
use crate::utils::error::Result;

pub const PROMPT: &str = "Enter areas separated by commas (e.g. 2000,3000,5000): ";
pub const NO_CHART_DATA: &str = "No valid data to generate the chart.";
pub const NO_TABLE_DATA: &str = "No valid data to plot the table.";

pub struct LotPipeline<T: Console, S: Storage> {
    console: T,
    storage: S,
}

impl<T: Console, S: Storage> LotPipeline<T, S> {
    pub fn new(console: T, storage: S) -> Self {
        Self { console, storage }
    }

    pub fn into_parts(self) -> (T, S) {
        (self.console, self.storage)
    }

    fn load_chart(&mut self, report: &Report) -> Result<Option<String>> {
        if report.is_empty() {
            self.console.show(&format!("\n{}", NO_CHART_DATA))?;
            return Ok(None);
        }

        let png = render_chart_png(report)?;
        tracing::debug!("Writing chart ({} bytes) to storage", png.len());
        self.storage.write_file(CHART_FILE_NAME, &png)?;
        self.console.show(&format!("\nChart generated: {}", CHART_FILE_NAME))?;
        Ok(Some(CHART_FILE_NAME.to_string()))
    }

    fn load_table(&mut self, report: &Report) -> Result<()> {
        if report.is_empty() {
            return self.console.show(NO_TABLE_DATA);
        }

        self.console.show(&render_table(report))
    }
}

impl<T: Console, S: Storage> Pipeline for LotPipeline<T, S> {
    fn extract(&mut self) -> Result<Vec<AreaRequest>> {
        let line = self.console.read_line(PROMPT)?;
        tracing::debug!("Read input line: {:?}", line);
        Ok(parse_areas(&line))
    }

    fn transform(&self, areas: Vec<AreaRequest>) -> Report {
        build_report(&areas)
    }

    fn load(&mut self, report: Report) -> Result<LoadSummary> {
        if tracing::enabled!(tracing::Level::DEBUG) {
            tracing::debug!("Report rows: {}", serde_json::to_string(&report)?);
        }

        let chart_path = self.load_chart(&report)?;
        self.load_table(&report)?;

        Ok(LoadSummary {
            chart_path,
            rows: report.len(),
            solved: report.solved_count(),
        })
    }
}
