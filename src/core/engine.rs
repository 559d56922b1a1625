use crate::core::{LoadSummary, Pipeline};
use crate::utils::error::Result;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn into_pipeline(self) -> P {
        self.pipeline
    }

    pub fn run(&mut self) -> Result<LoadSummary> {
        tracing::info!("Starting lot report...");

        // Extract
        let areas = self.pipeline.extract()?;
        tracing::info!("Extracted {} area(s)", areas.len());

        // Transform
        let report = self.pipeline.transform(areas);
        tracing::info!(
            "Built {} row(s), {} with a solution",
            report.len(),
            report.solved_count()
        );

        // Load
        let summary = self.pipeline.load(report)?;
        match &summary.chart_path {
            Some(path) => tracing::info!("Chart saved to: {}", path),
            None => tracing::info!("No rows to chart"),
        }

        Ok(summary)
    }
}
