pub mod engine;
pub mod pipeline;
pub mod report;
pub mod solver;

pub use crate::domain::model::{AreaRequest, LoadSummary, Report, ReportRow, Solution};
pub use crate::domain::ports::{Console, Pipeline, Storage};
pub use crate::utils::error::Result;
