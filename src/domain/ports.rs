use crate::domain::model::{AreaRequest, LoadSummary, Report};
use crate::utils::error::Result;

/// Interactive text surface: one blocking prompt in, rendered text out.
pub trait Console {
    /// Returns the entered line without its terminator. EOF yields an empty string.
    fn read_line(&mut self, prompt: &str) -> Result<String>;
    fn show(&mut self, text: &str) -> Result<()>;
}

pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait Pipeline {
    fn extract(&mut self) -> Result<Vec<AreaRequest>>;
    fn transform(&self, areas: Vec<AreaRequest>) -> Report;
    fn load(&mut self, report: Report) -> Result<LoadSummary>;
}
