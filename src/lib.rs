pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

pub use config::cli::{LocalStorage, TerminalConsole};
pub use config::CliConfig;

pub use core::{engine::ReportEngine, pipeline::LotPipeline};
pub use utils::error::{LotError, Result};
