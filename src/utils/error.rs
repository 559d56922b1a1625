use thiserror::Error;

#[derive(Error, Debug)]
pub enum LotError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Chart rendering error: {message}")]
    ChartError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Output,
    Rendering,
}

impl LotError {
    pub fn chart(message: impl Into<String>) -> Self {
        Self::ChartError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) => ErrorCategory::Output,
            Self::SerializationError(_) | Self::ChartError { .. } => ErrorCategory::Rendering,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read input or write output: {}", e),
            Self::SerializationError(e) => format!("The report could not be serialized: {}", e),
            Self::ChartError { message } => format!("The chart could not be drawn: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Output => {
                "Check that the working directory is writable and the terminal is attached"
            }
            ErrorCategory::Rendering => {
                "Re-run with --verbose to see the rows that were being rendered"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, LotError>;
