use std::io;
use thiserror::Error;

/// Custom error type for JayInsights
#[derive(Error, Debug)]
pub enum InsightError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("DMI memory tables unavailable: {0}")]
    DmiUnavailable(String),

    #[error("GPU not available: {0}")]
    GpuNotAvailable(String),
}

/// Result type alias for JayInsights
pub type Result<T> = std::result::Result<T, InsightError>;

impl InsightError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        InsightError::Config(msg.into())
    }

    pub fn dmi_unavailable<S: Into<String>>(msg: S) -> Self {
        InsightError::DmiUnavailable(msg.into())
    }

    pub fn gpu_not_available<S: Into<String>>(msg: S) -> Self {
        InsightError::GpuNotAvailable(msg.into())
    }
}
