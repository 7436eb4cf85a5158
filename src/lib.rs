// JayInsights Library - Public API

// Re-export error types
pub mod error;
pub use error::{InsightError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use core::config::Config;

// Initialize logging
pub fn init_logging() {
    // Anything above warn would scribble over the dashboard
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
