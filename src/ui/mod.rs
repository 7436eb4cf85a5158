// UI and formatting module

pub mod cards;
pub mod dashboard;
pub mod report;

// Re-export commonly used items for cleaner imports
pub use cards::{layout, Card, CardLine, Columns, Tone};
pub use dashboard::{run_dashboard, DashboardConfig};
pub use report::print_snapshot;
