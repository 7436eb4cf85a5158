//! Dashboard command handler.
//!
//! Runs the hardware dashboard in the terminal until the user quits.

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::ui::dashboard::{run_dashboard, DashboardConfig};

/// Execute the dashboard command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let interval = matches.get_one::<u64>("interval").copied().unwrap_or(1000);

    let config = DashboardConfig {
        interval_ms: interval,
        ..DashboardConfig::default()
    };

    let collector = super::build_collector(matches);
    run_dashboard(collector, config).context("Failed to run dashboard")
}
