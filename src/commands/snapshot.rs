use anyhow::Result;
use clap::ArgMatches;

use crate::platform::is_elevated;
use crate::ui::report::print_snapshot;

/// Collect once and print the report
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let collector = super::build_collector(matches);
    let snapshot = collector.collect();

    print_snapshot(&snapshot, is_elevated());
    Ok(())
}
