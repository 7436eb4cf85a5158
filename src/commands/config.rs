use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;

use crate::core::Config;

/// Show where the config lives and the fan labels it defines
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let path = super::config_path(matches).context("Could not determine home directory")?;

    println!("{}", "Config file:".white());
    println!("{}", path.display().to_string().cyan().bold());

    if !path.exists() {
        println!();
        println!("{}", "No config file found.".yellow());
        print_example();
        return Ok(());
    }

    let config = Config::try_load_from(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    println!();
    if config.fan_labels.is_empty() {
        println!("{}", "No fan labels configured.".yellow());
        print_example();
        return Ok(());
    }

    println!("{}", "Fan labels:".white());
    let mut labels: Vec<_> = config.fan_labels.iter().collect();
    labels.sort();
    for (fan, label) in labels {
        println!("  {} → {}", fan.cyan(), label.bold());
    }

    Ok(())
}

fn print_example() {
    println!();
    println!("{}", "Example:".dimmed());
    println!("  {}", "fan_labels:".dimmed());
    println!("  {}", "  Fan1: Front intake".dimmed());
    println!("  {}", "  Fan2: Rear exhaust".dimmed());
}
