use anyhow::Result;
use clap::{Arg, Command};
use std::path::PathBuf;

use jayinsights::commands;

fn build_cli() -> Command {
    Command::new("jayinsights")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Hardware dashboard for Linux: memory banks, sensors, drives and more")
        .arg(
            Arg::new("interval")
                .short('i')
                .long("interval")
                .value_name("MS")
                .help("Refresh interval in milliseconds")
                .value_parser(clap::value_parser!(u64).range(100..))
                .default_value("1000")
                .global(true),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .value_name("DIR")
                .help("Read /sys, /proc and /dev from this directory instead of /")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Config file (default: ~/.config/jayinsights/config.yaml)")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
        )
        .subcommand(Command::new("dashboard").about("Show the live dashboard (default)"))
        .subcommand(Command::new("snapshot").about("Print one snapshot as text and exit"))
        .subcommand(Command::new("config").about("Show the config file location and fan labels"))
}

fn main() -> Result<()> {
    jayinsights::init_logging();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("snapshot", sub_matches)) => commands::snapshot::execute(sub_matches),
        Some(("config", sub_matches)) => commands::config::execute(sub_matches),
        Some(("dashboard", sub_matches)) => commands::dashboard::execute(sub_matches),
        _ => commands::dashboard::execute(&matches),
    }
}
