// Command handlers module
pub mod config;
pub mod dashboard;
pub mod snapshot;

use std::path::PathBuf;

use clap::ArgMatches;

use crate::core::config::Config;
use crate::core::sysfs::SysRoot;
use crate::core::system_info::Collector;
use crate::platform::identity_providers;

/// Root directory the readers resolve kernel paths against (`--root`)
pub fn sys_root(matches: &ArgMatches) -> SysRoot {
    matches
        .get_one::<PathBuf>("root")
        .map(|root| SysRoot::new(root.clone()))
        .unwrap_or_else(SysRoot::host)
}

/// Path of the config file: `--config`, else the per-user default
pub fn config_path(matches: &ArgMatches) -> Option<PathBuf> {
    matches
        .get_one::<PathBuf>("config")
        .cloned()
        .or_else(Config::get_config_path)
}

pub fn load_config(matches: &ArgMatches) -> Config {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Collector for the live system or the `--root` tree
pub fn build_collector(matches: &ArgMatches) -> Collector {
    let providers = identity_providers();
    Collector::new(sys_root(matches), &providers, load_config(matches))
}
