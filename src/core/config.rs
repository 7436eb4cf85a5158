use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{InsightError, Result};

static FAN_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)fan[^0-9]*([0-9]+)").expect("valid fan key pattern"));

/// User configuration, `~/.config/jayinsights/config.yaml`
///
/// ```yaml
/// fan_labels:
///   Fan1: Front intake
///   Fan2: Rear exhaust
/// ```
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Normalized fan identifier (`Fan1`) to display label
    #[serde(default)]
    pub fan_labels: HashMap<String, String>,
}

impl Config {
    /// Load the per-user config. Never fails: a missing or broken file
    /// yields the default (empty) config.
    pub fn load() -> Self {
        match Self::get_config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::warn!("Could not determine home directory, using default config");
                Config::default()
            }
        }
    }

    /// Load from an explicit path, falling back to the default config.
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load_from(path) {
            Ok(config) => config,
            Err(InsightError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config file at {}", path.display());
                Config::default()
            }
            Err(e) => {
                log::warn!("Error reading config file {}: {}", path.display(), e);
                Config::default()
            }
        }
    }

    pub fn try_load_from(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;

        // An empty file is a valid "no settings" config
        if data.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&data).map_err(|e| InsightError::config(e.to_string()))
    }

    /// `<home>/.config/jayinsights/config.yaml`, where `<home>` belongs to
    /// the invoking user when running under sudo.
    pub fn get_config_path() -> Option<PathBuf> {
        let home = std::env::var("SUDO_USER")
            .ok()
            .filter(|user| !user.is_empty())
            .and_then(|user| crate::platform::home_dir_of(&user))
            .or_else(dirs::home_dir)?;

        Some(home.join(".config").join("jayinsights").join("config.yaml"))
    }

    /// Configured label for a normalized fan key; empty labels are ignored.
    pub fn fan_label(&self, normalized: &str) -> Option<&str> {
        self.fan_labels
            .get(normalized)
            .map(String::as_str)
            .filter(|label| !label.is_empty())
    }
}

/// Normalize a fan sensor name: `"fan1_input"`, `"Fan #1"`, `"FAN-1"` and
/// `"nct6798 Fan1"` all become `"Fan1"`. Names without a fan number are
/// returned trimmed.
pub fn normalize_fan_key(name: &str) -> String {
    match FAN_KEY_RE.captures(name) {
        Some(caps) => format!("Fan{}", &caps[1]),
        None => name.trim().to_string(),
    }
}
