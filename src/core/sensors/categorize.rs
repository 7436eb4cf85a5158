//! Buckets sensor names by the component they most likely belong to.

use std::collections::BTreeMap;

use super::scraper::SensorSample;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempCategory {
    Motherboard,
    Cpu,
    Gpu,
    Drive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanCategory {
    Cpu,
    Gpu,
    Motherboard,
}

/// How a rule matches a lower-cased sensor name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keywords {
    Prefix(&'static str),
    Any(&'static [&'static str]),
}

impl Keywords {
    fn matches(&self, lower: &str) -> bool {
        match self {
            Keywords::Prefix(prefix) => lower.starts_with(prefix),
            Keywords::Any(needles) => needles.iter().any(|needle| lower.contains(needle)),
        }
    }
}

const GPU_KEYWORDS: &[&str] = &["gpu"];
const BOARD_KEYWORDS: &[&str] = &["mobo", "board", "pch"];

/// Only `Core N` style names count as CPU, so package sensors
/// (`Package id 0`) fall through and are dropped.
pub const TEMPERATURE_RULES: &[(TempCategory, Keywords)] = &[
    (TempCategory::Cpu, Keywords::Prefix("core ")),
    (TempCategory::Gpu, Keywords::Any(GPU_KEYWORDS)),
    (TempCategory::Drive, Keywords::Any(&["hd", "nvme", "disk"])),
    (TempCategory::Motherboard, Keywords::Any(BOARD_KEYWORDS)),
];

pub const FAN_RULES: &[(FanCategory, Keywords)] = &[
    (FanCategory::Cpu, Keywords::Any(&["cpu"])),
    (FanCategory::Gpu, Keywords::Any(GPU_KEYWORDS)),
    (FanCategory::Motherboard, Keywords::Any(BOARD_KEYWORDS)),
];

/// First matching rule wins; matching is case-insensitive.
pub fn classify_with<C: Copy>(rules: &[(C, Keywords)], name: &str) -> Option<C> {
    let lower = name.to_lowercase();
    rules
        .iter()
        .find(|(_, keywords)| keywords.matches(&lower))
        .map(|(category, _)| *category)
}

pub fn classify_temperature(name: &str) -> Option<TempCategory> {
    classify_temperature_with(TEMPERATURE_RULES, name)
}

pub fn classify_temperature_with(
    rules: &[(TempCategory, Keywords)],
    name: &str,
) -> Option<TempCategory> {
    classify_with(rules, name)
}

pub fn classify_fan(name: &str) -> Option<FanCategory> {
    classify_fan_with(FAN_RULES, name)
}

pub fn classify_fan_with(rules: &[(FanCategory, Keywords)], name: &str) -> Option<FanCategory> {
    classify_with(rules, name)
}

/// Categorized readings of one sample
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SensorBuckets {
    pub motherboard_temps: BTreeMap<String, f64>,
    pub cpu_temps: BTreeMap<String, f64>,
    pub gpu_temps: BTreeMap<String, f64>,
    pub drive_temps: BTreeMap<String, f64>,
    pub cpu_fans: BTreeMap<String, u32>,
    pub gpu_fans: BTreeMap<String, u32>,
    pub motherboard_fans: BTreeMap<String, u32>,
}

/// Split a sample into buckets. Unmatched names land in no bucket.
pub fn categorize(sample: &SensorSample) -> SensorBuckets {
    let mut buckets = SensorBuckets::default();

    for (name, &celsius) in &sample.temperatures {
        let bucket = match classify_temperature(name) {
            Some(TempCategory::Cpu) => &mut buckets.cpu_temps,
            Some(TempCategory::Gpu) => &mut buckets.gpu_temps,
            Some(TempCategory::Drive) => &mut buckets.drive_temps,
            Some(TempCategory::Motherboard) => &mut buckets.motherboard_temps,
            None => continue,
        };
        bucket.insert(name.clone(), celsius);
    }

    for (name, &rpm) in &sample.fan_speeds {
        let bucket = match classify_fan(name) {
            Some(FanCategory::Cpu) => &mut buckets.cpu_fans,
            Some(FanCategory::Gpu) => &mut buckets.gpu_fans,
            Some(FanCategory::Motherboard) => &mut buckets.motherboard_fans,
            None => continue,
        };
        bucket.insert(name.clone(), rpm);
    }

    buckets
}
