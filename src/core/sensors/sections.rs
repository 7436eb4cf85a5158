//! Display rows for the sensor column.

use std::collections::BTreeMap;
use std::fmt;

use super::categorize::{categorize, SensorBuckets};
use super::scraper::SensorSample;
use crate::core::config::{normalize_fan_key, Config};

pub const MOTHERBOARD_THRESHOLD: f64 = 60.0;
pub const CPU_THRESHOLD: f64 = 80.0;
pub const GPU_THRESHOLD: f64 = 80.0;
pub const DRIVE_THRESHOLD: f64 = 60.0;

/// Fans with any of these in their name are not case fans
const NON_CASE_FAN_KEYWORDS: &[&str] = &["cpu", "gpu", "mobo", "board"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowValue {
    Celsius(f64),
    Rpm(u32),
}

impl fmt::Display for RowValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowValue::Celsius(celsius) => write!(f, "{:.1}°C", celsius),
            RowValue::Rpm(rpm) => write!(f, "{} rpm", rpm),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SensorRow {
    pub label: String,
    pub value: RowValue,
    /// At or above the section threshold
    pub hot: bool,
}

impl SensorRow {
    fn temperature(label: String, celsius: f64, threshold: f64) -> Self {
        Self {
            label,
            value: RowValue::Celsius(celsius),
            hot: celsius >= threshold,
        }
    }

    fn fan(label: String, rpm: u32) -> Self {
        Self {
            label,
            value: RowValue::Rpm(rpm),
            hot: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SensorSection {
    pub title: &'static str,
    pub rows: Vec<SensorRow>,
}

impl SensorSection {
    fn new(title: &'static str) -> Self {
        Self {
            title,
            rows: Vec::new(),
        }
    }

    fn push_temperatures(&mut self, temps: &BTreeMap<String, f64>, threshold: f64) {
        self.rows.extend(temps.iter().map(|(name, &celsius)| {
            SensorRow::temperature(temperature_row_label(name), celsius, threshold)
        }));
    }

    fn push_fans(&mut self, fans: &BTreeMap<String, u32>, config: &Config) {
        self.rows.extend(
            fans.iter()
                .map(|(name, &rpm)| SensorRow::fan(fan_row_label(name, config), rpm)),
        );
    }
}

/// The sensor column, top to bottom
#[derive(Debug, Clone, PartialEq)]
pub struct SensorSections {
    pub motherboard: SensorSection,
    pub cpu: SensorSection,
    pub fans: SensorSection,
    pub gpu: SensorSection,
    pub drives: SensorSection,
}

impl SensorSections {
    pub fn all(&self) -> [&SensorSection; 5] {
        [
            &self.motherboard,
            &self.cpu,
            &self.fans,
            &self.gpu,
            &self.drives,
        ]
    }
}

impl Default for SensorSections {
    fn default() -> Self {
        build_from_buckets(
            &SensorSample::default(),
            &SensorBuckets::default(),
            &BTreeMap::new(),
            &Config::default(),
        )
    }
}

/// Categorize a sample and lay it out as sections. `drm_temps` are the
/// GPU temperatures found under `/sys/class/drm`.
pub fn build_sections(
    sample: &SensorSample,
    drm_temps: &BTreeMap<String, f64>,
    config: &Config,
) -> SensorSections {
    let buckets = categorize(sample);
    build_from_buckets(sample, &buckets, drm_temps, config)
}

fn build_from_buckets(
    sample: &SensorSample,
    buckets: &SensorBuckets,
    drm_temps: &BTreeMap<String, f64>,
    config: &Config,
) -> SensorSections {
    // Motherboard: zero readings are unconnected headers
    let mut motherboard = SensorSection::new("Motherboard Temp");
    let board_temps: BTreeMap<String, f64> = buckets
        .motherboard_temps
        .iter()
        .filter(|(_, &celsius)| celsius != 0.0)
        .map(|(name, &celsius)| (name.clone(), celsius))
        .collect();
    motherboard.push_temperatures(&board_temps, MOTHERBOARD_THRESHOLD);
    motherboard.push_fans(&buckets.motherboard_fans, config);

    let mut cpu = SensorSection::new("CPU Temp");
    cpu.rows = core_rows(&buckets.cpu_temps);
    cpu.push_fans(&buckets.cpu_fans, config);

    let mut fans = SensorSection::new("Fans");
    fans.rows = case_fans(&sample.fan_speeds, config)
        .into_iter()
        .map(|(label, rpm)| SensorRow::fan(label, rpm))
        .collect();

    let mut gpu = SensorSection::new("GPU Temp & Fan");
    let mut gpu_temps = buckets.gpu_temps.clone();
    if gpu_temps.is_empty() {
        gpu_temps.extend(
            sample
                .temperatures
                .iter()
                .filter(|(name, &celsius)| name.to_lowercase().contains("gpu") && celsius != 0.0)
                .map(|(name, &celsius)| (name.clone(), celsius)),
        );
    }
    gpu_temps.extend(drm_temps.iter().map(|(name, &celsius)| (name.clone(), celsius)));
    gpu.push_temperatures(&gpu_temps, GPU_THRESHOLD);
    gpu.push_fans(&buckets.gpu_fans, config);

    let mut drives = SensorSection::new("Drive Temp");
    drives.push_temperatures(&buckets.drive_temps, DRIVE_THRESHOLD);

    SensorSections {
        motherboard,
        cpu,
        fans,
        gpu,
        drives,
    }
}

/// `Core N` rows, one per core index, ascending. The first name seen for
/// an index wins.
fn core_rows(cpu_temps: &BTreeMap<String, f64>) -> Vec<SensorRow> {
    let mut cores: BTreeMap<u32, f64> = BTreeMap::new();
    for (name, &celsius) in cpu_temps {
        if let Some(index) = parse_core_index(name) {
            cores.entry(index).or_insert(celsius);
        }
    }

    cores
        .into_iter()
        .map(|(index, celsius)| {
            SensorRow::temperature(format!("Core {}", index), celsius, CPU_THRESHOLD)
        })
        .collect()
}

/// Core number from `"Core 3"`, `"core 3 temp"` or `"core3"`. Any run of
/// blanks may separate the prefix from the number.
pub fn parse_core_index(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    let rest = lower.strip_prefix("core")?;

    rest.strip_prefix(is_blank)
        .map(skip_blanks)
        .and_then(leading_number)
        .or_else(|| leading_number(skip_blanks(rest)))
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn skip_blanks(text: &str) -> &str {
    text.trim_start_matches(is_blank)
}

fn leading_number(text: &str) -> Option<u32> {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text[..end].parse().ok()
}

/// Case fans keyed by display label: normalized `FanN`, or the user's label
/// for it.
fn case_fans(fans: &BTreeMap<String, u32>, config: &Config) -> BTreeMap<String, u32> {
    fans.iter()
        .filter(|(name, _)| {
            let lower = name.to_lowercase();
            !NON_CASE_FAN_KEYWORDS
                .iter()
                .any(|keyword| lower.contains(keyword))
        })
        .map(|(name, &rpm)| {
            let normalized = normalize_fan_key(name);
            let label = config
                .fan_label(&normalized)
                .map(str::to_string)
                .unwrap_or(normalized);
            (label, rpm)
        })
        .collect()
}

pub fn temperature_row_label(name: &str) -> String {
    let lower = name.to_lowercase();

    if lower.contains("coretemp") {
        // coretemp channel N is core N-1
        let channel = lower
            .rfind("temp")
            .and_then(|idx| leading_number(&lower[idx + 4..]));
        return match channel {
            Some(n) => format!("Core {} Temp", n as i64 - 1),
            None => name.to_string(),
        };
    }

    if lower.contains("cpu") {
        "CPU".to_string()
    } else if lower.contains("pch") {
        "PCH".to_string()
    } else if lower.contains("mobo") || lower.contains("board") {
        "Motherboard".to_string()
    } else if lower.contains("gpu") {
        if lower.contains("amdgpu") {
            "GPU: amdgpu".to_string()
        } else if lower.contains("nvidia") {
            "GPU: nvidia".to_string()
        } else {
            "GPU".to_string()
        }
    } else {
        name.to_string()
    }
}

pub fn fan_row_label(name: &str, config: &Config) -> String {
    let lower = name.to_lowercase();

    if lower.contains("gpu") {
        if lower.contains("amdgpu") {
            "GPU Fan (amdgpu)".to_string()
        } else if lower.contains("nvidia") {
            "GPU Fan (nvidia)".to_string()
        } else {
            "GPU Fan".to_string()
        }
    } else if lower.contains("cpu") {
        "CPU Fan".to_string()
    } else if lower.contains("fan") {
        config.fan_label(name).unwrap_or(name).to_string()
    } else if lower.contains("mobo") || lower.contains("board") {
        "Motherboard Fan".to_string()
    } else {
        name.to_string()
    }
}
