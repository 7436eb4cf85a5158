use std::collections::{BTreeMap, HashSet};

use crate::core::sysfs::{SysRoot, NOT_AVAILABLE};
use crate::core::system_info::types::CpuInfo;

const CPUINFO: &str = "/proc/cpuinfo";

pub fn collect(root: &SysRoot) -> CpuInfo {
    match root.read_to_string(CPUINFO) {
        Some(raw) => parse_cpuinfo(&raw),
        None => CpuInfo::unavailable(),
    }
}

/// Fields of one `processor` block that matter here
#[derive(Debug, Default)]
struct ProcessorBlock<'a> {
    physical_id: Option<&'a str>,
    core_id: Option<&'a str>,
    speed: Option<&'a str>,
}

/// Parse `/proc/cpuinfo`.
///
/// Per-core speeds are deduplicated by (physical id, core id) when the
/// kernel reports physical ids. Without them, the first speed seen for each
/// core id is kept; without core ids either, every thread is listed.
pub fn parse_cpuinfo(raw: &str) -> CpuInfo {
    let mut model = NOT_AVAILABLE.to_string();
    let mut threads = 0usize;
    let mut blocks = Vec::new();

    for block in raw.split("\n\n") {
        let mut parsed = ProcessorBlock::default();
        for line in block.lines() {
            let value = || field_value(line);
            if line.starts_with("physical id") {
                parsed.physical_id = value();
            } else if line.starts_with("core id") {
                parsed.core_id = value();
            } else if line.starts_with("processor") {
                threads += 1;
            } else if line.starts_with("model name") {
                if let Some(name) = value() {
                    model = name.to_string();
                }
            } else if line.starts_with("cpu MHz") {
                parsed.speed = value();
            }
        }
        blocks.push(parsed);
    }

    let has_physical_id = blocks.iter().any(|b| b.physical_id.is_some());
    let has_core_id = blocks.iter().any(|b| b.core_id.is_some());

    let core_speeds_mhz = if has_physical_id {
        speeds_by_physical_core(&blocks)
    } else if has_core_id {
        speeds_by_core_id(&blocks)
    } else {
        blocks
            .iter()
            .filter_map(|b| b.speed)
            .map(str::to_string)
            .collect()
    };

    CpuInfo {
        model,
        core_speeds_mhz,
        threads: Some(threads),
    }
}

fn speeds_by_physical_core(blocks: &[ProcessorBlock<'_>]) -> Vec<String> {
    // Later threads of the same core overwrite earlier ones
    let mut by_core: BTreeMap<(i64, i64), &str> = BTreeMap::new();
    for block in blocks {
        if let (Some(phys), Some(core), Some(speed)) = (block.physical_id, block.core_id, block.speed)
        {
            let key = (phys.parse().unwrap_or(0), core.parse().unwrap_or(0));
            by_core.insert(key, speed);
        }
    }
    by_core.into_values().map(str::to_string).collect()
}

fn speeds_by_core_id(blocks: &[ProcessorBlock<'_>]) -> Vec<String> {
    let mut seen = HashSet::new();
    blocks
        .iter()
        .filter_map(|b| match (b.core_id, b.speed) {
            (Some(core), Some(speed)) if seen.insert(core) => Some(speed.to_string()),
            _ => None,
        })
        .collect()
}

fn field_value(line: &str) -> Option<&str> {
    line.split_once(':').map(|(_, value)| value.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_CORES_SMT: &str = "processor\t: 0
model name\t: AMD Ryzen 7 5800X 8-Core Processor
cpu MHz\t\t: 3800.000
physical id\t: 0
core id\t\t: 1

processor\t: 1
model name\t: AMD Ryzen 7 5800X 8-Core Processor
cpu MHz\t\t: 2200.000
physical id\t: 0
core id\t\t: 0

processor\t: 2
model name\t: AMD Ryzen 7 5800X 8-Core Processor
cpu MHz\t\t: 3900.000
physical id\t: 0
core id\t\t: 1

processor\t: 3
model name\t: AMD Ryzen 7 5800X 8-Core Processor
cpu MHz\t\t: 2100.000
physical id\t: 0
core id\t\t: 0
";

    #[test]
    fn test_dedupes_by_physical_and_core_id() {
        let cpu = parse_cpuinfo(TWO_CORES_SMT);
        assert_eq!(cpu.model, "AMD Ryzen 7 5800X 8-Core Processor");
        assert_eq!(cpu.threads, Some(4));
        // Sorted by core id, last thread of each core wins
        assert_eq!(cpu.core_speeds_mhz, vec!["2100.000", "3900.000"]);
        assert_eq!(cpu.cores(), 2);
    }

    #[test]
    fn test_orders_numerically_across_packages() {
        let raw = "processor : 0\ncpu MHz : 1.0\nphysical id : 1\ncore id : 10\n\n\
                   processor : 1\ncpu MHz : 2.0\nphysical id : 0\ncore id : 2\n\n\
                   processor : 2\ncpu MHz : 3.0\nphysical id : 0\ncore id : 10\n";
        let cpu = parse_cpuinfo(raw);
        assert_eq!(cpu.core_speeds_mhz, vec!["2.0", "3.0", "1.0"]);
    }

    #[test]
    fn test_core_id_fallback_keeps_first_speed() {
        let raw = "processor : 0\ncpu MHz : 1000\ncore id : 0\n\n\
                   processor : 1\ncpu MHz : 1100\ncore id : 1\n\n\
                   processor : 2\ncpu MHz : 1200\ncore id : 0\n";
        let cpu = parse_cpuinfo(raw);
        assert_eq!(cpu.core_speeds_mhz, vec!["1000", "1100"]);
        assert_eq!(cpu.threads, Some(3));
    }

    #[test]
    fn test_per_thread_fallback() {
        let raw = "processor : 0\ncpu MHz : 800\n\nprocessor : 1\ncpu MHz : 900\n";
        let cpu = parse_cpuinfo(raw);
        assert_eq!(cpu.core_speeds_mhz, vec!["800", "900"]);
        assert_eq!(cpu.model, NOT_AVAILABLE);
    }

    #[test]
    fn test_missing_cpuinfo() {
        let temp = tempfile::TempDir::new().unwrap();
        let cpu = collect(&SysRoot::new(temp.path()));
        assert_eq!(cpu, CpuInfo::unavailable());
    }
}
