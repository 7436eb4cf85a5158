use std::fmt;

use chrono::{DateTime, Local};

use crate::core::sensors::SensorSections;
use crate::core::sysfs::NOT_AVAILABLE;

/// CPU identity and clocks from `/proc/cpuinfo`
#[derive(Debug, Clone, PartialEq)]
pub struct CpuInfo {
    pub model: String,
    /// Per-core clock speeds exactly as the kernel reports them (MHz)
    pub core_speeds_mhz: Vec<String>,
    pub threads: Option<usize>,
}

impl CpuInfo {
    pub fn unavailable() -> Self {
        Self {
            model: NOT_AVAILABLE.to_string(),
            core_speeds_mhz: Vec::new(),
            threads: None,
        }
    }

    /// Number of cores shown, one per deduplicated clock speed
    pub fn cores(&self) -> usize {
        self.core_speeds_mhz.len()
    }
}

/// Motherboard identity from `/sys/class/dmi/id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardInfo {
    pub vendor: String,
    pub name: String,
    pub version: String,
    pub serial: String,
}

/// BIOS identity from `/sys/class/dmi/id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiosInfo {
    pub vendor: String,
    pub version: String,
    pub date: String,
    pub release: String,
}

/// Memory summary scalars some firmwares expose under `/sys/class/dmi/id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySummary {
    pub size: String,
    pub memory_type: String,
    pub speed: String,
    pub bank_locator: String,
}

/// One populated DIMM decoded from an SMBIOS Type 17 structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryDevice {
    pub locator: String,
    pub bank_locator: String,
    pub size_mb: u32,
    pub speed_mhz: u16,
    pub memory_type: MemoryType,
    pub manufacturer: String,
}

/// SMBIOS Type 17 "Memory Type" field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryType {
    Other,
    Unknown,
    Dram,
    Edram,
    Vram,
    Sram,
    Ram,
    Rom,
    Flash,
    Eeprom,
    Feprom,
    Eprom,
    Cdram,
    ThreeDram,
    Sdram,
    Sgram,
    Rdram,
    Ddr,
    Ddr2,
    Ddr2FbDimm,
    Ddr3,
    Fbd2,
    Ddr4,
    Lpddr,
    Lpddr2,
    Lpddr3,
    Lpddr4,
    LogicalNonVolatile,
    Hbm,
    Hbm2,
    Ddr5,
    Lpddr5,
    Hbm3,
    /// A code outside the table, kept for diagnostics
    Unrecognized(u8),
}

impl MemoryType {
    pub fn from_code(code: u8) -> Self {
        match code {
            0x01 => MemoryType::Other,
            0x02 => MemoryType::Unknown,
            0x03 => MemoryType::Dram,
            0x04 => MemoryType::Edram,
            0x05 => MemoryType::Vram,
            0x06 => MemoryType::Sram,
            0x07 => MemoryType::Ram,
            0x08 => MemoryType::Rom,
            0x09 => MemoryType::Flash,
            0x0A => MemoryType::Eeprom,
            0x0B => MemoryType::Feprom,
            0x0C => MemoryType::Eprom,
            0x0D => MemoryType::Cdram,
            0x0E => MemoryType::ThreeDram,
            0x0F => MemoryType::Sdram,
            0x10 => MemoryType::Sgram,
            0x11 => MemoryType::Rdram,
            0x12 => MemoryType::Ddr,
            0x13 => MemoryType::Ddr2,
            0x14 => MemoryType::Ddr2FbDimm,
            0x18 => MemoryType::Ddr3,
            0x19 => MemoryType::Fbd2,
            0x1A => MemoryType::Ddr4,
            0x1B => MemoryType::Lpddr,
            0x1C => MemoryType::Lpddr2,
            0x1D => MemoryType::Lpddr3,
            0x1E => MemoryType::Lpddr4,
            0x1F => MemoryType::LogicalNonVolatile,
            0x20 => MemoryType::Hbm,
            0x21 => MemoryType::Hbm2,
            0x22 => MemoryType::Ddr5,
            0x23 => MemoryType::Lpddr5,
            0x24 => MemoryType::Hbm3,
            other => MemoryType::Unrecognized(other),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, MemoryType::Unrecognized(_))
    }
}

impl fmt::Display for MemoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MemoryType::Other => "Other",
            MemoryType::Unknown => "Unknown",
            MemoryType::Dram => "DRAM",
            MemoryType::Edram => "EDRAM",
            MemoryType::Vram => "VRAM",
            MemoryType::Sram => "SRAM",
            MemoryType::Ram => "RAM",
            MemoryType::Rom => "ROM",
            MemoryType::Flash => "Flash",
            MemoryType::Eeprom => "EEPROM",
            MemoryType::Feprom => "FEPROM",
            MemoryType::Eprom => "EPROM",
            MemoryType::Cdram => "CDRAM",
            MemoryType::ThreeDram => "3DRAM",
            MemoryType::Sdram => "SDRAM",
            MemoryType::Sgram => "SGRAM",
            MemoryType::Rdram => "RDRAM",
            MemoryType::Ddr => "DDR",
            MemoryType::Ddr2 => "DDR2",
            MemoryType::Ddr2FbDimm => "DDR2 FB-DIMM",
            MemoryType::Ddr3 => "DDR3",
            MemoryType::Fbd2 => "FBD2",
            MemoryType::Ddr4 => "DDR4",
            MemoryType::Lpddr => "LPDDR",
            MemoryType::Lpddr2 => "LPDDR2",
            MemoryType::Lpddr3 => "LPDDR3",
            MemoryType::Lpddr4 => "LPDDR4",
            MemoryType::LogicalNonVolatile => "Logical non-volatile device",
            MemoryType::Hbm => "HBM",
            MemoryType::Hbm2 => "HBM2",
            MemoryType::Ddr5 => "DDR5",
            MemoryType::Lpddr5 => "LPDDR5",
            MemoryType::Hbm3 => "HBM3",
            MemoryType::Unrecognized(_) => "Unrecognized",
        };
        write!(f, "{}", name)
    }
}

/// GPU identity, one line per field of the GPU card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpuInfo {
    pub vendor: String,
    pub subsystem_vendor: String,
    pub model: String,
    pub vram: String,
    pub vbios: String,
}

/// A block device with its partitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveInfo {
    pub name: String,
    pub model: String,
    pub size: Option<String>,
    pub partitions: Vec<PartitionInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionInfo {
    pub name: String,
    pub size: Option<String>,
    pub mount_point: Option<String>,
    pub luks: Option<LuksVolume>,
}

/// An opened device-mapper volume stacked on a partition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuksVolume {
    pub name: String,
    pub mount_point: Option<String>,
}

/// Outcome of the SMBIOS Type 17 scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RamBanks {
    Available(Vec<MemoryDevice>),
    /// No structure could be read, usually for lack of root privileges
    Unavailable { reason: String },
}

impl RamBanks {
    /// Sum of all bank sizes in MB, `None` when the scan failed
    pub fn total_mb(&self) -> Option<u64> {
        match self {
            RamBanks::Available(banks) => {
                Some(banks.iter().map(|bank| u64::from(bank.size_mb)).sum())
            }
            RamBanks::Unavailable { .. } => None,
        }
    }
}

/// Everything one refresh collected
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub collected_at: DateTime<Local>,
    pub cpu: CpuInfo,
    pub board: BoardInfo,
    pub bios: BiosInfo,
    pub memory_summary: Option<MemorySummary>,
    pub ram: RamBanks,
    pub drives: Vec<DriveInfo>,
    pub gpu: GpuInfo,
    pub sensors: SensorSections,
}
