//! Snapshot laid out as titled cards in three columns. Shared by the
//! dashboard and the plain-text report so both show the same content.

use crate::core::sensors::{RowValue, SensorSection};
use crate::core::sysfs::NOT_AVAILABLE;
use crate::core::system_info::storage::partition_tree;
use crate::core::system_info::types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Heading,
    /// Reading at or above its threshold
    Hot,
    /// Reading below its threshold
    Cool,
    Muted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLine {
    pub text: String,
    pub tone: Tone,
}

impl CardLine {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Plain,
        }
    }

    fn with_tone(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub lines: Vec<CardLine>,
}

impl Card {
    fn new(title: impl Into<String>, lines: Vec<CardLine>) -> Self {
        Self {
            title: title.into(),
            lines,
        }
    }
}

/// Left to right: system identity, storage and RAM, sensors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    pub system: Vec<Card>,
    pub storage: Vec<Card>,
    pub sensors: Vec<Card>,
}

/// `elevated` only decides whether to suggest running as root when the
/// RAM banks could not be read.
pub fn layout(snapshot: &Snapshot, elevated: bool) -> Columns {
    let system = vec![
        cpu_card(&snapshot.cpu),
        board_card(&snapshot.board),
        bios_card(&snapshot.bios),
        gpu_card(&snapshot.gpu),
    ];

    let mut storage: Vec<Card> = snapshot.drives.iter().map(drive_card).collect();
    storage.push(ram_card(
        &snapshot.ram,
        snapshot.memory_summary.as_ref(),
        elevated,
    ));

    let sensors = snapshot
        .sensors
        .all()
        .into_iter()
        .map(sensor_card)
        .collect();

    Columns {
        system,
        storage,
        sensors,
    }
}

fn cpu_card(cpu: &CpuInfo) -> Card {
    let mut lines = vec![CardLine::plain(format!("Model: {}", cpu.model))];
    lines.extend(
        cpu.core_speeds_mhz
            .iter()
            .enumerate()
            .map(|(i, speed)| CardLine::plain(format!("Core {}: {} MHz", i, speed))),
    );

    let cores = match cpu.cores() {
        0 => NOT_AVAILABLE.to_string(),
        n => n.to_string(),
    };
    let threads = cpu
        .threads
        .map(|n| n.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    lines.push(CardLine::plain(format!(
        "Cores: {}  Threads: {}",
        cores, threads
    )));

    Card::new("CPU Info", lines)
}

fn board_card(board: &BoardInfo) -> Card {
    Card::new(
        "Motherboard Info (DMI)",
        vec![
            CardLine::plain(format!("Vendor: {}", board.vendor)),
            CardLine::plain(format!("Name: {}", board.name)),
            CardLine::plain(format!("Version: {}", board.version)),
            CardLine::plain(format!("Serial: {}", board.serial)),
        ],
    )
}

fn bios_card(bios: &BiosInfo) -> Card {
    Card::new(
        "BIOS Info (DMI)",
        vec![
            CardLine::plain(format!("Vendor: {}", bios.vendor)),
            CardLine::plain(format!("Version: {}", bios.version)),
            CardLine::plain(format!("Date: {}", bios.date)),
            CardLine::plain(format!("Release: {}", bios.release)),
        ],
    )
}

fn gpu_card(gpu: &GpuInfo) -> Card {
    Card::new(
        "GPU Info",
        vec![
            CardLine::plain(format!("Vendor: {}", gpu.vendor)),
            CardLine::plain(format!("Subsystem Vendor: {}", gpu.subsystem_vendor)),
            CardLine::plain(format!("Model: {}", gpu.model)),
            CardLine::plain(format!("VRAM: {}", gpu.vram)),
            CardLine::plain(format!("VBIOS: {}", gpu.vbios)),
        ],
    )
}

fn drive_card(drive: &DriveInfo) -> Card {
    let mut lines = vec![CardLine::with_tone(
        format!("Model: {}", drive.model),
        Tone::Heading,
    )];
    lines.extend(partition_tree(drive).into_iter().map(CardLine::plain));

    Card::new(format!("Drive: {}", drive.name), lines)
}

fn ram_card(ram: &RamBanks, summary: Option<&MemorySummary>, elevated: bool) -> Card {
    let mut lines = Vec::new();

    match ram {
        RamBanks::Available(banks) => {
            let total = ram.total_mb().unwrap_or_default();
            lines.push(CardLine::plain(format!("Total RAM: {} MB", total)));

            if banks.is_empty() {
                lines.push(CardLine::with_tone("No RAM banks found", Tone::Muted));
            }

            for (i, bank) in banks.iter().enumerate() {
                lines.push(CardLine::with_tone(format!("Bank #{}", i + 1), Tone::Heading));
                lines.push(CardLine::plain(format!("  Locator: {}", bank.locator)));
                lines.push(CardLine::plain(format!("  Size: {} MB", bank.size_mb)));
                lines.push(CardLine::plain(format!("  Speed: {} MHz", bank.speed_mhz)));
                lines.push(CardLine::plain(format!("  Type: {}", bank.memory_type)));
                lines.push(CardLine::plain(format!(
                    "  Manufacturer: {}",
                    bank.manufacturer
                )));
            }
        }
        RamBanks::Unavailable { reason } => {
            if let Some(summary) = summary {
                lines.push(CardLine::plain(format!("Size: {}", summary.size)));
                lines.push(CardLine::plain(format!("Type: {}", summary.memory_type)));
                lines.push(CardLine::plain(format!("Speed: {}", summary.speed)));
                lines.push(CardLine::plain(format!("Bank: {}", summary.bank_locator)));
            }
            lines.push(CardLine::with_tone(
                format!("Per-bank details unavailable: {}", reason),
                Tone::Muted,
            ));
            if !elevated {
                lines.push(CardLine::with_tone(
                    "Run as root to read SMBIOS memory tables",
                    Tone::Muted,
                ));
            }
        }
    }

    Card::new("RAM Info", lines)
}

fn sensor_card(section: &SensorSection) -> Card {
    let mut lines: Vec<CardLine> = section
        .rows
        .iter()
        .map(|row| {
            let tone = match (row.value, row.hot) {
                (RowValue::Rpm(_), _) => Tone::Plain,
                (RowValue::Celsius(_), true) => Tone::Hot,
                (RowValue::Celsius(_), false) => Tone::Cool,
            };
            CardLine::with_tone(format!("{}: {}", row.label, row.value), tone)
        })
        .collect();

    if lines.is_empty() {
        lines.push(CardLine::with_tone("No sensor data", Tone::Muted));
    }

    Card::new(section.title, lines)
}
