//! Board, BIOS and memory summary scalars from `/sys/class/dmi/id`.

use crate::core::sysfs::{SysRoot, NOT_AVAILABLE};
use crate::core::system_info::types::{BiosInfo, BoardInfo, MemorySummary};

const DMI_ID: &str = "/sys/class/dmi/id";

fn dmi_field(root: &SysRoot, field: &str) -> String {
    root.read_non_empty(format!("{}/{}", DMI_ID, field))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn collect_board(root: &SysRoot) -> BoardInfo {
    BoardInfo {
        vendor: dmi_field(root, "board_vendor"),
        name: dmi_field(root, "board_name"),
        version: dmi_field(root, "board_version"),
        serial: dmi_field(root, "board_serial"),
    }
}

pub fn collect_bios(root: &SysRoot) -> BiosInfo {
    BiosInfo {
        vendor: dmi_field(root, "bios_vendor"),
        version: dmi_field(root, "bios_version"),
        date: dmi_field(root, "bios_date"),
        release: dmi_field(root, "bios_release"),
    }
}

/// Memory summary, present only when the firmware publishes at least one of
/// size, type or speed.
pub fn collect_memory_summary(root: &SysRoot) -> Option<MemorySummary> {
    let read = |field: &str| root.read_non_empty(format!("{}/{}", DMI_ID, field));

    let size = read("memory_size");
    let memory_type = read("memory_type");
    let speed = read("memory_speed");
    if size.is_none() && memory_type.is_none() && speed.is_none() {
        return None;
    }

    let or_na = |value: Option<String>| value.unwrap_or_else(|| NOT_AVAILABLE.to_string());
    Some(MemorySummary {
        size: or_na(size),
        memory_type: or_na(memory_type),
        speed: or_na(speed),
        bank_locator: or_na(read("memory_bank_locator")),
    })
}
